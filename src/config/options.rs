// src/config/options.rs
use std::path::{ Path, PathBuf };
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub search: SearchOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Fixed part of the simulated latency.
    pub delay_ms: u64,
    /// Uniform extra delay in `0..=jitter_ms`.
    pub jitter_ms: u64,
    /// Reproducible listings when set.
    pub seed: Option<u64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            delay_ms: SEARCH_DELAY_MS,
            jitter_ms: JITTER_MS,
            seed: None,
        }
    }
}

impl SearchOptions {
    /// No latency at all; handy for tests and scripted runs.
    pub fn immediate() -> Self {
        Self { delay_ms: 0, jitter_ms: 0, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI/CLI text into the output directory. Blank text resets to the default.
    pub fn set_out_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            PathBuf::from(crate::core::sanitize::normalize_separators(s))
        };
    }

    pub fn is_default_dir(&self) -> bool {
        self.out_dir == Path::new(DEFAULT_OUT_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_out_dir_resets_to_default() {
        let mut opts = ExportOptions::default();
        opts.set_out_dir("exports/today");
        assert!(!opts.is_default_dir());
        opts.set_out_dir("   ");
        assert!(opts.is_default_dir());
    }

    #[test]
    fn default_search_delay_is_fixed() {
        let s = SearchOptions::default();
        assert_eq!(s.base_delay(), Duration::from_millis(SEARCH_DELAY_MS));
        assert_eq!(s.jitter_ms, 0);
        assert_eq!(s.seed, None);
    }
}
