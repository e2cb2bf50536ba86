// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::{
    config::options::{ AppOptions, SearchOptions },
    config::consts::{ JITTER_MS, SEARCH_DELAY_MS },
    error::{ ExportError, SearchError },
    export,
    progress::Progress,
    search, table,
};

#[derive(Debug, Parser)]
#[command(name = "cli")]
#[command(about = "Generate mock business listings and export them to Excel")]
pub struct Args {
    /// What to look for, e.g. "Coffee shops"
    pub query: String,

    /// City used in addresses (default: New York)
    #[arg(short, long, default_value = "")]
    pub location: String,

    /// Directory the .xlsx is written to
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Simulated latency before results arrive
    #[arg(long, default_value_t = SEARCH_DELAY_MS)]
    pub delay_ms: u64,

    /// Extra random latency, 0..=N ms
    #[arg(long, default_value_t = JITTER_MS)]
    pub jitter_ms: u64,

    /// Reproducible listings
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the table only
    #[arg(long)]
    pub no_export: bool,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl Args {
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions {
            search: SearchOptions {
                delay_ms: self.delay_ms,
                jitter_ms: self.jitter_ms,
                seed: self.seed,
            },
            ..AppOptions::default()
        };
        if let Some(dir) = &self.out_dir {
            opts.export.set_out_dir(&dir.to_string_lossy());
        }
        opts
    }
}

/// Status lines go to stderr so stdout stays a clean table.
struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, query: &str) {
        eprintln!("Searching for {query:?}...");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn finish(&mut self, found: usize) {
        eprintln!("Found {found} Businesses");
    }
}

pub fn run() -> Result<(), CliError> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<(), CliError> {
    let opts = args.options();
    let mut prog = CliProgress;

    let outcome = search::run_blocking(&args.query, &args.location, &opts.search, &mut prog)?;
    print!("{}", table::to_text(&outcome.records));

    if args.no_export {
        return Ok(());
    }

    let path = export::export_to_spreadsheet(&outcome.records, outcome.request.query(), &opts.export)?;
    prog.log(&format!("Wrote {}", path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_options() {
        let args = Args::parse_from([
            "cli", "Coffee shops", "--location", "Chicago",
            "--delay-ms", "0", "--seed", "3", "-o", "exports",
        ]);
        let opts = args.options();
        assert_eq!(args.query, "Coffee shops");
        assert_eq!(args.location, "Chicago");
        assert_eq!(opts.search.delay_ms, 0);
        assert_eq!(opts.search.seed, Some(3));
        assert_eq!(opts.export.out_dir(), std::path::Path::new("exports"));
    }

    #[test]
    fn blank_query_is_an_error() {
        let args = Args::parse_from(["cli", "  ", "--delay-ms", "0", "--no-export"]);
        assert!(matches!(run_with(args), Err(CliError::Search(SearchError::EmptyQuery))));
    }
}
