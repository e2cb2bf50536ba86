// src/config/state.rs
use std::sync::Arc;

use crate::{ business::BusinessRecord, search::SearchOutcome };

/// What the page shows. Each transition builds a fresh value from the
/// previous one; results are swapped in whole, never patched.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    /// Query that produced `businesses` (used for the export file name).
    pub query: String,
    pub location: String,
    pub businesses: Arc<[BusinessRecord]>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SearchState {
    pub fn started(&self) -> Self {
        Self { loading: true, error: None, ..self.clone() }
    }

    pub fn succeeded(&self, outcome: SearchOutcome) -> Self {
        Self {
            query: s!(outcome.request.query()),
            location: s!(outcome.request.location()),
            businesses: outcome.records.into(),
            loading: false,
            error: None,
        }
    }

    /// Rejected search: keep the current results, show the message.
    pub fn failed(&self, err: &dyn std::error::Error) -> Self {
        Self { loading: false, error: Some(err.to_string()), ..self.clone() }
    }

    /// Export failure. A search may still be in flight, so `loading` is left alone.
    pub fn export_failed(&self, err: &dyn std::error::Error) -> Self {
        Self { error: Some(err.to_string()), ..self.clone() }
    }

    pub fn cleared_error(&self) -> Self {
        Self { error: None, ..self.clone() }
    }

    pub fn has_results(&self) -> bool {
        !self.businesses.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self { window_w: 1100, window_h: 700 }
    }
}
