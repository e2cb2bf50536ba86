// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Rejected before any generation work starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Please enter a search query")]
    EmptyQuery,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No data to export")]
    NoData,

    #[error("could not prepare output directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write workbook {path}: {source}")]
    Xlsx {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}
