// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{export, poll_search, search}.

mod export;  // src/gui/actions/export.rs
mod search;  // src/gui/actions/search.rs

pub use export::{ export, open_output_folder };
pub use search::{ poll_search, search };
