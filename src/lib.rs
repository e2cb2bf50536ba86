// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod business;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod generator;
pub mod gui;
pub mod progress;
pub mod search;
pub mod table;

// Used by the logging macros; not part of the public API.
#[doc(hidden)]
pub use tracing;
