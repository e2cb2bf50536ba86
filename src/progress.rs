// src/progress.rs
/// Lightweight progress reporting used by search/export.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// A search was accepted and is waiting on the simulated delay.
    fn begin(&mut self, _query: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once with the number of records found.
    fn finish(&mut self, _found: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
