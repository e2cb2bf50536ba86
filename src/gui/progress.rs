// src/gui/progress.rs
use crate::progress::Progress;

/// Writes search/export status into the app's status line.
pub struct GuiProgress<'a> {
    status: &'a mut String,
}

impl<'a> GuiProgress<'a> {
    pub fn new(status: &'a mut String) -> Self {
        Self { status }
    }
}

impl Progress for GuiProgress<'_> {
    fn begin(&mut self, query: &str) {
        *self.status = format!("Searching for \"{query}\"…");
    }
    fn log(&mut self, msg: &str) {
        *self.status = s!(msg);
    }
    fn finish(&mut self, found: usize) {
        *self.status = format!("Ready: {found} businesses");
    }
}
