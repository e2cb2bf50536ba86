// src/gui/actions/search.rs
use eframe::egui;

use crate::{
    gui::{ app::App, progress::GuiProgress },
    progress::Progress,
    search,
};

pub fn search(app: &mut App, ctx: &egui::Context) {
    if app.pending.is_some() {
        logd!("Search: Clicked while a search is running; ignored");
        return;
    }

    let ctx2 = ctx.clone();
    let res = search::submit(
        &app.query_text,
        &app.location_text,
        &app.options.search,
        move || ctx2.request_repaint(),
    );

    match res {
        Ok(pending) => {
            GuiProgress::new(&mut app.status).begin(pending.request().query());
            app.state = app.state.started();
            app.pending = Some(pending);
        }
        Err(e) => {
            logd!("Search: Rejected: {}", e);
            app.state = app.state.failed(&e);
            app.status(format!("Error: {e}"));
        }
    }
}

/// Called every frame; swaps in the result set once the worker answers.
pub fn poll_search(app: &mut App) {
    let Some(pending) = app.pending.as_ref() else { return };
    let Some(outcome) = pending.poll() else { return };

    logf!(
        "Search: OK query={:?} found={} after {}ms",
        outcome.request.query(),
        outcome.records.len(),
        pending.elapsed().as_millis()
    );

    app.pending = None;
    GuiProgress::new(&mut app.status).finish(outcome.records.len());
    app.state = app.state.succeeded(outcome);
}
