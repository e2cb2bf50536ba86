// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{ options::AppOptions, state::SearchState },
    search::PendingSearch,
};

use super::{ actions, components };

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Business Extractor",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppOptions::default())))),
    )?;
    Ok(())
}

pub struct App {
    pub options: AppOptions,

    // single source of truth for what the page shows (UI thread only)
    pub state: SearchState,

    // form fields, as typed
    pub query_text: String,
    pub location_text: String,

    // output dir text field UX (we map this <-> ExportOptions)
    pub out_dir_text: String,

    // at most one search in flight
    pub pending: Option<PendingSearch>,

    pub status: String,
}

impl App {
    pub fn new(options: AppOptions) -> Self {
        let out_dir_text = options.export.out_dir().to_string_lossy().into_owned();
        logf!("Init: out_dir={} delay={}ms", out_dir_text, options.search.delay_ms);

        Self {
            options,
            state: SearchState::default(),
            query_text: s!(),
            location_text: s!(),
            out_dir_text,
            pending: None,
            status: s!("Idle"),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_search(self);

        egui::TopBottomPanel::bottom("note").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(
                    "Note: this demo uses simulated data. Extracting real listings needs a \
                     places API integration; always respect the provider's terms of service.",
                )
                .small()
                .weak(),
            );
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Business Extractor");
            ui.label("Search for businesses and export their information to Excel spreadsheets");
            ui.add_space(8.0);

            components::search_bar::draw(ui, self);
            components::action_buttons::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });

        if self.state.loading {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
