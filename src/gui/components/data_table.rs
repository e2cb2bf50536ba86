// src/gui/components/data_table.rs
//
// Draws the result table. Purely a view over app.state.businesses.

use eframe::egui::{ self, Align, Layout, RichText, TextWrapMode };
use egui_extras::{ Column, TableBuilder };

use crate::{
    gui::app::App,
    table::{ HEADERS, NUMERIC_COLUMNS },
};

const COLUMN_WIDTHS: [f32; 5] = [220.0, 150.0, 320.0, 70.0, 70.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if !app.state.has_results() {
        return;
    }

    // Snapshot; rendering never observes a half-replaced result set.
    let records = app.state.businesses.clone();

    ui.heading(format!("Found {} Businesses", records.len()));
    ui.add_space(4.0);

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0);
    for w in COLUMN_WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for (ci, h) in HEADERS.iter().enumerate() {
                header.col(|ui| {
                    aligned(ui, ci, RichText::new(*h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, records.len(), |mut row| {
                let Some(b) = records.get(row.index()) else { return };
                let rating = match b.rating {
                    Some(_) => format!("⭐ {}", b.rating_text()),
                    None => b.rating_text(),
                };
                let cells = [
                    RichText::new(&b.name).strong(),
                    RichText::new(format!("📞 {}", b.phone)),
                    RichText::new(&b.address),
                    RichText::new(rating),
                    RichText::new(b.reviews_text()),
                ];
                for (ci, cell) in cells.into_iter().enumerate() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        aligned(ui, ci, cell);
                    });
                }
            });
        });
}

fn aligned(ui: &mut egui::Ui, ci: usize, text: RichText) {
    if NUMERIC_COLUMNS.contains(&ci) {
        ui.centered_and_justified(|ui| { ui.label(text); });
    } else {
        ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
    }
}
