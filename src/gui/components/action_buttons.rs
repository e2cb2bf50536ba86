// src/gui/components/action_buttons.rs

use eframe::egui::{ self, widgets::Spinner };
use crate::gui::{ actions, app::App };

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let loading = app.state.loading;

    ui.horizontal(|ui| {
        // Search
        let label = if loading { "Searching..." } else { "Search Businesses" };
        let indigo = egui::Color32::from_rgb(0x4F, 0x46, 0xE5);
        let button_search = ui.add_enabled(
            !loading,
            egui::Button::new(
                egui::RichText::new(label)
                .color(egui::Color32::WHITE)
                .strong())
            .fill(indigo));

        if button_search.clicked() {
            actions::search(app, ui.ctx());
        }

        if loading {
            ui.add(Spinner::new().size(16.0));
        }

        // Export (only with something to export)
        if app.state.has_results() {
            let green = egui::Color32::from_rgb(0x16, 0xA3, 0x4A);
            let button_export = ui.add(
                egui::Button::new(
                    egui::RichText::new("Export to Excel")
                    .color(egui::Color32::WHITE))
                .fill(green));
            if button_export.clicked() {
                logf!("UI: Export clicked ({} rows)", app.state.businesses.len());
                actions::export(app);
            }
        }
    });

    // Output dir + status
    let mut open_folder_clicked = false;
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_dir_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.options.export.set_out_dir(&app.out_dir_text);
            logd!("UI: out_dir_text changed → {}", app.out_dir_text);
        }

        if app.options.export.is_default_dir() {
            ui.label(egui::RichText::new("(default)").weak());
        }

        if ui.button("📁").on_hover_text("Open output folder").clicked() {
            open_folder_clicked = true;
        }

        ui.label(app.status.as_str());
    });

    // Handle open folder after the borrow ends
    if open_folder_clicked {
        actions::open_output_folder(app);
    }
}
