// src/gui/components/search_bar.rs
//
// Query + location fields. Enter in either field submits.

use eframe::egui;
use crate::gui::{ actions, app::App };

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut submit = false;

    ui.label(egui::RichText::new("Search Query *").strong());
    let q = ui.add(
        egui::TextEdit::singleline(&mut app.query_text)
            .hint_text("e.g., Coffee shops, Restaurants, Gyms")
            .desired_width(f32::INFINITY),
    );
    submit |= q.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.add_space(4.0);

    ui.label(egui::RichText::new("Location (Optional)").strong());
    let l = ui.add(
        egui::TextEdit::singleline(&mut app.location_text)
            .hint_text("e.g., New York, Los Angeles, Chicago")
            .desired_width(f32::INFINITY),
    );
    submit |= l.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    if submit {
        logd!("UI: Enter pressed in search form");
        actions::search(app, ui.ctx());
    }

    ui.add_space(6.0);

    if let Some(err) = &app.state.error {
        let red = egui::Color32::from_rgb(0xB9, 0x1C, 0x1C);
        ui.label(egui::RichText::new(err).color(red));
        ui.add_space(4.0);
    }
}
