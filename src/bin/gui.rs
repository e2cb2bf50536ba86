// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use biz_extract::{ config::{ consts::LOG_FILE, state::GuiState }, gui, log };
use eframe::egui::ViewportBuilder;

fn main() {
    log::init_file(Path::new(LOG_FILE));

    let size = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Business Extractor")
            .with_inner_size([size.window_w as f32, size.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
