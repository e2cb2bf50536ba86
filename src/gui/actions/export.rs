// src/gui/actions/export.rs
use std::path::{ Path, PathBuf };

use crate::{ export, gui::{ app::App, progress::GuiProgress }, progress::Progress };

pub fn export(app: &mut App) {
    app.options.export.set_out_dir(&app.out_dir_text);

    // Snapshot: a finishing search replaces state.businesses wholesale, never in place.
    let records = app.state.businesses.clone();
    let query = app.state.query.clone();

    match export::export_to_spreadsheet(&records, &query, &app.options.export) {
        Ok(path) => {
            app.state = app.state.cleared_error();
            GuiProgress::new(&mut app.status).log(&format!("Exported 1 file: {}", path.display()));
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.state = app.state.export_failed(&e);
            app.status(format!("Export error: {e}"));
        }
    }
}

/// Open the output folder in the system file explorer.
pub fn open_output_folder(app: &mut App) {
    app.options.export.set_out_dir(&app.out_dir_text);
    let folder = find_nearest_existing_parent(app.options.export.out_dir());

    // Convert to absolute path to ensure correct folder is opened
    let absolute_folder = match std::fs::canonicalize(&folder) {
        Ok(abs_path) => abs_path,
        Err(e) => {
            let msg = format!("Cannot resolve folder path: {}", e);
            loge!("{}", msg);
            app.status(msg);
            return;
        }
    };

    if let Err(e) = open_folder_in_explorer(&absolute_folder) {
        loge!("Failed to open folder: {}", e);
        app.status(format!("Failed to open folder: {}", e));
    } else {
        logf!("Opened folder: {}", absolute_folder.display());
    }
}

/// Walk up until an existing directory is found; falls back to ".".
fn find_nearest_existing_parent(path: &Path) -> PathBuf {
    let mut current = path.to_path_buf();
    loop {
        if current.is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => return PathBuf::from("."),
        }
    }
}

fn open_folder_in_explorer(path: &Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    let program = "explorer";
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(target_os = "linux")]
    let program = "xdg-open";

    #[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
    {
        std::process::Command::new(program)
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn {program}: {e}"))?;
        Ok(())
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        let _ = path;
        Err(s!("Opening folders not supported on this platform"))
    }
}
