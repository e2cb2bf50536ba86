// src/export.rs
//
// Spreadsheet export: one sheet, one header row, one row per record, in the
// order given.

use std::{
    fs,
    path::{ Path, PathBuf },
};

use chrono::{ NaiveDate, Utc };
use rust_xlsxwriter::{ Format, Workbook, XlsxError };

use crate::{
    business::BusinessRecord,
    config::{ consts::*, options::ExportOptions },
    core::sanitize::slugify,
    error::ExportError,
    table::{ self, Cell, HEADERS },
};

/// `businesses_<slug>_<YYYY-MM-DD>.xlsx`
pub fn export_file_name(query: &str, date: NaiveDate) -> String {
    format!("{FILE_PREFIX}_{}_{}.{FILE_EXT}", slugify(query), date.format("%Y-%m-%d"))
}

/// Write `records` to `<out_dir>/<export_file_name(query, today UTC)>`.
/// Returns the final path written to.
pub fn export_to_spreadsheet(
    records: &[BusinessRecord],
    query: &str,
    export: &ExportOptions,
) -> Result<PathBuf, ExportError> {
    export_on(records, query, export, Utc::now().date_naive())
}

/// [`export_to_spreadsheet`] with an explicit date.
pub fn export_on(
    records: &[BusinessRecord],
    query: &str,
    export: &ExportOptions,
    date: NaiveDate,
) -> Result<PathBuf, ExportError> {
    if records.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        return Err(ExportError::NoData);
    }

    let dir = export.out_dir();
    ensure_directory(dir)?;
    let path = dir.join(export_file_name(query, date));

    logf!("Export: Begin rows={} → {}", records.len(), path.display());
    write_workbook(&path, records)?;
    logf!("Export: OK {}", path.display());
    Ok(path)
}

/// Serialize to an in-memory .xlsx (no file system access).
pub fn workbook_bytes(records: &[BusinessRecord]) -> Result<Vec<u8>, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NoData);
    }
    let mut workbook = build_workbook(records)
        .map_err(|source| ExportError::Xlsx { path: PathBuf::new(), source })?;
    workbook
        .save_to_buffer()
        .map_err(|source| ExportError::Xlsx { path: PathBuf::new(), source })
}

fn write_workbook(path: &Path, records: &[BusinessRecord]) -> Result<(), ExportError> {
    let xlsx_err = |source| ExportError::Xlsx { path: path.to_path_buf(), source };
    let mut workbook = build_workbook(records).map_err(xlsx_err)?;
    workbook.save(path).map_err(xlsx_err)
}

fn build_workbook(records: &[BusinessRecord]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, h) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *h, &bold)?;
    }

    for (i, row) in table::rows(records).iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(s) => { sheet.write_string(r, col as u16, s)?; }
                Cell::Number(n) => { sheet.write_number(r, col as u16, *n)?; }
            }
        }
    }

    Ok(workbook)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io { path: dir.to_path_buf(), source };
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    if dir.exists() && !dir.is_dir() {
        return Err(io_err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            "path exists but is not a directory",
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir).map_err(io_err)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_matches_scheme() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(export_file_name("Coffee Shops", date), "businesses_Coffee_Shops_2024-01-15.xlsx");
    }

    #[test]
    fn empty_records_are_rejected_without_touching_disk() {
        let mut opts = ExportOptions::default();
        let dir = std::env::temp_dir().join("biz_extract_unit_nodata");
        let _ = fs::remove_dir_all(&dir);
        opts.set_out_dir(dir.to_str().unwrap());

        let res = export_to_spreadsheet(&[], "Gyms", &opts);
        assert!(matches!(res, Err(ExportError::NoData)));
        assert!(!dir.exists());
        assert!(matches!(workbook_bytes(&[]), Err(ExportError::NoData)));
    }
}
