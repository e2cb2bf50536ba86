// src/table.rs
//
// Flat row view of the records, shared by the GUI table, the CLI printout
// and the spreadsheet writer so all three agree on headers and placeholders.

use std::fmt;

use crate::{ business::BusinessRecord, config::consts::PLACEHOLDER };

pub const HEADERS: [&str; 5] = ["Business Name", "Phone Number", "Location", "Rating", "Reviews"];

/// Columns that hold numbers (right/center aligned in the GUI).
pub const NUMERIC_COLUMNS: &[usize] = &[3, 4];

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{n}"),
        }
    }
}

pub type Row = [Cell; 5];

pub fn record_row(b: &BusinessRecord) -> Row {
    let placeholder = || Cell::Text(s!(PLACEHOLDER));
    [
        Cell::Text(b.name.clone()),
        Cell::Text(b.phone.clone()),
        Cell::Text(b.address.clone()),
        b.rating.map(Cell::Number).unwrap_or_else(placeholder),
        b.reviews.map(|n| Cell::Number(f64::from(n))).unwrap_or_else(placeholder),
    ]
}

/// Same order as the input; no sorting.
pub fn rows(records: &[BusinessRecord]) -> Vec<Row> {
    records.iter().map(record_row).collect()
}

/// Plain-text table with padded columns (CLI output).
pub fn to_text(records: &[BusinessRecord]) -> String {
    let body: Vec<Vec<String>> = rows(records)
        .iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = s!();
    let header: Vec<String> = HEADERS.iter().map(|h| s!(*h)).collect();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &body {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut first = true;
    for (cell, w) in cells.iter().zip(widths) {
        if !first { out.push_str("  "); } else { first = false; }
        let pad = w.saturating_sub(cell.chars().count());
        out.push_str(cell);
        out.extend(std::iter::repeat_n(' ', pad));
    }
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec() -> BusinessRecord {
        BusinessRecord {
            name: s!("Urban Gyms"),
            phone: s!("+1 (303) 555-1234"),
            address: s!("7 Oak Ave, Denver, NY 80202"),
            rating: Some(4.5),
            reviews: None,
        }
    }

    #[test]
    fn absent_fields_become_placeholder_text() {
        let row = record_row(&rec());
        assert_eq!(row[3], Cell::Number(4.5));
        assert_eq!(row[4], Cell::Text(s!("N/A")));
    }

    #[test]
    fn text_table_has_header_rule_and_rows() {
        let text = to_text(&[rec(), rec()]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Business Name"));
        assert!(lines[1].starts_with("-----"));
        assert!(lines[2].contains("+1 (303) 555-1234"));
        assert!(lines[2].ends_with("N/A"));
    }
}
