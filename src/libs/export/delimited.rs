//! CSV rendering of a grid.
//!
//! The grid's bounding rectangle is written row by row with every record the
//! same width. Merged ranges keep their value in the first cell only. Hours
//! are written at full precision so entry rows add up to their total row.

use crate::libs::error::WorklogError;
use crate::libs::layout::{Cell, CellValue, Grid};

/// Spreadsheet formula that renders `text` as a link to `url`.
pub fn hyperlink_formula(url: &str, text: &str) -> String {
    format!("=HYPERLINK(\"{}\",\"{}\")", url.replace('"', "\"\""), text.replace('"', "\"\""))
}

fn field(cell: Option<&Cell>) -> String {
    match cell.map(|cell| &cell.value) {
        None => String::new(),
        Some(CellValue::Text(text)) => text.clone(),
        Some(CellValue::Number(value)) => value.to_string(),
        Some(CellValue::Link { text, url }) => hyperlink_formula(url, text),
    }
}

pub fn write(grid: &Grid) -> Result<Vec<u8>, WorklogError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for row in grid.rows() {
        let record: Vec<String> = row.into_iter().map(field).collect();
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    wtr.into_inner().map_err(|e| WorklogError::ExportFailed(e.to_string()))
}
