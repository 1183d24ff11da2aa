//! Document export for laid-out worklog reports.
//!
//! Turns a populated [`Grid`] into the bytes of a downloadable document plus
//! the filename and content type to serve it with.
//!
//! ## Formats
//!
//! - **csv**: values only; hyperlinks become `=HYPERLINK("url","text")` formulas
//! - **xls**: Excel 2003 XML spreadsheet with links, merges and styles
//! - **xlsx**: native workbook via `rust_xlsxwriter` with real hyperlinks,
//!   merged ranges and cell formats
//! - **pdf**: fixed-width text rendering of the sheet with an embedded font
//!
//! Any other tag is rejected with [`WorklogError::UnsupportedFormat`]; there is
//! no fallback format.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jiralog::libs::export::{export_grid, ExportFormat};
//!
//! let format: ExportFormat = "xlsx".parse()?;
//! let document = export_grid(&grid, &window, format)?;
//! document.save(std::path::Path::new(&document.filename))?;
//! ```

use crate::libs::error::WorklogError;
use crate::libs::formatter::format_file_day;
use crate::libs::layout::Grid;
use crate::libs::window::DateWindow;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

pub mod delimited;
pub mod pdf;
pub mod xlsx;
pub mod xml_spreadsheet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xls,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [ExportFormat::Csv, ExportFormat::Xls, ExportFormat::Xlsx, ExportFormat::Pdf];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xls => "xls",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Xls => "application/vnd.ms-excel",
            ExportFormat::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = WorklogError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xls" => Ok(ExportFormat::Xls),
            "xlsx" => Ok(ExportFormat::Xlsx),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(WorklogError::UnsupportedFormat(tag.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub content_type: String,
}

impl ExportedDocument {
    pub fn save(&self, path: &Path) -> Result<(), WorklogError> {
        File::create(path)?.write_all(&self.bytes)?;
        Ok(())
    }
}

/// `{from:DD-MM-YYYY}-{to:DD-MM-YYYY}.{ext}`
pub fn filename(window: &DateWindow, format: ExportFormat) -> String {
    format!(
        "{}-{}.{}",
        format_file_day(&window.first_day()),
        format_file_day(&window.last_day()),
        format.extension()
    )
}

pub fn serialize(grid: &Grid, format: ExportFormat) -> Result<Vec<u8>, WorklogError> {
    match format {
        ExportFormat::Csv => delimited::write(grid),
        ExportFormat::Xls => Ok(xml_spreadsheet::write(grid)),
        ExportFormat::Xlsx => xlsx::write(grid),
        ExportFormat::Pdf => pdf::write(grid),
    }
}

pub fn export_grid(grid: &Grid, window: &DateWindow, format: ExportFormat) -> Result<ExportedDocument, WorklogError> {
    Ok(ExportedDocument {
        bytes: serialize(grid, format)?,
        filename: filename(window, format),
        content_type: format.content_type().to_string(),
    })
}
