//! Cursor-driven sheet layout.
//!
//! Lays an [`AggregationResult`] out on a single logical sheet: an info block
//! in the top-left corner, then one block per author running left to right,
//! all top-aligned. Positions come purely from cursor arithmetic; the engine
//! never reads back what it already wrote.
//!
//! ```text
//!   A        B      C  D          E       F                 G          H  I ...
//! 1 Project  DEMO      alice (merged D:G)                              bob ...
//! 2 Sprint   -         Worklog    Issue   Started           Time (h)
//! 3 From     ...       10001      DEMO-1  2024-01-15 10:00  1.00
//! 4 To       ...       Total (merged D:F)                   1.00
//! ```
//!
//! The finished [`Grid`] is format-neutral; [`crate::libs::export`] turns it
//! into bytes.

use crate::libs::aggregate::{AggregationResult, AuthorLog};
use crate::libs::formatter::{format_day, format_started};
use crate::libs::window::DateWindow;
use crate::libs::worklog::WorklogEntry;
use std::collections::BTreeMap;

pub const SHEET_TITLE: &str = "Log report";
pub const LOG_HEADERS: [&str; 4] = ["Worklog", "Issue", "Started", "Time (h)"];

/// Columns the info block reserves before the first author block.
const INFO_BLOCK_ADVANCE: i32 = 3;
/// Width of an author block including the gap to the next one.
const AUTHOR_BLOCK_ADVANCE: i32 = 5;
const AUTHOR_BLOCK_WIDTH: u32 = 4;

/// Next write position. Both coordinates are 1-based and never drop below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    column: u32,
    row: u32,
}

impl Default for Cursor {
    fn default() -> Self {
        Self { column: 1, row: 1 }
    }
}

impl Cursor {
    pub fn new(column: u32, row: u32) -> Self {
        Self {
            column: column.max(1),
            row: row.max(1),
        }
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn move_by(&mut self, d_col: i32, d_row: i32) -> &mut Self {
        self.column = self.column.saturating_add_signed(d_col).max(1);
        self.row = self.row.saturating_add_signed(d_row).max(1);
        self
    }

    pub fn absolute_to(&mut self, column: u32, row: u32) -> &mut Self {
        *self = Self::new(column, row);
        self
    }

    /// A1-style reference, e.g. `D12`.
    pub fn cell_ref(&self) -> String {
        format!("{}{}", column_letter(self.column), self.row)
    }
}

/// Spreadsheet column name for a 1-based index: 1 → `A`, 27 → `AA`.
pub fn column_letter(column: u32) -> String {
    let mut column = column;
    let mut letters = Vec::new();
    while column > 0 {
        let rem = (column - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        column = (column - 1) / 26;
    }
    letters.iter().rev().collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Link { text: String, url: String },
}

impl CellValue {
    /// What a reader sees in the cell.
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Text(text) => text.clone(),
            CellValue::Number(value) => format!("{:.2}", value),
            CellValue::Link { text, .. } => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Plain,
    Label,
    Header,
    Title,
    Total,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub value: CellValue,
    pub style: CellStyle,
}

/// Inclusive rectangle of merged cells, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergedRange {
    pub first_column: u32,
    pub first_row: u32,
    pub last_column: u32,
    pub last_row: u32,
}

impl MergedRange {
    pub fn covers(&self, column: u32, row: u32) -> bool {
        (self.first_column..=self.last_column).contains(&column) && (self.first_row..=self.last_row).contains(&row)
    }

    pub fn is_anchor(&self, column: u32, row: u32) -> bool {
        self.first_column == column && self.first_row == row
    }
}

/// A populated sheet: cells keyed by `(row, column)` plus merged ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    title: String,
    cells: BTreeMap<(u32, u32), Cell>,
    merges: Vec<MergedRange>,
}

impl Grid {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            cells: BTreeMap::new(),
            merges: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn put(&mut self, at: Cursor, value: CellValue, style: CellStyle) {
        self.cells.insert((at.row(), at.column()), Cell { value, style });
    }

    fn merge(&mut self, range: MergedRange) {
        self.merges.push(range);
    }

    pub fn cell(&self, column: u32, row: u32) -> Option<&Cell> {
        self.cells.get(&(row, column))
    }

    /// Cells in row-major order as `(column, row, cell)`.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, &Cell)> {
        self.cells.iter().map(|(&(row, column), cell)| (column, row, cell))
    }

    pub fn merges(&self) -> &[MergedRange] {
        &self.merges
    }

    /// The merge a cell belongs to, if any.
    pub fn merge_at(&self, column: u32, row: u32) -> Option<&MergedRange> {
        self.merges.iter().find(|range| range.covers(column, row))
    }

    /// `(columns, rows)` of the smallest rectangle holding every cell and merge.
    pub fn dimensions(&self) -> (u32, u32) {
        let cells = self.cells.keys().map(|&(row, column)| (column, row));
        let merges = self.merges.iter().map(|range| (range.last_column, range.last_row));
        cells
            .chain(merges)
            .fold((0, 0), |(columns, rows), (column, row)| (columns.max(column), rows.max(row)))
    }

    /// Every row of the bounding rectangle, missing cells as `None`.
    pub fn rows(&self) -> Vec<Vec<Option<&Cell>>> {
        let (columns, rows) = self.dimensions();
        (1..=rows)
            .map(|row| (1..=columns).map(|column| self.cell(column, row)).collect())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Header information shown in the info block.
#[derive(Debug, Clone)]
pub struct ReportInfo {
    pub project: String,
    pub sprint: Option<String>,
    pub window: DateWindow,
}

pub fn worklog_url(base_url: &str, issue_key: &str, worklog_id: &str) -> String {
    format!(
        "{}/browse/{}?focusedWorklogId={}&page=com.atlassian.jira.plugin.system.issuetabpanels%3Aworklog-tabpanel#worklog-{}",
        base_url.trim_end_matches('/'),
        issue_key,
        worklog_id,
        worklog_id
    )
}

pub fn issue_url(base_url: &str, issue_key: &str) -> String {
    format!("{}/browse/{}", base_url.trim_end_matches('/'), issue_key)
}

/// Renders one report. Each call owns a fresh cursor and grid.
pub fn render(result: &AggregationResult, info: &ReportInfo, base_url: &str) -> Grid {
    let mut engine = LayoutEngine::new(base_url);
    engine.write_info(info);
    for log in result.entries_by_author() {
        engine.write_author(log);
    }
    engine.finish()
}

struct LayoutEngine<'a> {
    base_url: &'a str,
    cursor: Cursor,
    grid: Grid,
}

impl<'a> LayoutEngine<'a> {
    fn new(base_url: &'a str) -> Self {
        Self {
            base_url,
            cursor: Cursor::default(),
            grid: Grid::new(SHEET_TITLE),
        }
    }

    fn text(&mut self, text: &str, style: CellStyle) {
        self.grid.put(self.cursor, CellValue::Text(text.to_string()), style);
    }

    fn write_info(&mut self, info: &ReportInfo) {
        let origin = self.cursor;
        let rows = [
            ("Project", info.project.clone()),
            ("Sprint", info.sprint.clone().unwrap_or_else(|| "-".to_string())),
            ("From", format_day(&info.window.from())),
            ("To", format_day(&info.window.to())),
        ];

        for (label, value) in rows {
            self.text(label, CellStyle::Label);
            self.cursor.move_by(1, 0);
            self.text(&value, CellStyle::Plain);
            self.cursor.move_by(-1, 1);
        }

        self.cursor.absolute_to(origin.column(), origin.row()).move_by(INFO_BLOCK_ADVANCE, 0);
    }

    fn write_author(&mut self, log: &AuthorLog) {
        let origin = self.cursor;

        self.merge_from_cursor(AUTHOR_BLOCK_WIDTH);
        self.text(&log.author.display_name, CellStyle::Title);
        self.cursor.move_by(0, 1);

        for header in LOG_HEADERS {
            self.text(header, CellStyle::Header);
            self.cursor.move_by(1, 0);
        }
        self.cursor.move_by(-(LOG_HEADERS.len() as i32), 1);

        for entry in &log.entries {
            self.write_entry(entry);
        }

        self.merge_from_cursor(AUTHOR_BLOCK_WIDTH - 1);
        self.text("Total", CellStyle::Total);
        self.cursor.move_by(AUTHOR_BLOCK_WIDTH as i32 - 1, 0);
        self.grid.put(self.cursor, CellValue::Number(log.total_hours()), CellStyle::Total);

        self.cursor.absolute_to(origin.column(), origin.row()).move_by(AUTHOR_BLOCK_ADVANCE, 0);
    }

    fn write_entry(&mut self, entry: &WorklogEntry) {
        let link = CellValue::Link {
            text: entry.id.clone(),
            url: worklog_url(self.base_url, &entry.issue_key, &entry.id),
        };
        self.grid.put(self.cursor, link, CellStyle::Plain);
        self.cursor.move_by(1, 0);

        let link = CellValue::Link {
            text: entry.issue_key.clone(),
            url: issue_url(self.base_url, &entry.issue_key),
        };
        self.grid.put(self.cursor, link, CellStyle::Plain);
        self.cursor.move_by(1, 0);

        self.text(&format_started(&entry.started_at), CellStyle::Plain);
        self.cursor.move_by(1, 0);

        self.grid.put(self.cursor, CellValue::Number(entry.hours()), CellStyle::Plain);
        self.cursor.move_by(-3, 1);
    }

    /// Merges `width` cells to the right starting at the cursor, on the cursor's row.
    fn merge_from_cursor(&mut self, width: u32) {
        self.grid.merge(MergedRange {
            first_column: self.cursor.column(),
            first_row: self.cursor.row(),
            last_column: self.cursor.column() + width - 1,
            last_row: self.cursor.row(),
        });
    }

    fn finish(self) -> Grid {
        self.grid
    }
}
