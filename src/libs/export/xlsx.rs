//! Native Excel workbook rendering.

use crate::libs::error::WorklogError;
use crate::libs::layout::{CellStyle, CellValue, Grid};
use rust_xlsxwriter::{Color, ColNum, Format, FormatAlign, FormatUnderline, RowNum, Url, Workbook};

const HOURS_FORMAT: &str = "0.00";

struct Formats {
    plain: Format,
    label: Format,
    header: Format,
    title: Format,
    total: Format,
    hours: Format,
    total_hours: Format,
    link: Format,
}

impl Formats {
    fn new() -> Self {
        Self {
            plain: Format::new(),
            label: Format::new().set_bold(),
            header: Format::new().set_bold().set_background_color(Color::Gray),
            title: Format::new().set_bold().set_font_size(12.0).set_align(FormatAlign::Center),
            total: Format::new().set_bold(),
            hours: Format::new().set_num_format(HOURS_FORMAT),
            total_hours: Format::new().set_bold().set_num_format(HOURS_FORMAT),
            link: Format::new().set_font_color(Color::Blue).set_underline(FormatUnderline::Single),
        }
    }

    fn text(&self, style: CellStyle) -> &Format {
        match style {
            CellStyle::Plain => &self.plain,
            CellStyle::Label => &self.label,
            CellStyle::Header => &self.header,
            CellStyle::Title => &self.title,
            CellStyle::Total => &self.total,
        }
    }

    fn number(&self, style: CellStyle) -> &Format {
        match style {
            CellStyle::Total => &self.total_hours,
            _ => &self.hours,
        }
    }
}

fn position(column: u32, row: u32) -> Result<(RowNum, ColNum), WorklogError> {
    let column = ColNum::try_from(column - 1).map_err(|_| WorklogError::ExportFailed(format!("column {} out of range", column)))?;
    Ok((row - 1, column))
}

pub fn write(grid: &Grid) -> Result<Vec<u8>, WorklogError> {
    let formats = Formats::new();
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(grid.title())?;

    // Anchor cells of merged ranges are written by merge_range itself.
    for range in grid.merges() {
        let (first_row, first_col) = position(range.first_column, range.first_row)?;
        let (last_row, last_col) = position(range.last_column, range.last_row)?;
        let (text, style) = grid
            .cell(range.first_column, range.first_row)
            .map(|cell| (cell.value.display_text(), cell.style))
            .unwrap_or((String::new(), CellStyle::Plain));
        worksheet.merge_range(first_row, first_col, last_row, last_col, &text, formats.text(style))?;
    }

    for (column, row, cell) in grid.cells() {
        if grid.merge_at(column, row).is_some() {
            continue;
        }

        let (r, c) = position(column, row)?;
        match &cell.value {
            CellValue::Text(text) => {
                worksheet.write_string_with_format(r, c, text, formats.text(cell.style))?;
            }
            CellValue::Number(value) => {
                worksheet.write_number_with_format(r, c, *value, formats.number(cell.style))?;
            }
            CellValue::Link { text, url } => {
                worksheet.write_url_with_format(r, c, Url::new(url).set_text(text), &formats.link)?;
            }
        }
    }

    worksheet.autofit();
    Ok(workbook.save_to_buffer()?)
}
