//! Plain PDF rendering of a grid.
//!
//! Each sheet row becomes one line of monospaced text; columns are padded to
//! the widest value they hold. Pages are landscape A4, widened when the sheet
//! has more author blocks than fit. Hyperlinks are rendered as their text.
//!
//! Text is set in DejaVu Sans Mono, embedded in the document, so names and
//! summaries in any script covered by the font survive the export.

use crate::libs::error::WorklogError;
use crate::libs::formatter::format_hours;
use crate::libs::layout::{Cell, CellValue, Grid};
use printpdf::{Mm, PdfDocument};

const FONT: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSansMono.ttf");
const TITLE: &str = "Log report";
const LAYER: &str = "Text";

/// Sizes in points.
const FONT_SIZE: f32 = 9.0;
/// DejaVu Sans Mono advance width is 1233/2048 em.
const CHAR_WIDTH: f32 = FONT_SIZE * 0.602;
const LINE_HEIGHT: f32 = 12.0;
const MARGIN: f32 = 36.0;
const PAGE_WIDTH: f32 = 842.0;
const PAGE_HEIGHT: f32 = 595.0;
const COLUMN_GAP: usize = 2;

fn mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

fn cell_text(cell: &Cell) -> String {
    match &cell.value {
        CellValue::Number(value) => format_hours(*value),
        value => value.display_text(),
    }
}

/// Lays the grid out as fixed-width text lines.
pub fn text_lines(grid: &Grid) -> Vec<String> {
    let (columns, _) = grid.dimensions();
    let mut widths = vec![0usize; columns as usize];

    for (column, row, cell) in grid.cells() {
        // Merged text may spill over the cells it spans.
        if grid.merge_at(column, row).is_some() {
            continue;
        }
        let slot = &mut widths[column as usize - 1];
        *slot = (*slot).max(cell_text(cell).chars().count());
    }

    let offsets: Vec<usize> = widths
        .iter()
        .scan(0, |offset, width| {
            let start = *offset;
            *offset += width + COLUMN_GAP;
            Some(start)
        })
        .collect();

    grid.rows()
        .into_iter()
        .map(|row| {
            let mut line = String::new();
            for (index, cell) in row.into_iter().enumerate() {
                let Some(cell) = cell else { continue };
                let used = line.chars().count();
                if used < offsets[index] {
                    line.push_str(&" ".repeat(offsets[index] - used));
                } else if used > 0 {
                    line.push(' ');
                }
                line.push_str(&cell_text(cell));
            }
            line
        })
        .collect()
}

pub fn write(grid: &Grid) -> Result<Vec<u8>, WorklogError> {
    let lines = text_lines(grid);
    let longest = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let page_width = PAGE_WIDTH.max(MARGIN * 2.0 + longest as f32 * CHAR_WIDTH);
    let per_page = ((PAGE_HEIGHT - MARGIN * 2.0) / LINE_HEIGHT).floor().max(1.0) as usize;

    let (doc, first_page, first_layer) = PdfDocument::new(TITLE, mm(page_width), mm(PAGE_HEIGHT), LAYER);
    let font = doc.add_external_font(FONT).map_err(|e| WorklogError::ExportFailed(e.to_string()))?;

    let top = PAGE_HEIGHT - MARGIN - FONT_SIZE;
    for (index, page) in lines.chunks(per_page).enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(mm(page_width), mm(PAGE_HEIGHT), LAYER)
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for (offset, line) in page.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let y = top - offset as f32 * LINE_HEIGHT;
            layer.use_text(line.as_str(), FONT_SIZE, mm(MARGIN), mm(y), &font);
        }
    }

    doc.save_to_bytes().map_err(|e| WorklogError::ExportFailed(e.to_string()))
}
