//! Excel 2003 XML spreadsheet (SpreadsheetML), served with the `.xls` extension.
//!
//! Excel and LibreOffice open this as a legacy workbook. It keeps hyperlinks
//! (`ss:HRef`), horizontal merges (`ss:MergeAcross`) and named styles.

use crate::libs::layout::{Cell, CellStyle, CellValue, Grid};

const PROLOGUE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<?mso-application progid="Excel.Sheet"?>
<Workbook xmlns="urn:schemas-microsoft-com:office:spreadsheet"
 xmlns:o="urn:schemas-microsoft-com:office:office"
 xmlns:x="urn:schemas-microsoft-com:office:excel"
 xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">
 <Styles>
  <Style ss:ID="Default" ss:Name="Normal"/>
  <Style ss:ID="label"><Font ss:Bold="1"/></Style>
  <Style ss:ID="header"><Font ss:Bold="1"/><Interior ss:Color="#C0C0C0" ss:Pattern="Solid"/></Style>
  <Style ss:ID="title"><Alignment ss:Horizontal="Center"/><Font ss:Bold="1" ss:Size="12"/></Style>
  <Style ss:ID="total"><Font ss:Bold="1"/></Style>
  <Style ss:ID="hours"><NumberFormat ss:Format="0.00"/></Style>
  <Style ss:ID="totalHours"><Font ss:Bold="1"/><NumberFormat ss:Format="0.00"/></Style>
  <Style ss:ID="link"><Font ss:Color="#0000FF" ss:Underline="Single"/></Style>
 </Styles>
"##;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn style_id(cell: &Cell) -> &'static str {
    match (&cell.value, cell.style) {
        (CellValue::Link { .. }, _) => "link",
        (CellValue::Number(_), CellStyle::Total) => "totalHours",
        (CellValue::Number(_), _) => "hours",
        (_, CellStyle::Plain) => "Default",
        (_, CellStyle::Label) => "label",
        (_, CellStyle::Header) => "header",
        (_, CellStyle::Title) => "title",
        (_, CellStyle::Total) => "total",
    }
}

fn write_cell(out: &mut String, grid: &Grid, column: u32, row: u32, cell: &Cell) {
    out.push_str(&format!("    <Cell ss:Index=\"{}\" ss:StyleID=\"{}\"", column, style_id(cell)));

    if let Some(range) = grid.merge_at(column, row) {
        if range.last_column > range.first_column {
            out.push_str(&format!(" ss:MergeAcross=\"{}\"", range.last_column - range.first_column));
        }
        if range.last_row > range.first_row {
            out.push_str(&format!(" ss:MergeDown=\"{}\"", range.last_row - range.first_row));
        }
    }

    let data = match &cell.value {
        CellValue::Text(text) => format!("><Data ss:Type=\"String\">{}</Data></Cell>\n", escape(text)),
        CellValue::Number(value) => format!("><Data ss:Type=\"Number\">{}</Data></Cell>\n", value),
        CellValue::Link { text, url } => {
            format!(" ss:HRef=\"{}\"><Data ss:Type=\"String\">{}</Data></Cell>\n", escape(url), escape(text))
        }
    };
    out.push_str(&data);
}

pub fn write(grid: &Grid) -> Vec<u8> {
    let mut out = String::from(PROLOGUE);
    out.push_str(&format!(" <Worksheet ss:Name=\"{}\">\n", escape(grid.title())));
    out.push_str("  <Table>\n");

    let mut current_row = 0;
    for (column, row, cell) in grid.cells() {
        // Only the anchor of a merged range carries content.
        if grid.merge_at(column, row).is_some_and(|range| !range.is_anchor(column, row)) {
            continue;
        }

        if row != current_row {
            if current_row != 0 {
                out.push_str("   </Row>\n");
            }
            out.push_str(&format!("   <Row ss:Index=\"{}\">\n", row));
            current_row = row;
        }
        write_cell(&mut out, grid, column, row, cell);
    }
    if current_row != 0 {
        out.push_str("   </Row>\n");
    }

    out.push_str("  </Table>\n </Worksheet>\n</Workbook>\n");
    out.into_bytes()
}
