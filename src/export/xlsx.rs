// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::matrix::{CellKind, CellStyle, COLUMN_COUNT, ExportMatrix};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADER_BG: u32 = 0x2F75B5;
const WEEK_BG: u32 = 0xD9E1F2;
const MAX_COL_WIDTH: usize = 40;

/// Writes the matrix to an XLSX file, one worksheet, header rows frozen.
pub(crate) fn export_xlsx(matrix: &ExportMatrix, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name(&matrix.file_stem))?;

    // ---------------------------
    // Empty dataset
    // ---------------------------
    if matrix.is_empty() {
        worksheet.write(0, 0, "No data available")?;
        workbook.save(path)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let title_format = Format::new().set_bold().set_font_size(14);
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(HEADER_BG))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);

    let mut col_widths = vec![0usize; COLUMN_COUNT];
    let mut row_idx: u32 = 0;

    if let Some(title) = matrix.header_rows.first().and_then(|r| r.first()) {
        worksheet.write_with_format(row_idx, 0, title.as_str(), &title_format)?;
        row_idx += 1;
    }

    for header in matrix.header_rows.iter().skip(1) {
        for (col, value) in header.iter().enumerate() {
            worksheet.write_with_format(row_idx, col as u16, value.as_str(), &header_format)?;
            track_width(&mut col_widths, col, value);
        }
        row_idx += 1;
    }

    worksheet.set_freeze_panes(row_idx, 0)?;

    // ---------------------------
    // Data rows
    // ---------------------------
    for (values, styles) in matrix.data_rows.iter().zip(&matrix.cell_styles) {
        let mut line_count = 1;

        for (col, (value, style)) in values.iter().zip(styles).enumerate() {
            write_styled_cell(worksheet, row_idx, col as u16, value, style)?;
            track_width(&mut col_widths, col, value);
            line_count = line_count.max(value.lines().count());
        }

        if line_count > 1 {
            worksheet.set_row_height(row_idx, 15.0 * line_count as f64)?;
        }
        row_idx += 1;
    }

    // ---------------------------
    // Column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, (*w).min(MAX_COL_WIDTH) as f64 + 2.0)?;
    }

    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_styled_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &str,
    style: &CellStyle,
) -> AppResult<()> {
    worksheet.write_with_format(row, col, value, &cell_format(style))?;
    Ok(())
}

/// Maps the writer-neutral style onto an xlsx format.
fn cell_format(style: &CellStyle) -> Format {
    let mut fmt = Format::new().set_border(FormatBorder::Thin);

    let fill = match style.kind {
        CellKind::WeekHeader => Some(WEEK_BG),
        _ => style.fill.map(|c| c.value()),
    };
    if let Some(rgb) = fill {
        fmt = fmt
            .set_background_color(Color::RGB(rgb))
            .set_pattern(FormatPattern::Solid);
    }
    if style.bold {
        fmt = fmt.set_bold();
    }
    if style.wrap {
        fmt = fmt.set_text_wrap().set_align(FormatAlign::Top);
    }
    if style.kind == CellKind::Total {
        fmt = fmt.set_align(FormatAlign::Right);
    }
    fmt
}

/// Widest line of a cell, per column.
fn track_width(widths: &mut [usize], col: usize, value: &str) {
    if let Some(w) = widths.get_mut(col) {
        let widest = value.lines().map(UnicodeWidthStr::width).max().unwrap_or(0);
        *w = (*w).max(widest);
    }
}

/// Excel sheet names: at most 31 chars, none of `[]:*?/\`.
fn sheet_name(stem: &str) -> String {
    let cleaned: String = stem
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(31)
        .collect();
    if cleaned.is_empty() {
        "Timetable".to_string()
    } else {
        cleaned
    }
}
