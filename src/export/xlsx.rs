// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_serial;
use crate::export::model::{ColumnFormat, columns, row_to_cells};
use crate::export::{ExportRow, SHEET_NAME, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// XLSX export with styling, per-column number formats and auto-widths.
pub(crate) fn export_xlsx(rows: &[ExportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(to_io_app_error)?;

    // ---------------------------
    // Empty dataset
    // ---------------------------
    if rows.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_io_app_error)?;
        workbook.save(path_str(path)?).map_err(to_io_app_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let specs = columns();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, spec) in specs.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, spec.header, &header_format)
            .map_err(to_io_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    // ---------------------------
    // Column widths: the hint is the floor, content can widen
    // ---------------------------
    let mut col_widths: Vec<f64> = specs.iter().map(|s| s.width).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, item) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        let cells = row_to_cells(item);

        for (col, value) in cells.iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, value, specs[col].format, band_color)?;

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()) as f64);
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w + 2.0)
            .map_err(to_io_app_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_io_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Writes one cell according to its column's format hint.
fn write_xlsx_cell(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    s: &str,
    format_hint: ColumnFormat,
    bg: Color,
) -> AppResult<()> {
    match format_hint {
        ColumnFormat::DateTime(num_format) => {
            if let Some(serial) = parse_to_excel_serial(s) {
                let fmt = Format::new()
                    .set_num_format(num_format)
                    .set_background_color(bg)
                    .set_pattern(FormatPattern::Solid)
                    .set_border(FormatBorder::Thin);

                worksheet
                    .write_with_format(row, col, serial, &fmt)
                    .map_err(to_io_app_error)?;
                return Ok(());
            }
        }
        ColumnFormat::Hours(num_format) => {
            if let Ok(num) = s.parse::<f64>() {
                let fmt = Format::new()
                    .set_num_format(num_format)
                    .set_align(FormatAlign::Right)
                    .set_background_color(bg)
                    .set_pattern(FormatPattern::Solid)
                    .set_border(FormatBorder::Thin);

                worksheet
                    .write_with_format(row, col, num, &fmt)
                    .map_err(to_io_app_error)?;
                return Ok(());
            }
        }
        ColumnFormat::Text => {}
    }

    // Text, or a hinted cell that did not parse
    let fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    worksheet
        .write_with_format(row, col, s, &fmt)
        .map_err(to_io_app_error)?;

    Ok(())
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))
}
