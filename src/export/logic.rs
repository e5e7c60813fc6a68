// src/export/logic.rs

use crate::core::controller::RecordStore;
use crate::core::duration::WorkDuration;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{DESCRIPTION_PLACEHOLDER, ExportRow};
use crate::export::xlsx::export_xlsx;
use crate::models::OvertimeRecord;
use crate::ui::messages::warning;
use crate::utils::time::format_local;
use std::path::Path;

/// High-level export: full dataset, all technicians.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        store: &mut impl RecordStore,
        format: ExportFormat,
        file: &Path,
        force: bool,
        display_offset_minutes: i32,
    ) -> AppResult<()> {
        ensure_writable(file, force)?;

        let records = store.list_all()?;

        if records.is_empty() {
            warning("⚠️  No records to export.");
            return Ok(());
        }

        let rows = build_rows(&records, display_offset_minutes);

        match format {
            ExportFormat::Csv => export_csv(&rows, file)?,
            ExportFormat::Json => export_json(&rows, file)?,
            ExportFormat::Xlsx => export_xlsx(&rows, file)?,
        }

        Ok(())
    }
}

/// Normalizes records into export rows: stable sort by technician then
/// ascending start (ties keep store order), empty descriptions replaced
/// by the fixed placeholder, duration rendered as decimal hours. The
/// decimal form differs from the HH:MM shown on screen on purpose; the
/// downstream spreadsheets sum this column.
pub fn build_rows(records: &[OvertimeRecord], display_offset_minutes: i32) -> Vec<ExportRow> {
    let mut sorted: Vec<&OvertimeRecord> = records.iter().collect();
    sorted.sort_by(|a, b| {
        a.technician
            .cmp(&b.technician)
            .then(a.start.cmp(&b.start))
    });

    sorted
        .into_iter()
        .map(|r| {
            let description = if r.description.trim().is_empty() {
                DESCRIPTION_PLACEHOLDER.to_string()
            } else {
                r.description.clone()
            };
            ExportRow {
                technician: r.technician.clone(),
                start: format_local(r.start, display_offset_minutes),
                end: format_local(r.end, display_offset_minutes),
                description,
                hours: WorkDuration::between(r.start, r.end).decimal_hours(),
            }
        })
        .collect()
}
