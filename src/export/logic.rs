// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_writable, prepare_output_dir};
use crate::export::json_csv::{export_events_csv, export_snapshot_json};
use crate::export::pdf_export::generate_pdf_report;
use crate::export::xlsx::generate_excel_report;
use crate::export::{ExportFormat, flag_unrecognized};
use crate::models::Snapshot;
use crate::ui::messages::warning;
use std::path::{Path, PathBuf};

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one snapshot in the requested format.
    ///
    /// - `out_dir`: directory receiving the fixed-name file (created if missing)
    /// - `force`: overwrite an existing file without asking
    ///
    /// Returns the path of the written file.
    pub fn export(
        snapshot: &Snapshot,
        format: &ExportFormat,
        out_dir: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        let dir = prepare_output_dir(out_dir)?;
        warn_about_content(snapshot);
        Self::write(snapshot, format, &dir, force)
    }

    /// PDF + XLSX, the two reports offered on the export screen.
    /// Content warnings are printed once for both files.
    pub fn export_reports(
        snapshot: &Snapshot,
        out_dir: &str,
        force: bool,
    ) -> AppResult<Vec<PathBuf>> {
        let dir = prepare_output_dir(out_dir)?;
        warn_about_content(snapshot);

        [ExportFormat::Pdf, ExportFormat::Xlsx]
            .iter()
            .map(|f| Self::write(snapshot, f, &dir, force))
            .collect()
    }

    fn write(
        snapshot: &Snapshot,
        format: &ExportFormat,
        dir: &Path,
        force: bool,
    ) -> AppResult<PathBuf> {
        ensure_writable(&dir.join(format.file_name()), force)?;

        let events = &snapshot.events;
        match format {
            ExportFormat::Pdf => generate_pdf_report(&snapshot.summary, events, dir),
            ExportFormat::Xlsx => generate_excel_report(&snapshot.summary, events, dir),
            ExportFormat::Csv => export_events_csv(events, dir),
            ExportFormat::Json => export_snapshot_json(snapshot, dir),
        }
    }
}

fn warn_about_content(snapshot: &Snapshot) {
    if snapshot.events.is_empty() {
        warning("No timeline events in snapshot: the event table will be empty.");
    }
    flag_unrecognized(&snapshot.events);
}
