// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod layout;
pub mod logic;
mod model;
mod pdf;
mod pdf_export;
pub mod text;
mod xlsx;

pub use layout::{TableLayout, layout_table};
pub use logic::ExportLogic;
pub use model::{CSV_FILE_NAME, JSON_FILE_NAME, PDF_FILE_NAME, XLSX_FILE_NAME};
pub use pdf_export::{RenderedPdf, generate_pdf_report, render_statement};
pub use text::truncate_description;
pub use xlsx::{
    CALCULATIONS_SHEET, EVENTS_SHEET, PlannedRow, RowStyle, SheetPlan, VESSEL_INFO_SHEET,
    generate_excel_report, render_workbook, workbook_plan,
};

use crate::models::TimelineEvent;
use crate::ui::messages::{success, warning};
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

/// Unknown status tags are exported as-is, but the user gets told.
pub(crate) fn flag_unrecognized(events: &[TimelineEvent]) {
    for ev in events.iter().filter(|e| e.status.is_flagged()) {
        warning(format!(
            "Unrecognized status '{}' on event '{}' at {}",
            ev.status.as_str(),
            ev.event,
            ev.timestamp
        ));
    }
}

#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Pdf,
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    /// Fixed output file name for this format.
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => PDF_FILE_NAME,
            ExportFormat::Xlsx => XLSX_FILE_NAME,
            ExportFormat::Csv => CSV_FILE_NAME,
            ExportFormat::Json => JSON_FILE_NAME,
        }
    }
}
