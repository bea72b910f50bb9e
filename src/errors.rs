//! Unified application error type.
//! Every module (models, export, demo, cli) returns AppError so failures
//! bubble up to `main` the same way.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Snapshot / serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid snapshot '{path}': {message}")]
    InvalidSnapshot { path: String, message: String },

    // ---------------------------
    // Rendering
    // ---------------------------
    #[error("Workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Invalid output directory: {0}")]
    InvalidOutputDir(String),

    #[error("Export cancelled: existing file '{0}' not overwritten")]
    ExportCancelled(String),

    // ---------------------------
    // Demo flow
    // ---------------------------
    #[error("Cannot apply '{command}' while on the '{step}' screen")]
    InvalidTransition { step: String, command: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration from {0}")]
    ConfigLoad(String),
}

pub type AppResult<T> = Result<T, AppError>;
