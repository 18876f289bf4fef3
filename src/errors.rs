//! Unified application error type.
//! Store, config, cli and export code return AppError; the feed core never
//! fails and works on plain values.

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
    // Workbook-related
    // ---------------------------
    #[error("Sheet error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown sheet: {0}")]
    UnknownSheet(String),

    #[error("Row {row} does not exist in sheet {sheet}")]
    InvalidRow { sheet: String, row: usize },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid timestamp format: {0} (expected YYYY-MM-DD HH:MM:SS)")]
    InvalidTimestamp(String),

    #[error("Invalid time format: {0} (expected HH:MM:SS)")]
    InvalidTime(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    // ---------------------------
    // Input checks
    // ---------------------------
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
