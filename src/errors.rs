//! Unified application error type.
//! Loader, query engine, statistics and the CLI layer all return AppError so
//! that every failure reaches `main` (or the reporter) through the same path.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp at line {line}: {value}")]
    InvalidTimestamp { line: u64, value: String },

    #[error("Invalid number at line {line}: {value}")]
    InvalidNumber { line: u64, value: String },

    // ---------------------------
    // Query errors
    // ---------------------------
    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    #[error("Invalid query mode: {0} (expected 'start' or 'end')")]
    InvalidMode(String),

    #[error("No trips match the selected period")]
    EmptyResult,

    // ---------------------------
    // User input
    // ---------------------------
    #[error("Invalid input: {0}")]
    InvalidUserInput(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

impl AppError {
    /// True for the "nothing to aggregate" case, which the reporter shows as
    /// a regular answer instead of a failure.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, AppError::EmptyResult)
    }
}

pub type AppResult<T> = Result<T, AppError>;
