//! Error handling for cell dataset ingestion.
//!
//! Field parsers and aggregators never fail; the only failures are
//! reading the source file and mapping its rows onto records.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CellError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dataset not found at path: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Malformed row at line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl CellError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a malformed row error
    pub fn malformed_row(line: u64, expected: usize, found: usize) -> Self {
        Self::MalformedRow {
            line,
            expected,
            found,
        }
    }
}

pub type Result<T> = std::result::Result<T, CellError>;
