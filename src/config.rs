//! Configuration for dataset ingestion and reporting.
//!
//! Defaults match the standard dataset layout. The CLI layers its flags
//! over [`StatsConfig::default`] through the `with_*` builders.

use crate::constants::{DEFAULT_INPUT_PATH, DEFAULT_SAMPLE_KEY};
use crate::error::{CellError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Global configuration for a statistics run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Path to the phone dataset CSV
    pub input_path: PathBuf,

    /// First line of the file is a header row to skip
    pub has_headers: bool,

    /// Skip rows with the wrong number of fields instead of aborting
    pub skip_malformed_rows: bool,

    /// Record key (`"<oem>-<model>"`) shown as the sample phone
    pub sample_key: String,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            has_headers: true,
            skip_malformed_rows: false,
            sample_key: DEFAULT_SAMPLE_KEY.to_string(),
        }
    }
}

impl StatsConfig {
    /// Use a different dataset path
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Treat the first line as data
    pub fn without_headers(mut self) -> Self {
        self.has_headers = false;
        self
    }

    /// Skip malformed rows with a warning
    pub fn with_skip_malformed_rows(mut self) -> Self {
        self.skip_malformed_rows = true;
        self
    }

    /// Show a different sample phone
    pub fn with_sample_key(mut self, key: impl Into<String>) -> Self {
        self.sample_key = key.into();
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(CellError::configuration("input path must not be empty"));
        }
        if self.sample_key.trim().is_empty() {
            return Err(CellError::configuration("sample key must not be empty"));
        }

        debug!(
            "Configuration validated: input={}, headers={}, skip_malformed={}",
            self.input_path.display(),
            self.has_headers,
            self.skip_malformed_rows
        );
        Ok(())
    }
}
