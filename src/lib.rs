//! Cell Statistics Library
//!
//! Parses a scraped mobile phone specification dataset and computes
//! descriptive statistics over it.
//!
//! This library provides tools for:
//! - Tolerant parsing of free-text fields (years, weights, sizes, labels)
//! - An in-memory record collection keyed by OEM and model
//! - Averages, counts, groupings and extremes over the collection
//! - Text and JSON reports of every statistic

pub mod cli;
pub mod collection;
pub mod config;
pub mod constants;
pub mod error;
pub mod ingest;
pub mod models;
pub mod parsers;
pub mod report;
pub mod stats;

// Re-export commonly used types
pub use collection::CellCollection;
pub use config::StatsConfig;
pub use error::{CellError, Result};
pub use models::{Cell, PhoneDetails, WeightExtremes, YearCounts};
pub use report::{CollectionReport, OutputFormat};
