//! Dataset ingestion
//!
//! Maps raw CSV rows onto [`Cell`](crate::models::Cell) records and
//! collects them into a [`CellCollection`](crate::collection::CellCollection).
//!
//! ## Architecture
//!
//! - [`row`] - Fixed column layout and per-row field parsing
//! - [`reader`] - CSV file reading and collection building
//! - [`stats`] - Ingestion counters and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cell_stats::config::StatsConfig;
//! use cell_stats::ingest::load_cells;
//!
//! # fn example() -> cell_stats::error::Result<()> {
//! let config = StatsConfig::default().with_input_path("resources/cells.csv");
//! let result = load_cells(&config)?;
//!
//! println!("Loaded {} phones", result.cells.len());
//! # Ok(())
//! # }
//! ```

pub mod reader;
pub mod row;
pub mod stats;

pub use reader::{load_cells, read_cells};
pub use row::cell_from_fields;
pub use stats::{IngestResult, IngestStats};
