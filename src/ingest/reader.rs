//! CSV reading and collection building

use super::row::cell_from_fields;
use super::stats::{IngestResult, IngestStats};
use crate::collection::CellCollection;
use crate::config::StatsConfig;
use crate::error::{CellError, Result};
use std::fs::File;
use std::io::Read;
use tracing::{debug, info, warn};

/// Load the dataset named by the configuration
pub fn load_cells(config: &StatsConfig) -> Result<IngestResult> {
    let path = &config.input_path;
    if !path.exists() {
        return Err(CellError::FileNotFound { path: path.clone() });
    }

    info!("Loading phone dataset: {}", path.display());
    let file = File::open(path)?;
    read_cells(file, config)
}

/// Read phone records from any CSV source
///
/// Rows are inserted in file order, so a later row with the same OEM and
/// model replaces the earlier one. A row with the wrong number of fields
/// aborts the read unless `skip_malformed_rows` is set, in which case it
/// is logged and skipped.
pub fn read_cells<R: Read>(source: R, config: &StatsConfig) -> Result<IngestResult> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(config.has_headers)
        .flexible(true)
        .from_reader(source);

    let mut cells = CellCollection::new();
    let mut stats = IngestStats::new();

    for record in csv_reader.records() {
        let record = record?;
        stats.rows_read += 1;

        let line = record.position().map_or(0, |position| position.line());
        let fields: Vec<&str> = record.iter().collect();

        let cell = match cell_from_fields(&fields, line) {
            Ok(cell) => cell,
            Err(err) if config.skip_malformed_rows => {
                warn!("Skipping row: {}", err);
                stats.add_skipped(err.to_string());
                continue;
            }
            Err(err) => return Err(err),
        };

        if let Some(previous) = cells.insert(cell) {
            debug!(
                "Line {}: replaced earlier record for {}",
                line,
                previous.key()
            );
            stats.duplicates_replaced += 1;
        }
    }

    info!("{}", stats.summary());
    Ok(IngestResult { cells, stats })
}
