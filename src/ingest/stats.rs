//! Ingestion statistics and result structures

use crate::collection::CellCollection;
use serde::{Deserialize, Serialize};

/// Counters collected while reading the dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestStats {
    /// Data rows encountered (header excluded)
    pub rows_read: usize,

    /// Rows that replaced an earlier record with the same OEM and model
    pub duplicates_replaced: usize,

    /// Rows skipped because they had the wrong number of fields
    pub rows_skipped: usize,

    /// Messages for skipped rows
    pub errors: Vec<String>,
}

impl IngestStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a skipped row
    pub fn add_skipped(&mut self, message: String) {
        self.rows_skipped += 1;
        self.errors.push(message);
    }

    /// Number of unique records stored
    pub fn records_stored(&self) -> usize {
        self.rows_read - self.rows_skipped - self.duplicates_replaced
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Ingest Summary: {} rows -> {} phones | Duplicates replaced: {} | Skipped: {}",
            self.rows_read,
            self.records_stored(),
            self.duplicates_replaced,
            self.rows_skipped
        )
    }
}

/// Collection built from a dataset along with its ingestion statistics
#[derive(Debug, Clone)]
pub struct IngestResult {
    pub cells: CellCollection,
    pub stats: IngestStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_stats_new() {
        let stats = IngestStats::new();
        assert_eq!(stats.rows_read, 0);
        assert_eq!(stats.records_stored(), 0);
        assert!(stats.errors.is_empty());
    }

    #[test]
    fn test_ingest_stats_records_stored() {
        let mut stats = IngestStats::new();
        stats.rows_read = 10;
        stats.duplicates_replaced = 2;
        stats.add_skipped("bad row".to_string());

        assert_eq!(stats.rows_skipped, 1);
        assert_eq!(stats.records_stored(), 7);
        assert_eq!(stats.errors, vec!["bad row".to_string()]);
    }

    #[test]
    fn test_ingest_stats_summary() {
        let mut stats = IngestStats::new();
        stats.rows_read = 5;
        stats.duplicates_replaced = 1;

        assert_eq!(
            stats.summary(),
            "Ingest Summary: 5 rows -> 4 phones | Duplicates replaced: 1 | Skipped: 0"
        );
    }
}
