//! In-memory record collection keyed by OEM and model.
//!
//! Records are stored in first-insertion order and indexed by their
//! `"<oem>-<model>"` key. Inserting a record whose key already exists
//! replaces the stored record in place: the most recently read record for
//! a given identity wins, and it keeps the position of the first one.
//! Iteration order is therefore stable and every aggregator tie-break
//! derived from it is reproducible.

use crate::models::Cell;
use indexmap::IndexMap;
use indexmap::map::Values;

/// Phone records keyed by `"<oem>-<model>"`
#[derive(Debug, Clone, Default)]
pub struct CellCollection {
    cells: IndexMap<String, Cell>,
}

impl CellCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the record it replaced if the key existed
    pub fn insert(&mut self, cell: Cell) -> Option<Cell> {
        self.cells.insert(cell.key(), cell)
    }

    /// Look up a record by its `"<oem>-<model>"` key
    pub fn get(&self, key: &str) -> Option<&Cell> {
        self.cells.get(key)
    }

    /// Check whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.cells.contains_key(key)
    }

    /// Number of unique phones
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate records in first-insertion order
    pub fn iter(&self) -> Values<'_, String, Cell> {
        self.cells.values()
    }
}

impl FromIterator<Cell> for CellCollection {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut collection = Self::new();
        for cell in iter {
            collection.insert(cell);
        }
        collection
    }
}

impl<'a> IntoIterator for &'a CellCollection {
    type Item = &'a Cell;
    type IntoIter = Values<'a, String, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
