//! Grouped counts over the record collection

use crate::collection::CellCollection;
use crate::models::YearCounts;
use std::collections::{BTreeMap, HashSet};

/// Count phones per announcement year
///
/// Phones with an unknown announcement year are not counted. The returned
/// `years` lists every counted year in ascending order.
pub fn count_phones_by_year(cells: &CellCollection) -> YearCounts {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();

    for year in cells.iter().filter_map(|cell| cell.launch_announced) {
        *counts.entry(year).or_insert(0) += 1;
    }

    let years = counts.keys().copied().collect();
    YearCounts { counts, years }
}

/// Count distinct operating systems
///
/// A missing OS and an empty OS string are the same "unknown" value, which
/// is counted once when any phone has it.
pub fn count_unique_os(cells: &CellCollection) -> usize {
    cells
        .iter()
        .map(|cell| cell.platform_os.as_deref().unwrap_or(""))
        .collect::<HashSet<_>>()
        .len()
}

/// Count phones per OEM
pub fn count_phones_by_oem(cells: &CellCollection) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for cell in cells {
        *counts.entry(cell.oem.clone()).or_insert(0) += 1;
    }
    counts
}
