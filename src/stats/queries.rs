//! Record filters over the collection

use crate::collection::CellCollection;
use crate::constants::LIST_SEPARATOR;
use crate::models::PhoneDetails;

/// Phones whose announcement and release years are both known and differ
///
/// Results follow collection order.
pub fn find_phones_announced_and_released_different_years(
    cells: &CellCollection,
) -> Vec<PhoneDetails> {
    cells
        .iter()
        .filter(|cell| match (cell.launch_announced, cell.launch_released) {
            (Some(announced), Some(released)) => announced != released,
            _ => false,
        })
        .map(|cell| cell.details())
        .collect()
}

/// Count phones whose sensor list has a single entry
///
/// The list is split on commas. An empty or missing list still yields one
/// segment and is counted.
pub fn count_phones_with_one_sensor(cells: &CellCollection) -> usize {
    cells
        .iter()
        .filter(|cell| {
            cell.features_sensors
                .as_deref()
                .unwrap_or("")
                .split(LIST_SEPARATOR)
                .count()
                == 1
        })
        .count()
}
