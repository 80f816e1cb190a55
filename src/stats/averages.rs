//! Mean weight and display size over records with a parsed value

use crate::collection::CellCollection;
use std::collections::BTreeMap;

/// Running sum and count for a mean that excludes missing values
#[derive(Debug, Clone, Copy, Default)]
struct MeanAccumulator {
    total: f32,
    count: usize,
}

impl MeanAccumulator {
    fn add(&mut self, value: f32) {
        self.total += value;
        self.count += 1;
    }

    fn mean(&self) -> f32 {
        if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f32
        }
    }
}

fn mean_of(values: impl Iterator<Item = f32>) -> f32 {
    let mut acc = MeanAccumulator::default();
    values.for_each(|value| acc.add(value));
    acc.mean()
}

/// Average body weight in grams over phones with a known weight
///
/// Returns 0.0 when no phone has a weight.
pub fn average_weight(cells: &CellCollection) -> f32 {
    mean_of(cells.iter().filter_map(|cell| cell.body_weight))
}

/// Average display size in inches over phones with a known size
///
/// Returns 0.0 when no phone has a display size.
pub fn average_display_size(cells: &CellCollection) -> f32 {
    mean_of(cells.iter().filter_map(|cell| cell.display_size))
}

/// Average body weight per OEM
///
/// Every OEM in the collection is listed. OEMs with no weighed phone
/// average 0.0.
pub fn average_weight_by_oem(cells: &CellCollection) -> BTreeMap<String, f32> {
    let mut accumulators: BTreeMap<&str, MeanAccumulator> = BTreeMap::new();

    for cell in cells {
        let acc = accumulators.entry(cell.oem.as_str()).or_default();
        if let Some(weight) = cell.body_weight {
            acc.add(weight);
        }
    }

    accumulators
        .into_iter()
        .map(|(oem, acc)| (oem.to_string(), acc.mean()))
        .collect()
}
