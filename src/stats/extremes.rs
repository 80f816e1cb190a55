//! Selections of a single "best" record or key
//!
//! All comparisons are strict, so on equal values the candidate seen
//! first keeps its place. Collection-ordered scans therefore prefer the
//! earliest inserted record and OEM-keyed scans prefer the
//! lexicographically smallest OEM.

use super::averages::average_weight_by_oem;
use crate::collection::CellCollection;
use crate::constants::{DECADE_2000S_END, DECADE_2000S_START};
use crate::models::{Cell, WeightExtremes, YearCounts};
use std::collections::BTreeMap;

/// Most recently announced phone for each OEM
///
/// An unknown announcement year ranks below every known year, so a phone
/// with no year is only chosen when none of the OEM's phones has one.
pub fn find_latest_phone_by_oem(cells: &CellCollection) -> BTreeMap<String, &Cell> {
    let mut latest: BTreeMap<String, &Cell> = BTreeMap::new();

    for cell in cells {
        match latest.get_mut(&cell.oem) {
            Some(current) => {
                if cell.launch_announced > current.launch_announced {
                    *current = cell;
                }
            }
            None => {
                latest.insert(cell.oem.clone(), cell);
            }
        }
    }

    latest
}

/// Heaviest and lightest phones among those with a known weight
///
/// Both are `None` when no phone has a weight.
pub fn find_heaviest_and_lightest_phones(cells: &CellCollection) -> WeightExtremes<'_> {
    let mut heaviest: Option<(&Cell, f32)> = None;
    let mut lightest: Option<(&Cell, f32)> = None;

    for cell in cells {
        let Some(weight) = cell.body_weight else {
            continue;
        };
        if heaviest.is_none_or(|(_, max)| weight > max) {
            heaviest = Some((cell, weight));
        }
        if lightest.is_none_or(|(_, min)| weight < min) {
            lightest = Some((cell, weight));
        }
    }

    WeightExtremes {
        heaviest: heaviest.map(|(cell, _)| cell),
        lightest: lightest.map(|(cell, _)| cell),
    }
}

/// OEM whose phones have the highest average body weight
///
/// Returns `None` when no OEM has a positive average weight.
pub fn find_oem_with_highest_average_weight(cells: &CellCollection) -> Option<String> {
    let mut best: Option<String> = None;
    let mut best_average = 0.0_f32;

    for (oem, average) in average_weight_by_oem(cells) {
        if average > best_average {
            best_average = average;
            best = Some(oem);
        }
    }

    best
}

/// Year in 2000-2009 with the most announcements
///
/// Returns `None` when no year in the decade has any announcement.
pub fn find_most_launches_in_2000s(year_counts: &YearCounts) -> Option<u32> {
    let mut best: Option<u32> = None;
    let mut best_count = 0;

    for (&year, &count) in year_counts
        .counts
        .range(DECADE_2000S_START..DECADE_2000S_END)
    {
        if count > best_count {
            best_count = count;
            best = Some(year);
        }
    }

    best
}
