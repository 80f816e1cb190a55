//! Descriptive statistics over a phone record collection
//!
//! Every function here borrows a [`CellCollection`](crate::collection::CellCollection)
//! immutably and is independent of the others. None of them fail: empty
//! input or input with no qualifying records yields a zero or empty result.
//!
//! ## Architecture
//!
//! - [`averages`] - Mean weight and display size, overall and per OEM
//! - [`grouping`] - Counts by announcement year, by OEM and by OS
//! - [`extremes`] - Heaviest, lightest, latest and highest-average selections
//! - [`queries`] - Record filters such as one-sensor phones
//!
//! ## Exclusion Rules
//!
//! A record without a parsed value for a field is left out of any statistic
//! over that field. Ties are broken by collection order, which is the order
//! records were first inserted.

pub mod averages;
pub mod extremes;
pub mod grouping;
pub mod queries;

#[cfg(test)]
pub mod tests;

pub use averages::{average_display_size, average_weight, average_weight_by_oem};
pub use extremes::{
    find_heaviest_and_lightest_phones, find_latest_phone_by_oem,
    find_most_launches_in_2000s, find_oem_with_highest_average_weight,
};
pub use grouping::{count_phones_by_oem, count_phones_by_year, count_unique_os};
pub use queries::{count_phones_with_one_sensor, find_phones_announced_and_released_different_years};
