//! Tolerant field parsers for the phone dataset.
//!
//! Source fields are scraped free text. Each parser extracts one typed
//! value from a raw field and returns `None` when the expected pattern
//! is not present. Parsers never fail.

use crate::constants::{LIST_SEPARATOR, SIM_PLACEHOLDERS};
use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[0-9]{4}\b").unwrap());

static WEIGHT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*g").unwrap());

static SIZE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*inches\b").unwrap());

static NUMERIC_ONLY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?$").unwrap());

/// Extract the first standalone 4-digit year from a field
///
/// Only the first occurrence is considered, so `"2000 2023"` yields 2000.
pub fn parse_year(value: &str) -> Option<u32> {
    YEAR_PATTERN
        .find(value)
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

/// Extract a weight in grams, e.g. `"174 g (6.14 oz)"`
///
/// A weight that is not above zero is treated as missing.
pub fn parse_weight(value: &str) -> Option<f32> {
    capture_number(&WEIGHT_PATTERN, value)
}

/// Extract a display size in inches, e.g. `"6.3 inches, 100.1 cm2"`
///
/// A size that is not above zero is treated as missing.
pub fn parse_size(value: &str) -> Option<f32> {
    capture_number(&SIZE_PATTERN, value)
}

/// Normalise a SIM field
///
/// `"Yes"` and `"No"` answer whether a SIM exists rather than naming a SIM
/// type, so they are treated as absent. Anything else is kept verbatim,
/// including the empty string.
pub fn parse_sim(value: &str) -> Option<String> {
    if SIM_PLACEHOLDERS
        .iter()
        .any(|placeholder| value.eq_ignore_ascii_case(placeholder))
    {
        return None;
    }
    Some(value.to_string())
}

/// Normalise a sensors field, dropping purely numeric values
pub fn parse_sensors(value: &str) -> Option<String> {
    if is_numeric_only(value) {
        return None;
    }
    Some(value.to_string())
}

/// Normalise a platform field to the OS name before the first comma
///
/// `"Android 10, One UI 2"` yields `"Android 10"`. Purely numeric values
/// are dropped. The text before the comma is not trimmed.
pub fn parse_platform_os(value: &str) -> Option<String> {
    if is_numeric_only(value) {
        return None;
    }
    let os = value
        .split_once(LIST_SEPARATOR)
        .map_or(value, |(head, _)| head);
    Some(os.to_string())
}

fn is_numeric_only(value: &str) -> bool {
    NUMERIC_ONLY_PATTERN.is_match(value)
}

fn capture_number(pattern: &Regex, value: &str) -> Option<f32> {
    pattern
        .captures(value)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f32>().ok())
        .filter(|number| *number > 0.0)
}
