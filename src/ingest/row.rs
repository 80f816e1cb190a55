//! Per-row field parsing
//!
//! Every row carries twelve fields in a fixed order. Parsed fields go
//! through the tolerant parsers; the rest are copied verbatim.

use crate::constants::columns;
use crate::error::{CellError, Result};
use crate::models::Cell;
use crate::parsers::{
    parse_platform_os, parse_sensors, parse_sim, parse_size, parse_weight, parse_year,
};

/// Build a phone record from the raw fields of one row
///
/// `line` is only used to report a row with the wrong number of fields.
/// The released year is taken from the launch status text.
pub fn cell_from_fields<S: AsRef<str>>(fields: &[S], line: u64) -> Result<Cell> {
    if fields.len() != columns::COUNT {
        return Err(CellError::malformed_row(line, columns::COUNT, fields.len()));
    }

    let field = |index: usize| fields[index].as_ref();

    Ok(Cell::new(
        field(columns::OEM).to_string(),
        field(columns::MODEL).to_string(),
        parse_year(field(columns::LAUNCH_ANNOUNCED)),
        parse_year(field(columns::LAUNCH_STATUS)),
        field(columns::LAUNCH_STATUS).to_string(),
        field(columns::BODY_DIMENSIONS).to_string(),
        parse_weight(field(columns::BODY_WEIGHT)),
        parse_sim(field(columns::BODY_SIM)),
        field(columns::DISPLAY_TYPE).to_string(),
        parse_size(field(columns::DISPLAY_SIZE)),
        field(columns::DISPLAY_RESOLUTION).to_string(),
        parse_sensors(field(columns::FEATURES_SENSORS)),
        parse_platform_os(field(columns::PLATFORM_OS)),
    ))
}
