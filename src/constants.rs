//! Application constants for the cell statistics tool
//!
//! Column layout of the source dataset, default paths and the
//! sentinel values recognised by the field parsers.

// =============================================================================
// Source Dataset Layout
// =============================================================================

/// Default location of the phone dataset
pub const DEFAULT_INPUT_PATH: &str = "resources/cells.csv";

/// Record shown as the sample phone in reports
pub const DEFAULT_SAMPLE_KEY: &str = "Google-Pixel 4 XL";

/// Separator between OEM and model in a record key
pub const KEY_SEPARATOR: &str = "-";

/// Column indices in the fixed source layout
pub mod columns {
    pub const OEM: usize = 0;
    pub const MODEL: usize = 1;
    pub const LAUNCH_ANNOUNCED: usize = 2;
    pub const LAUNCH_STATUS: usize = 3;
    pub const BODY_DIMENSIONS: usize = 4;
    pub const BODY_WEIGHT: usize = 5;
    pub const BODY_SIM: usize = 6;
    pub const DISPLAY_TYPE: usize = 7;
    pub const DISPLAY_SIZE: usize = 8;
    pub const DISPLAY_RESOLUTION: usize = 9;
    pub const FEATURES_SENSORS: usize = 10;
    pub const PLATFORM_OS: usize = 11;

    /// Number of fields every row must carry
    pub const COUNT: usize = 12;
}

// =============================================================================
// Field Parsing
// =============================================================================

/// SIM values that are answers rather than SIM type descriptions
pub const SIM_PLACEHOLDERS: &[&str] = &["yes", "no"];

/// Separator between entries in the sensors and platform fields
pub const LIST_SEPARATOR: char = ',';

// =============================================================================
// Aggregation
// =============================================================================

/// First year of the decade searched by the 2000s launch query
pub const DECADE_2000S_START: u32 = 2000;

/// First year after the decade searched by the 2000s launch query
pub const DECADE_2000S_END: u32 = 2010;
