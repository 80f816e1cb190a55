//! Core data structures for the phone dataset.
//!
//! Defines the per-phone record, the record key, and the derived
//! structures returned by the aggregators.

use crate::constants::KEY_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Phone Record
// =============================================================================

/// One phone model parsed from a dataset row
///
/// Fields that go through a tolerant parser are optional: `None` means the
/// source text did not contain a usable value. Passthrough text fields are
/// stored exactly as read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Manufacturer (e.g., "Samsung")
    pub oem: String,

    /// Model name (e.g., "Galaxy S10")
    pub model: String,

    /// Year the phone was announced
    pub launch_announced: Option<u32>,

    /// Year the phone was released, taken from the launch status text
    pub launch_released: Option<u32>,

    /// Launch status text (e.g., "Available. Released 2019, March")
    pub launch_status: String,

    /// Body dimensions text
    pub body_dimensions: String,

    /// Body weight in grams
    pub body_weight: Option<f32>,

    /// SIM type description
    pub body_sim: Option<String>,

    /// Display technology text
    pub display_type: String,

    /// Display diagonal in inches
    pub display_size: Option<f32>,

    /// Display resolution text
    pub display_resolution: String,

    /// Comma-separated sensor list
    pub features_sensors: Option<String>,

    /// Operating system name
    pub platform_os: Option<String>,
}

impl Cell {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        oem: String,
        model: String,
        launch_announced: Option<u32>,
        launch_released: Option<u32>,
        launch_status: String,
        body_dimensions: String,
        body_weight: Option<f32>,
        body_sim: Option<String>,
        display_type: String,
        display_size: Option<f32>,
        display_resolution: String,
        features_sensors: Option<String>,
        platform_os: Option<String>,
    ) -> Self {
        Self {
            oem,
            model,
            launch_announced,
            launch_released,
            launch_status,
            body_dimensions,
            body_weight,
            body_sim,
            display_type,
            display_size,
            display_resolution,
            features_sensors,
            platform_os,
        }
    }

    /// Collection key for this phone: `"<oem>-<model>"`
    pub fn key(&self) -> String {
        cell_key(&self.oem, &self.model)
    }

    /// OEM and model of this phone
    pub fn details(&self) -> PhoneDetails {
        PhoneDetails {
            oem: self.oem.clone(),
            model: self.model.clone(),
        }
    }
}

/// Build the collection key for an OEM and model pair
pub fn cell_key(oem: &str, model: &str) -> String {
    format!("{}{}{}", oem, KEY_SEPARATOR, model)
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OEM: {}", self.oem)?;
        writeln!(f, "Model: {}", self.model)?;
        writeln!(f, "Launch Announced: {}", self.launch_announced.unwrap_or(0))?;
        writeln!(f, "Launch Status: {}", self.launch_status)?;
        writeln!(f, "Body Dimensions: {}", self.body_dimensions)?;
        writeln!(f, "Body Weight: {:.2} g", self.body_weight.unwrap_or(0.0))?;
        writeln!(f, "SIM: {}", self.body_sim.as_deref().unwrap_or(""))?;
        writeln!(f, "Display Type: {}", self.display_type)?;
        writeln!(f, "Display Size: {:.2} in", self.display_size.unwrap_or(0.0))?;
        writeln!(f, "Display Resolution: {}", self.display_resolution)?;
        writeln!(
            f,
            "Sensors: {}",
            self.features_sensors.as_deref().unwrap_or("")
        )?;
        write!(f, "Platform OS: {}", self.platform_os.as_deref().unwrap_or(""))
    }
}

// =============================================================================
// Derived Structures
// =============================================================================

/// Number of phones announced in each year
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCounts {
    /// Phones per announcement year
    pub counts: BTreeMap<u32, usize>,

    /// Years present in `counts`, ascending
    pub years: Vec<u32>,
}

impl YearCounts {
    /// Number of phones announced in `year` (0 if none)
    pub fn count_for(&self, year: u32) -> usize {
        self.counts.get(&year).copied().unwrap_or(0)
    }
}

/// OEM and model identifying a phone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneDetails {
    pub oem: String,
    pub model: String,
}

impl fmt::Display for PhoneDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OEM: {}, Model: {}", self.oem, self.model)
    }
}

/// Heaviest and lightest phones among those with a known weight
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightExtremes<'a> {
    pub heaviest: Option<&'a Cell>,
    pub lightest: Option<&'a Cell>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> Cell {
        Cell::new(
            "Google".to_string(),
            "Pixel 4 XL".to_string(),
            Some(2019),
            Some(2019),
            "Available. Released 2019, October".to_string(),
            "160.4 x 75.1 x 8.2 mm".to_string(),
            Some(193.0),
            Some("Nano-SIM".to_string()),
            "P-OLED capacitive touchscreen, 16M colors".to_string(),
            Some(6.3),
            "1440 x 3040 pixels".to_string(),
            Some("Face ID, accelerometer, gyro".to_string()),
            Some("Android 10".to_string()),
        )
    }

    #[test]
    fn test_cell_key() {
        assert_eq!(pixel().key(), "Google-Pixel 4 XL");
        assert_eq!(cell_key("Samsung", "Galaxy S10"), "Samsung-Galaxy S10");
    }

    #[test]
    fn test_cell_details() {
        let details = pixel().details();
        assert_eq!(details.oem, "Google");
        assert_eq!(details.model, "Pixel 4 XL");
        assert_eq!(details.to_string(), "OEM: Google, Model: Pixel 4 XL");
    }

    #[test]
    fn test_cell_display() {
        let rendered = pixel().to_string();
        assert!(rendered.starts_with("OEM: Google\nModel: Pixel 4 XL\n"));
        assert!(rendered.contains("Launch Announced: 2019\n"));
        assert!(rendered.contains("Body Weight: 193.00 g\n"));
        assert!(rendered.contains("Display Size: 6.30 in\n"));
        assert!(rendered.ends_with("Platform OS: Android 10"));
    }

    #[test]
    fn test_cell_display_unknown_values() {
        let mut cell = pixel();
        cell.launch_announced = None;
        cell.body_weight = None;
        cell.platform_os = None;

        let rendered = cell.to_string();
        assert!(rendered.contains("Launch Announced: 0\n"));
        assert!(rendered.contains("Body Weight: 0.00 g\n"));
        assert!(rendered.ends_with("Platform OS: "));
    }

    #[test]
    fn test_cell_serde_round_trip() {
        let cell = pixel();
        let json = serde_json::to_string(&cell).unwrap();
        let deserialized: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, deserialized);
    }

    #[test]
    fn test_year_counts_count_for() {
        let mut counts = YearCounts::default();
        counts.counts.insert(2019, 3);
        counts.years.push(2019);

        assert_eq!(counts.count_for(2019), 3);
        assert_eq!(counts.count_for(2020), 0);
    }
}
