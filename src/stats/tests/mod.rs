//! Tests for the statistics module
//!
//! Fixtures build small collections where only the field under test is
//! populated, so each test reads as the dataset it describes.


use crate::collection::CellCollection;
use crate::models::Cell;

/// Create a phone with only its identity set
pub fn create_test_cell(oem: &str, model: &str) -> Cell {
    Cell {
        oem: oem.to_string(),
        model: model.to_string(),
        launch_announced: None,
        launch_released: None,
        launch_status: String::new(),
        body_dimensions: String::new(),
        body_weight: None,
        body_sim: None,
        display_type: String::new(),
        display_size: None,
        display_resolution: String::new(),
        features_sensors: None,
        platform_os: None,
    }
}

/// Create a phone with a body weight
pub fn weighed_cell(oem: &str, model: &str, weight: Option<f32>) -> Cell {
    Cell {
        body_weight: weight,
        ..create_test_cell(oem, model)
    }
}

/// Create a phone with an announcement year
pub fn announced_cell(oem: &str, model: &str, year: Option<u32>) -> Cell {
    Cell {
        launch_announced: year,
        ..create_test_cell(oem, model)
    }
}

/// Collect phones into a collection in the given order
pub fn collection_of(cells: Vec<Cell>) -> CellCollection {
    cells.into_iter().collect()
}
