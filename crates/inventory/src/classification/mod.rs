mod classifiers;
mod types;
mod view;

pub use classifiers::{
    classification_conflict, classify, classify_by_floor, classify_by_size, ByFloor, BySize,
    ClassificationConflict, UnitClassifier,
};
pub use types::{Classification, UnitProfile, UnitType, ViewDirection};
pub use view::{view_for_unit_number, CITY_VIEW};

use crate::config::TowerConfig;

/// Classification and view for a unit.
pub fn profile(
    config: &TowerConfig,
    size_sqm: u32,
    floor: Option<i32>,
    unit_number: u8,
) -> UnitProfile {
    UnitProfile {
        classification: classify(config, size_sqm, floor),
        view: view_for_unit_number(unit_number),
    }
}
