//! The two unit classifiers.
//!
//! `ByFloor` follows the floor-plan assignment of the official price list:
//! every standard-band floor carries the two-bedroom plan and every upper-band
//! floor the penthouse plan. It is authoritative whenever a floor is known.
//!
//! `BySize` is the older threshold classifier, kept for call sites that only
//! have an area (marketing copy, search filters on size). The two disagree for
//! atypical sizes; [`classification_conflict`] reports those cases instead of
//! picking a winner.

use serde::Serialize;

use crate::config::{FloorBand, TowerConfig};

use super::types::{Classification, UnitType};

const STANDARD_PLAN: Classification = Classification::new(UnitType::TwoBedroom, 2, 2);
const UPPER_PLAN: Classification = Classification::new(UnitType::Penthouse, 3, 3);

/// Size thresholds (m², inclusive lower bounds), largest first.
const SIZE_THRESHOLDS: [(u32, Classification); 4] = [
    (150, Classification::new(UnitType::Penthouse, 3, 3)),
    (120, Classification::new(UnitType::ThreeBedroom, 3, 2)),
    (90, Classification::new(UnitType::TwoBedroom, 2, 2)),
    (75, Classification::new(UnitType::OneBedroom, 1, 1)),
];
const SMALLEST: Classification = Classification::new(UnitType::Studio, 0, 1);

/// Capability shared by both classifiers. Returns `None` when the classifier
/// lacks the input it needs.
pub trait UnitClassifier {
    fn name(&self) -> &'static str;
    fn classify(&self, size_sqm: u32, floor: Option<i32>) -> Option<Classification>;
}

/// Floor-band classifier (authoritative when a floor is present).
pub struct ByFloor<'a>(pub &'a TowerConfig);

/// Legacy size-threshold classifier.
pub struct BySize;

impl UnitClassifier for ByFloor<'_> {
    fn name(&self) -> &'static str {
        "by_floor"
    }

    fn classify(&self, _size_sqm: u32, floor: Option<i32>) -> Option<Classification> {
        floor.map(|f| classify_by_floor(self.0, f))
    }
}

impl UnitClassifier for BySize {
    fn name(&self) -> &'static str {
        "by_size"
    }

    fn classify(&self, size_sqm: u32, _floor: Option<i32>) -> Option<Classification> {
        Some(classify_by_size(size_sqm))
    }
}

pub fn classify_by_floor(config: &TowerConfig, floor: i32) -> Classification {
    match config.band_of(floor) {
        FloorBand::Standard => STANDARD_PLAN,
        FloorBand::Upper => UPPER_PLAN,
    }
}

pub fn classify_by_size(size_sqm: u32) -> Classification {
    SIZE_THRESHOLDS
        .iter()
        .find(|(min, _)| size_sqm >= *min)
        .map(|(_, c)| *c)
        .unwrap_or(SMALLEST)
}

/// Floor takes precedence; the size classifier covers floorless contexts.
pub fn classify(config: &TowerConfig, size_sqm: u32, floor: Option<i32>) -> Classification {
    let by_floor = ByFloor(config);
    by_floor
        .classify(size_sqm, floor)
        .or_else(|| BySize.classify(size_sqm, floor))
        .unwrap_or(SMALLEST)
}

/// Both answers when the two classifiers disagree for a (size, floor) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassificationConflict {
    pub by_floor: Classification,
    pub by_size: Classification,
}

pub fn classification_conflict(
    config: &TowerConfig,
    size_sqm: u32,
    floor: i32,
) -> Option<ClassificationConflict> {
    let by_floor = classify_by_floor(config, floor);
    let by_size = classify_by_size(size_sqm);
    (by_floor != by_size).then_some(ClassificationConflict { by_floor, by_size })
}
