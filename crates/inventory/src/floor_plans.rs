//! Floor-plan asset lookup and the plan sizes of the tower.

use serde::Serialize;

use crate::config::{FloorBand, TowerConfig};
use crate::units::UnitLetter;

/// Rounded sizes at or above this use the upper-floor plan.
pub const UPPER_PLAN_MIN_SQM: u32 = 150;

/// Unit sizes (m²) per letter on standard floors.
pub const STANDARD_SIZES: [u32; 6] = [104, 86, 71, 73, 88, 106];
/// Unit sizes (m²) per letter on upper floors.
pub const UPPER_SIZES: [u32; 6] = [168, 156, 150, 152, 158, 171];

const STANDARD_PLANS: [(u32, &str); 6] = [
    (71, "floorplans/standard-71.webp"),
    (73, "floorplans/standard-73.webp"),
    (86, "floorplans/standard-86.webp"),
    (88, "floorplans/standard-88.webp"),
    (104, "floorplans/standard-104.webp"),
    (106, "floorplans/standard-106.webp"),
];
const UPPER_PLAN: &str = "floorplans/penthouse.webp";
const TYPICAL_PLAN: &str = "floorplans/typical.webp";

/// Reference to a floor-plan image in the site's asset bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FloorPlanAsset(pub &'static str);

impl FloorPlanAsset {
    pub const UPPER: FloorPlanAsset = FloorPlanAsset(UPPER_PLAN);
    pub const TYPICAL: FloorPlanAsset = FloorPlanAsset(TYPICAL_PLAN);

    pub fn path(self) -> &'static str {
        self.0
    }

    pub fn is_typical(self) -> bool {
        self == Self::TYPICAL
    }
}

/// Plan for a unit size. Sizes are rounded to the nearest square metre;
/// unmapped sizes get the generic typical plan.
pub fn floor_plan_for_size(size_sqm: f32) -> FloorPlanAsset {
    if !size_sqm.is_finite() || size_sqm <= 0.0 {
        return FloorPlanAsset::TYPICAL;
    }
    let rounded = size_sqm.round() as u32;
    if rounded >= UPPER_PLAN_MIN_SQM {
        return FloorPlanAsset::UPPER;
    }
    STANDARD_PLANS
        .iter()
        .find(|(size, _)| *size == rounded)
        .map(|&(_, path)| FloorPlanAsset(path))
        .unwrap_or(FloorPlanAsset::TYPICAL)
}

/// Designed size of a unit, from its floor band and letter.
pub fn plan_size(config: &TowerConfig, floor: i32, letter: UnitLetter) -> u32 {
    match config.band_of(floor) {
        FloorBand::Standard => STANDARD_SIZES[letter.index()],
        FloorBand::Upper => UPPER_SIZES[letter.index()],
    }
}
