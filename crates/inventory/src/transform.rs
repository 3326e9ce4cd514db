//! Inventory Transform: raw unit row → view-ready [`EnrichedUnit`].
//!
//! Enriched units are recomputed on every read and never stored, so they
//! always reflect the latest record without any invalidation step.

use bevy::prelude::*;
use serde::Serialize;

use crate::classification::{
    classification_conflict, profile, Classification, ClassificationConflict, ViewDirection,
};
use crate::config::{FloorBand, TowerConfig};
use crate::error::InventoryError;
use crate::floor_plans::{floor_plan_for_size, FloorPlanAsset};
use crate::pricing::price;
use crate::units::UnitRecord;

/// A unit record with everything the browser shows about it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedUnit {
    #[serde(flatten)]
    pub record: UnitRecord,
    pub unit_number: u8,
    pub band: FloorBandLabel,
    pub price: u64,
    pub classification: Classification,
    /// Set when the size thresholds disagree with the floor-band plan. The
    /// floor-band answer is still the one in `classification`.
    pub classification_conflict: Option<ClassificationConflict>,
    pub view: ViewDirection,
    pub floor_plan: FloorPlanAsset,
}

/// Serialisable band name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FloorBandLabel {
    Standard,
    Upper,
}

impl From<FloorBand> for FloorBandLabel {
    fn from(band: FloorBand) -> Self {
        match band {
            FloorBand::Standard => Self::Standard,
            FloorBand::Upper => Self::Upper,
        }
    }
}

impl EnrichedUnit {
    pub fn floor(&self) -> i32 {
        self.record.floor
    }

    /// Display name such as `"21B"`.
    pub fn display_name(&self) -> String {
        format!("{}{}", self.record.floor, self.record.unit)
    }
}

/// Enrich one record.
///
/// Fails only when the record's floor lies outside the tower, which means the
/// upstream store holds data this core cannot place.
pub fn transform(config: &TowerConfig, record: &UnitRecord) -> Result<EnrichedUnit, InventoryError> {
    if !config.contains_floor(record.floor) {
        return Err(InventoryError::FloorOutOfRange {
            floor: record.floor,
            min: config.min_floor,
            max: config.max_floor,
        });
    }

    let unit_number = record.unit.unit_number();
    let unit_profile = profile(config, record.size_sqm, Some(record.floor), unit_number);
    let conflict = classification_conflict(config, record.size_sqm, record.floor);
    if let Some(c) = conflict {
        debug!(
            "transform: {}{} ({} m²) is {} by floor but {} by size",
            record.floor,
            record.unit,
            record.size_sqm,
            c.by_floor.unit_type.label(),
            c.by_size.unit_type.label()
        );
    }

    Ok(EnrichedUnit {
        record: record.clone(),
        unit_number,
        band: config.band_of(record.floor).into(),
        price: price(config, record.floor, record.unit),
        classification: unit_profile.classification,
        classification_conflict: conflict,
        view: unit_profile.view,
        floor_plan: floor_plan_for_size(record.size_sqm as f32),
    })
}

/// Enrich every record, stopping at the first invalid one.
pub fn enrich_all(
    config: &TowerConfig,
    records: &[UnitRecord],
) -> Result<Vec<EnrichedUnit>, InventoryError> {
    records.iter().map(|r| transform(config, r)).collect()
}
