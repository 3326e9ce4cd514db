//! Raw unit feed decoding.
//!
//! The store exports the `units` table as a JSON array of rows sorted by
//! `(floor, unit)`. Rows are decoded loosely (ids may be strings or numbers,
//! sizes may carry decimals) and then validated into [`UnitRecord`]s.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::TowerConfig;
use crate::error::InventoryError;
use crate::inventory::Inventory;
use crate::transform::{transform, EnrichedUnit};
use crate::units::{UnitLetter, UnitRecord, UnitStatus};

/// Row id as exported by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Text(String),
    Number(i64),
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowId::Text(s) => write!(f, "{s}"),
            RowId::Number(n) => write!(f, "{n}"),
        }
    }
}

/// One row of the unit feed, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedRow {
    pub id: RowId,
    pub floor: i32,
    pub unit: String,
    pub size_sqm: f64,
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub updated_by: Option<String>,
}

/// Parse a JSON array of feed rows.
pub fn decode_feed(json: &str) -> Result<Vec<FeedRow>, InventoryError> {
    let rows: Vec<FeedRow> = serde_json::from_str(json)?;
    Ok(rows)
}

/// Validate one row into a record.
pub fn row_to_record(config: &TowerConfig, row: &FeedRow) -> Result<UnitRecord, InventoryError> {
    let unit: UnitLetter = row.unit.parse()?;
    if !config.contains_floor(row.floor) {
        return Err(InventoryError::FloorOutOfRange {
            floor: row.floor,
            min: config.min_floor,
            max: config.max_floor,
        });
    }
    let size = row.size_sqm.round();
    if !size.is_finite() || size < 1.0 || size > u32::MAX as f64 {
        return Err(InventoryError::Decode(format!(
            "row {}: size {} is not a positive area",
            row.id, row.size_sqm
        )));
    }
    let status: UnitStatus = row.status.parse()?;

    Ok(UnitRecord {
        id: row.id.to_string(),
        floor: row.floor,
        unit,
        size_sqm: size as u32,
        status,
        notes: row.notes.clone().filter(|n| !n.trim().is_empty()),
        updated_at: row.updated_at.clone(),
        updated_by: row.updated_by.clone(),
    })
}

pub fn rows_to_records(
    config: &TowerConfig,
    rows: &[FeedRow],
) -> Result<Vec<UnitRecord>, InventoryError> {
    rows.iter().map(|row| row_to_record(config, row)).collect()
}

/// Validate and enrich a raw row in one step.
pub fn transform_row(config: &TowerConfig, row: &FeedRow) -> Result<EnrichedUnit, InventoryError> {
    let record = row_to_record(config, row)?;
    transform(config, &record)
}

/// Decode, validate and index a feed.
pub fn load_inventory(config: &TowerConfig, json: &str) -> Result<Inventory, InventoryError> {
    let rows = decode_feed(json)?;
    let records = rows_to_records(config, &rows)?;
    let inventory = Inventory::from_records(config, records)?;
    info!("feed: loaded {} units", inventory.len());
    Ok(inventory)
}

pub fn load_feed_file(config: &TowerConfig, path: &Path) -> Result<Inventory, InventoryError> {
    let json = std::fs::read_to_string(path)?;
    load_inventory(config, &json)
}

/// Serialise records back into feed rows, e.g. to hand a sample inventory to a
/// front end.
pub fn records_to_rows(records: &[UnitRecord]) -> Vec<FeedRow> {
    records
        .iter()
        .map(|r| FeedRow {
            id: RowId::Text(r.id.clone()),
            floor: r.floor,
            unit: r.unit.to_string(),
            size_sqm: r.size_sqm as f64,
            status: r.status.label().to_ascii_lowercase(),
            notes: r.notes.clone(),
            updated_at: r.updated_at.clone(),
            updated_by: r.updated_by.clone(),
        })
        .collect()
}
