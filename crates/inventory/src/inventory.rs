//! The validated unit collection held by the app.
//!
//! Records are kept sorted by `(floor, unit)`. Construction enforces the
//! inventory invariants: every floor inside the tower and no duplicate keys.
//! Status edits are last write wins.

use bevy::prelude::*;

use crate::config::TowerConfig;
use crate::error::InventoryError;
use crate::transform::{enrich_all, EnrichedUnit};
use crate::units::{UnitLetter, UnitRecord, UnitStatus};

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    records: Vec<UnitRecord>,
}

impl Inventory {
    /// Validate and sort a batch of records from the store.
    pub fn from_records(
        config: &TowerConfig,
        mut records: Vec<UnitRecord>,
    ) -> Result<Self, InventoryError> {
        if let Some(bad) = records.iter().find(|r| !config.contains_floor(r.floor)) {
            return Err(InventoryError::FloorOutOfRange {
                floor: bad.floor,
                min: config.min_floor,
                max: config.max_floor,
            });
        }

        records.sort_by_key(UnitRecord::key);
        if let Some(pair) = records.windows(2).find(|w| w[0].key() == w[1].key()) {
            let (floor, unit) = pair[0].key();
            warn!("inventory: duplicate unit {}{} in feed", floor, unit);
            return Err(InventoryError::DuplicateUnit { floor, unit });
        }

        Ok(Self { records })
    }

    /// All records, sorted by `(floor, unit)`.
    pub fn records(&self) -> &[UnitRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, floor: i32, unit: UnitLetter) -> Option<usize> {
        self.records
            .binary_search_by_key(&(floor, unit), UnitRecord::key)
            .ok()
    }

    pub fn get(&self, floor: i32, unit: UnitLetter) -> Option<&UnitRecord> {
        self.position(floor, unit).map(|i| &self.records[i])
    }

    pub fn on_floor(&self, floor: i32) -> &[UnitRecord] {
        let start = self.records.partition_point(|r| r.floor < floor);
        let end = self.records.partition_point(|r| r.floor <= floor);
        &self.records[start..end]
    }

    /// Admin status edit. The latest call wins; `updated_at` is left to the
    /// store, which stamps it on write.
    pub fn set_status(
        &mut self,
        floor: i32,
        unit: UnitLetter,
        status: UnitStatus,
        actor: Option<&str>,
    ) -> Result<&UnitRecord, InventoryError> {
        let i = self
            .position(floor, unit)
            .ok_or(InventoryError::UnitNotFound { floor, unit })?;
        let record = &mut self.records[i];
        if record.status != status {
            info!(
                "inventory: {}{} {} -> {}",
                floor,
                unit,
                record.status.label(),
                status.label()
            );
        }
        record.status = status;
        if let Some(actor) = actor {
            record.updated_by = Some(actor.to_string());
        }
        Ok(&self.records[i])
    }

    /// Enriched view of every record, recomputed on each call.
    pub fn enriched(&self, config: &TowerConfig) -> Result<Vec<EnrichedUnit>, InventoryError> {
        enrich_all(config, &self.records)
    }
}
