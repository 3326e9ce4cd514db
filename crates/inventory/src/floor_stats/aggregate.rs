use std::collections::BTreeMap;

use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::config::TowerConfig;
use crate::units::{UnitRecord, UnitStatus};

use super::types::{FloorEntry, FloorStats, FloorStatsTable, InventorySummary};

/// Seed for in-memory inventory content hashes.
const CONTENT_HASH_SEED: u64 = 0x7A0E_44F7;

fn tally(stats: &mut FloorStats, status: UnitStatus) {
    stats.total += 1;
    match status {
        UnitStatus::Available => stats.available += 1,
        UnitStatus::Reserved => stats.reserved += 1,
        UnitStatus::Sold => stats.sold += 1,
    }
}

/// Counts for a single floor. Pure: the input is only read.
pub fn aggregate<T: FloorEntry>(units: &[T], floor: i32) -> FloorStats {
    let mut stats = FloorStats::empty(floor);
    for unit in units.iter().filter(|u| u.floor() == floor) {
        tally(&mut stats, unit.status());
    }
    stats
}

/// Counts for every floor in the tower in one pass. Floors without records
/// are present and empty; records outside the tower are ignored.
pub fn aggregate_all<T: FloorEntry>(config: &TowerConfig, units: &[T]) -> BTreeMap<i32, FloorStats> {
    let mut floors: BTreeMap<i32, FloorStats> =
        config.floors().map(|f| (f, FloorStats::empty(f))).collect();
    for unit in units {
        if let Some(stats) = floors.get_mut(&unit.floor()) {
            tally(stats, unit.status());
        }
    }
    floors
}

pub fn summarize<T: FloorEntry>(units: &[T]) -> InventorySummary {
    let mut summary = InventorySummary::default();
    for unit in units {
        summary.total += 1;
        match unit.status() {
            UnitStatus::Available => summary.available += 1,
            UnitStatus::Reserved => summary.reserved += 1,
            UnitStatus::Sold => summary.sold += 1,
        }
    }
    summary
}

/// 64-bit xxh3 over the fields that affect aggregation and enrichment, in
/// record order. Notes and audit fields are excluded.
pub fn content_hash(records: &[UnitRecord]) -> u64 {
    let mut bytes = Vec::with_capacity(records.len() * 10);
    for r in records {
        bytes.extend_from_slice(&r.floor.to_le_bytes());
        bytes.push(r.unit.as_char() as u8);
        bytes.extend_from_slice(&r.size_sqm.to_le_bytes());
        bytes.push(r.status.code());
    }
    xxh3_64_with_seed(&bytes, CONTENT_HASH_SEED)
}

impl FloorStatsTable {
    pub fn build(config: &TowerConfig, records: &[UnitRecord]) -> Self {
        Self {
            floors: aggregate_all(config, records),
            summary: summarize(records),
            source_hash: Some(content_hash(records)),
        }
    }
}
