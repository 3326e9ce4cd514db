//! Seeded demo inventory.
//!
//! Fills every floor and letter with its designed plan size and a status drawn
//! from a `ChaCha8Rng`, so the same seed always yields the same tower on every
//! platform. Used by the `--sample` mode of the binary, tests and benches.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::TowerConfig;
use crate::floor_plans::plan_size;
use crate::units::{UnitLetter, UnitRecord, UnitStatus};

/// Percent of units left available.
const AVAILABLE_PCT: u32 = 55;
/// Cumulative percent of units available or reserved; the rest are sold.
const RESERVED_PCT: u32 = 70;

fn roll_status(rng: &mut ChaCha8Rng) -> UnitStatus {
    let roll: u32 = rng.gen_range(0..100);
    if roll < AVAILABLE_PCT {
        UnitStatus::Available
    } else if roll < RESERVED_PCT {
        UnitStatus::Reserved
    } else {
        UnitStatus::Sold
    }
}

/// Full tower, sorted by `(floor, unit)`.
pub fn sample_inventory(config: &TowerConfig, seed: u64) -> Vec<UnitRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(config.floor_count() * UnitLetter::ALL.len());
    for floor in config.floors() {
        for letter in UnitLetter::ALL {
            let size = plan_size(config, floor, letter);
            records.push(UnitRecord::new(floor, letter, size, roll_status(&mut rng)));
        }
    }
    records
}
