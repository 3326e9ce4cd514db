use bevy::prelude::*;

use crate::config::TowerConfig;
use crate::units::UnitLetter;

/// Floor the price is actually computed from.
///
/// Floors outside the tower are clamped into it. The configured top-floor
/// override is the only other adjustment. An inverted floor range clamps to
/// `max_floor` instead of panicking.
pub fn effective_floor(config: &TowerConfig, floor: i32) -> i32 {
    let floor = floor.max(config.min_floor).min(config.max_floor);
    match config.top_floor_override {
        Some(ov) if ov.floor == floor => ov.priced_as,
        _ => floor,
    }
}

/// List price of a unit.
///
/// `base[letter] + (effective_floor - band_first_floor) * floor_premium`, where
/// the band is chosen from the effective floor.
pub fn price(config: &TowerConfig, floor: i32, letter: UnitLetter) -> u64 {
    let floor = effective_floor(config, floor);
    let band = config.band_of(floor);
    let steps = (floor - config.band_first_floor(band)).max(0) as u64;
    config.base_price(band, letter) + steps * config.floor_premium
}

/// Price from a raw letter label. Unknown labels are priced as the default
/// letter rather than failing.
pub fn price_for_label(config: &TowerConfig, floor: i32, label: &str) -> u64 {
    let letter = match label.parse::<UnitLetter>() {
        Ok(letter) => letter,
        Err(_) => {
            debug!(
                "pricing: unknown unit letter '{}' on floor {}, using {}",
                label,
                floor,
                UnitLetter::DEFAULT
            );
            UnitLetter::DEFAULT
        }
    };
    price(config, floor, letter)
}

/// Whole-currency price per square metre, rounded. Zero for a zero size.
pub fn price_per_sqm(price: u64, size_sqm: u32) -> u64 {
    if size_sqm == 0 {
        return 0;
    }
    let size = size_sqm as u64;
    (price + size / 2) / size
}
