//! Properties of the inventory core over a full 7..=44 tower.
//!
//! Exercises the public API only:
//! - Facade geometry is monotonic and covers every floor
//! - Floor totals add up and match the source collection
//! - Prices rise strictly with floor inside each band
//! - The top floor is priced exactly like floor 41
//! - Focus offsets degrade to zero outside the tower
//! - The inventory transform is pure
//!
//! Run: cargo test -p inventory --test full_tower

use bevy::prelude::Vec2;

use inventory::config::{TowerConfig, MAX_FLOOR, MIN_FLOOR, PENTHOUSE_FLOOR};
use inventory::facade::{focus_offset, FacadeLayout};
use inventory::feed::{decode_feed, transform_row};
use inventory::floor_stats::aggregate_all;
use inventory::pricing::price;
use inventory::sample::sample_inventory;
use inventory::transform::transform;
use inventory::units::UnitLetter;

const SEEDS: [u64; 4] = [0, 1, 2024, 0xDEAD_BEEF];

// ---------------------------------------------------------------------------
// 1. Geometry
// ---------------------------------------------------------------------------

#[test]
fn test_geometry_monotonic_for_every_floor_pair() {
    let layout = FacadeLayout::from_config(&TowerConfig::default());
    for lo in MIN_FLOOR..=MAX_FLOOR {
        for hi in (lo + 1)..=MAX_FLOOR {
            let top_hi = layout.geometry(hi).unwrap().top;
            let top_lo = layout.geometry(lo).unwrap().top;
            assert!(top_hi < top_lo, "floor {hi} top {top_hi} vs floor {lo} top {top_lo}");
        }
    }
}

#[test]
fn test_geometry_covers_every_floor() {
    let layout = FacadeLayout::from_config(&TowerConfig::default());
    for floor in MIN_FLOOR..=MAX_FLOOR {
        let g = layout
            .geometry(floor)
            .unwrap_or_else(|| panic!("floor {floor} has no geometry"));
        for v in [g.top, g.height, g.left, g.right, g.bottom()] {
            assert!((0.0..=100.0).contains(&v), "floor {floor}: {v}");
        }
        assert!(g.left < g.right);
    }
    assert!(layout.geometry(MIN_FLOOR - 1).is_none());
    assert!(layout.geometry(MAX_FLOOR + 1).is_none());
}

// ---------------------------------------------------------------------------
// 2. Aggregation
// ---------------------------------------------------------------------------

#[test]
fn test_aggregation_totals_for_many_towers() {
    let config = TowerConfig::default();
    for seed in SEEDS {
        let units = sample_inventory(&config, seed);
        let table = aggregate_all(&config, &units);
        for floor in MIN_FLOOR..=MAX_FLOOR {
            let stats = table[&floor];
            assert_eq!(stats.available + stats.reserved + stats.sold, stats.total);
            let count = units.iter().filter(|u| u.floor == floor).count() as u32;
            assert_eq!(stats.total, count, "seed {seed} floor {floor}");
        }
    }
}

// ---------------------------------------------------------------------------
// 3. Pricing
// ---------------------------------------------------------------------------

#[test]
fn test_price_strictly_increasing_within_each_band() {
    let config = TowerConfig::default();
    let override_floor = config.top_floor_override.map(|o| o.floor);
    for letter in UnitLetter::ALL {
        for (first, last) in [(MIN_FLOOR, PENTHOUSE_FLOOR - 1), (PENTHOUSE_FLOOR, MAX_FLOOR)] {
            let floors: Vec<i32> = (first..=last)
                .filter(|f| Some(*f) != override_floor)
                .collect();
            for pair in floors.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                assert!(
                    price(&config, a, letter) < price(&config, b, letter),
                    "{letter}: floor {a} should be cheaper than {b}"
                );
            }
        }
    }
}

#[test]
fn test_top_floor_priced_exactly_as_floor_41() {
    let config = TowerConfig::default();
    for letter in UnitLetter::ALL {
        assert_eq!(price(&config, 44, letter), price(&config, 41, letter));
    }
}

#[test]
fn test_worked_example() {
    let config = TowerConfig::default();
    assert_eq!(price(&config, 7, UnitLetter::A), 346_800);
    assert_eq!(price(&config, 20, UnitLetter::A), 359_800);
    assert_eq!(
        price(&config, 44, UnitLetter::A),
        price(&config, 41, UnitLetter::A)
    );
}

// ---------------------------------------------------------------------------
// 4. Focus
// ---------------------------------------------------------------------------

#[test]
fn test_focus_degenerates_outside_the_tower() {
    let config = TowerConfig::default();
    let layout = FacadeLayout::from_config(&config);
    for floor in [i32::MIN, -1, 0, MIN_FLOOR - 1, MAX_FLOOR + 1, 100, i32::MAX] {
        assert_eq!(focus_offset(&config, &layout, floor), Vec2::ZERO, "floor {floor}");
    }
    assert_ne!(
        focus_offset(&config, &layout, MIN_FLOOR),
        focus_offset(&config, &layout, MAX_FLOOR)
    );
}

// ---------------------------------------------------------------------------
// 5. Transform purity
// ---------------------------------------------------------------------------

#[test]
fn test_transform_is_idempotent_across_the_tower() {
    let config = TowerConfig::default();
    for record in sample_inventory(&config, 9) {
        let first = transform(&config, &record).unwrap();
        let second = transform(&config, &record).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_transform_row_is_idempotent() {
    let config = TowerConfig::default();
    let rows = decode_feed(
        r#"[{"id": 7, "floor": 38, "unit": "d", "size_sqm": 152.4, "status": "reserved"}]"#,
    )
    .unwrap();
    let a = transform_row(&config, &rows[0]).unwrap();
    let b = transform_row(&config, &rows[0]).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.record.size_sqm, 152);
}
