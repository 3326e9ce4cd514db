use std::collections::BTreeMap;

use bevy::prelude::*;
use serde::Serialize;

use crate::config::{OverlayBox, TowerConfig};

/// Placement of one floor band on the facade image, in percent of the image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FloorGeometry {
    pub top: f32,
    pub height: f32,
    pub left: f32,
    pub right: f32,
}

impl FloorGeometry {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Vertical centre of the band.
    pub fn center_y(&self) -> f32 {
        self.top + self.height / 2.0
    }
}

/// Splits the overlay box into one equal band per floor, highest floor on top.
///
/// Band `i` (counting down from `max_floor`) starts at
/// `overlay.top + i * band_height`. All bands share the overlay's horizontal
/// bounds. An inverted range yields an empty map.
pub fn compute_floor_positions(
    min_floor: i32,
    max_floor: i32,
    overlay: OverlayBox,
) -> BTreeMap<i32, FloorGeometry> {
    if min_floor > max_floor {
        return BTreeMap::new();
    }
    let count = (max_floor - min_floor + 1) as f32;
    let band_height = overlay.height() / count;

    (min_floor..=max_floor)
        .map(|floor| {
            let index = (max_floor - floor) as f32;
            let geometry = FloorGeometry {
                top: overlay.top + index * band_height,
                height: band_height,
                left: overlay.left,
                right: overlay.right,
            };
            (floor, geometry)
        })
        .collect()
}

/// Facade layout for the configured tower. Depends only on configuration,
/// never on unit data.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FacadeLayout {
    pub overlay: OverlayBox,
    pub min_floor: i32,
    pub max_floor: i32,
    pub floors: BTreeMap<i32, FloorGeometry>,
}

impl Default for FacadeLayout {
    fn default() -> Self {
        Self::from_config(&TowerConfig::default())
    }
}

impl FacadeLayout {
    pub fn from_config(config: &TowerConfig) -> Self {
        Self {
            overlay: config.overlay,
            min_floor: config.min_floor,
            max_floor: config.max_floor,
            floors: compute_floor_positions(config.min_floor, config.max_floor, config.overlay),
        }
    }

    pub fn geometry(&self, floor: i32) -> Option<FloorGeometry> {
        self.floors.get(&floor).copied()
    }

    pub fn band_height(&self) -> f32 {
        self.floors.values().next().map(|g| g.height).unwrap_or(0.0)
    }

    /// Floor whose band contains the point `(x, y)` (percent of the image),
    /// for hover and click hotspots. The bottom edge of the overlay belongs to
    /// the lowest floor.
    pub fn floor_at_point(&self, x: f32, y: f32) -> Option<i32> {
        let band = self.band_height();
        if band <= 0.0 || !x.is_finite() || !y.is_finite() {
            return None;
        }
        if x < self.overlay.left || x > self.overlay.right {
            return None;
        }
        if y < self.overlay.top || y > self.overlay.bottom {
            return None;
        }
        let last = self.max_floor - self.min_floor;
        let index = (((y - self.overlay.top) / band).floor() as i32).min(last);
        Some(self.max_floor - index)
    }
}
