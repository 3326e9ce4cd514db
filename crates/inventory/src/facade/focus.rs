//! Drill-into-floor focus: how far to translate the zoomed facade so the
//! selected floor stays centred.
//!
//! Offsets are taken from the pre-zoom layout. The scale and the translation
//! are then applied together as one [`FacadeTransform`].

use bevy::prelude::*;
use serde::Serialize;

use crate::config::TowerConfig;

use super::geometry::FacadeLayout;

/// Scale and translation (percent of the image) applied to the facade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FacadeTransform {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for FacadeTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl FacadeTransform {
    pub const IDENTITY: FacadeTransform = FacadeTransform {
        scale: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset_x, self.offset_y)
    }
}

/// Translation that keeps `floor` centred at `config.view_center` after the
/// facade is scaled by `config.zoom_multiplier`:
///
/// `y = (view_center - (top + height / 2)) * (zoom - 1)`, `x = 0`.
///
/// Floors outside the tower get a zero offset; the UI can ask mid-transition
/// for a floor that is no longer valid.
pub fn focus_offset(config: &TowerConfig, layout: &FacadeLayout, floor: i32) -> Vec2 {
    match layout.geometry(floor) {
        Some(geometry) => {
            let y = (config.view_center - geometry.center_y()) * (config.zoom_multiplier - 1.0);
            Vec2::new(0.0, y)
        }
        None => {
            debug!("focus: floor {} outside the facade, no offset", floor);
            Vec2::ZERO
        }
    }
}

/// Full transform for a selection. No selection, or a floor outside the
/// tower, gives the identity.
pub fn focus_transform(
    config: &TowerConfig,
    layout: &FacadeLayout,
    selection: Option<i32>,
) -> FacadeTransform {
    match selection {
        Some(floor) if layout.geometry(floor).is_some() => {
            let offset = focus_offset(config, layout, floor);
            FacadeTransform {
                scale: config.zoom_multiplier,
                offset_x: offset.x,
                offset_y: offset.y,
            }
        }
        _ => FacadeTransform::IDENTITY,
    }
}
