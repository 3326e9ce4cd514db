//! Animated facade view state.
//!
//! Selecting a floor writes a new target transform; each frame the current
//! transform is moved toward it with frame-rate independent exponential
//! interpolation:
//!
//!   `value += (target - value) * (1 - exp(-speed * dt))`
//!
//! Scale and offset move with the same factor so the selected floor stays in
//! place while the zoom animates.

use bevy::prelude::*;

use super::focus::FacadeTransform;

/// Currently selected floor, if any. Written by the UI.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloorSelection {
    pub floor: Option<i32>,
}

/// Smoothing parameters.
#[derive(Resource, Debug, Clone, Copy)]
pub struct FacadeSmoothing {
    /// Higher = snappier. Default: 8.0.
    pub speed: f32,
    /// Snap to the target once every component is within this distance.
    pub epsilon: f32,
}

impl Default for FacadeSmoothing {
    fn default() -> Self {
        Self {
            speed: 8.0,
            epsilon: 0.001,
        }
    }
}

/// Transform currently applied to the facade, and where it is heading.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FacadeView {
    pub current: FacadeTransform,
    pub target: FacadeTransform,
}

impl FacadeView {
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

/// Fraction of the remaining distance covered in `dt` seconds, in `[0, 1]`.
#[inline]
pub fn exp_lerp_factor(speed: f32, dt: f32) -> f32 {
    1.0 - (-speed * dt).exp()
}

/// One interpolation step from `current` toward `target`.
pub fn advance_view(
    current: FacadeTransform,
    target: FacadeTransform,
    factor: f32,
    epsilon: f32,
) -> FacadeTransform {
    let factor = factor.clamp(0.0, 1.0);
    let next = FacadeTransform {
        scale: current.scale + (target.scale - current.scale) * factor,
        offset_x: current.offset_x + (target.offset_x - current.offset_x) * factor,
        offset_y: current.offset_y + (target.offset_y - current.offset_y) * factor,
    };
    let close = (target.scale - next.scale).abs() <= epsilon
        && (target.offset_x - next.offset_x).abs() <= epsilon
        && (target.offset_y - next.offset_y).abs() <= epsilon;
    if close {
        target
    } else {
        next
    }
}
