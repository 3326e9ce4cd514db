use bevy::prelude::*;

use crate::config::TowerConfig;

use super::focus::focus_transform;
use super::geometry::FacadeLayout;
use super::view::{advance_view, exp_lerp_factor, FacadeSmoothing, FacadeView, FloorSelection};

/// Recomputes the facade layout when the tower configuration changes.
pub fn rebuild_facade_layout(config: Res<TowerConfig>, mut layout: ResMut<FacadeLayout>) {
    if !config.is_changed() {
        return;
    }
    let next = FacadeLayout::from_config(&config);
    if *layout != next {
        info!(
            "facade: laid out floors {}..={} in overlay {:?}",
            next.min_floor, next.max_floor, next.overlay
        );
        *layout = next;
    }
}

/// Sets the view target from the selected floor, using the pre-zoom layout.
pub fn focus_selected_floor(
    config: Res<TowerConfig>,
    layout: Res<FacadeLayout>,
    selection: Res<FloorSelection>,
    mut view: ResMut<FacadeView>,
) {
    if !selection.is_changed() && !layout.is_changed() && !config.is_changed() {
        return;
    }
    let target = focus_transform(&config, &layout, selection.floor);
    if view.target != target {
        debug!(
            "facade: focus {:?} -> scale {:.2}, offset ({:.2}, {:.2})",
            selection.floor, target.scale, target.offset_x, target.offset_y
        );
        view.target = target;
    }
}

/// Moves the current view toward its target each frame.
pub fn animate_facade_view(
    time: Res<Time>,
    smoothing: Res<FacadeSmoothing>,
    mut view: ResMut<FacadeView>,
) {
    if view.is_settled() {
        return;
    }
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }
    let factor = exp_lerp_factor(smoothing.speed, dt);
    let next = advance_view(view.current, view.target, factor, smoothing.epsilon);
    view.current = next;
}
