mod focus;
mod geometry;
mod systems;
mod view;

pub use focus::{focus_offset, focus_transform, FacadeTransform};
pub use geometry::{compute_floor_positions, FacadeLayout, FloorGeometry};
pub use systems::{animate_facade_view, focus_selected_floor, rebuild_facade_layout};
pub use view::{
    advance_view, exp_lerp_factor, FacadeSmoothing, FacadeView, FloorSelection,
};
