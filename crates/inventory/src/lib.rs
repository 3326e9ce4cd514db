//! Building-to-inventory core for the tower sales site.
//!
//! Pure functions price, classify and aggregate units and map floors onto the
//! facade image. [`InventoryPlugin`] wires them into resources and
//! change-driven systems so a front end can read derived state frame by frame.

use bevy::prelude::*;

pub mod classification;
pub mod config;
pub mod error;
pub mod facade;
pub mod feed;
pub mod filter;
pub mod floor_plans;
pub mod floor_stats;
pub mod inventory;
pub mod pricing;
pub mod query_protocol;
pub mod sample;
pub mod transform;
pub mod units;

#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

use config::TowerConfig;
use facade::{FacadeLayout, FacadeSmoothing, FacadeView, FloorSelection};
use floor_stats::FloorStatsTable;
use inventory::Inventory;

/// Ordered phases for the plugin's `Update` systems.
///
/// Configured as a chain: `Layout` → `Aggregate` → `Focus` → `Animate`, so the
/// ingest and aggregation of a frame are visible to the facade in that frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum InventorySet {
    /// Facade layout rebuilt from `TowerConfig`.
    Layout,
    /// Floor stats refreshed from `Inventory`.
    Aggregate,
    /// View target recomputed from `FloorSelection`.
    Focus,
    /// View advanced toward its target.
    Animate,
}

pub struct InventoryPlugin;

impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        // A config inserted before the plugin wins over the defaults.
        app.init_resource::<TowerConfig>();
        let mut config = app.world().resource::<TowerConfig>().clone();
        if let Err(e) = config.validate() {
            warn!("inventory: {e}, falling back to the default tower");
            config = TowerConfig::default();
            app.insert_resource(config.clone());
        }

        app.insert_resource(FacadeLayout::from_config(&config))
            .init_resource::<Inventory>()
            .init_resource::<FloorStatsTable>()
            .init_resource::<FloorSelection>()
            .init_resource::<FacadeView>()
            .init_resource::<FacadeSmoothing>()
            .configure_sets(
                Update,
                (
                    InventorySet::Layout,
                    InventorySet::Aggregate,
                    InventorySet::Focus,
                    InventorySet::Animate,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    (config::reject_invalid_config, facade::rebuild_facade_layout)
                        .chain()
                        .in_set(InventorySet::Layout),
                    floor_stats::refresh_floor_stats.in_set(InventorySet::Aggregate),
                    facade::focus_selected_floor.in_set(InventorySet::Focus),
                    facade::animate_facade_view.in_set(InventorySet::Animate),
                ),
            );
    }
}
