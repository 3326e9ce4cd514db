use bevy::prelude::*;

use crate::config::TowerConfig;
use crate::inventory::Inventory;

use super::aggregate::content_hash;
use super::types::FloorStatsTable;

/// Rebuilds [`FloorStatsTable`] when the inventory or config changed.
///
/// A change tick alone is not enough to recompute: an admin edit that writes
/// back the same status leaves the content hash unchanged and the table is
/// kept. The skip saves no work over a rebuild; it only keeps the table's
/// change tick quiet for readers gated on `is_changed`.
pub fn refresh_floor_stats(
    config: Res<TowerConfig>,
    inventory: Res<Inventory>,
    mut table: ResMut<FloorStatsTable>,
) {
    if !inventory.is_changed() && !config.is_changed() {
        return;
    }

    let hash = content_hash(inventory.records());
    if table.source_hash == Some(hash) && !config.is_changed() {
        debug!("floor stats: inventory hash {:016x} unchanged, keeping table", hash);
        return;
    }

    *table = FloorStatsTable::build(&config, inventory.records());
    debug!(
        "floor stats: rebuilt {} floors from {} units (hash {:016x})",
        table.floors.len(),
        table.summary.total,
        hash
    );
}
