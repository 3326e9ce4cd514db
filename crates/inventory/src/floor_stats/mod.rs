mod aggregate;
mod colors;
mod systems;
mod types;

pub use aggregate::{aggregate, aggregate_all, content_hash, summarize};
pub use colors::{hotspot_color, status_color, status_hex, HOTSPOT_ALPHA};
pub use systems::refresh_floor_stats;
pub use types::{DominantStatus, FloorEntry, FloorStats, FloorStatsTable, InventorySummary};
