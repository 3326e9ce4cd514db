use std::collections::BTreeMap;

use bevy::prelude::*;
use serde::Serialize;

use crate::transform::EnrichedUnit;
use crate::units::{UnitRecord, UnitStatus};

/// Anything that sits on a floor and carries a sales status. Lets the
/// aggregator run over raw records or enriched units alike.
pub trait FloorEntry {
    fn floor(&self) -> i32;
    fn status(&self) -> UnitStatus;
}

impl FloorEntry for UnitRecord {
    fn floor(&self) -> i32 {
        self.floor
    }
    fn status(&self) -> UnitStatus {
        self.status
    }
}

impl FloorEntry for EnrichedUnit {
    fn floor(&self) -> i32 {
        self.record.floor
    }
    fn status(&self) -> UnitStatus {
        self.record.status
    }
}

/// Single label for a floor's mix of unit statuses, used to colour hotspots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DominantStatus {
    /// Every unit on the floor is available.
    Available,
    /// Any other mix, including a floor that is entirely reserved.
    Limited,
    /// Every unit on the floor is sold.
    Sold,
    /// No units recorded for the floor. Not the same as sold.
    Empty,
}

impl DominantStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Limited => "Limited",
            Self::Sold => "Sold Out",
            Self::Empty => "No Data",
        }
    }
}

/// Unit counts for one floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FloorStats {
    pub floor: i32,
    pub total: u32,
    pub available: u32,
    pub reserved: u32,
    pub sold: u32,
}

impl FloorStats {
    pub fn empty(floor: i32) -> Self {
        Self {
            floor,
            ..Default::default()
        }
    }

    pub fn count(&self, status: UnitStatus) -> u32 {
        match status {
            UnitStatus::Available => self.available,
            UnitStatus::Reserved => self.reserved,
            UnitStatus::Sold => self.sold,
        }
    }

    pub fn dominant_status(&self) -> DominantStatus {
        if self.total == 0 {
            DominantStatus::Empty
        } else if self.available == self.total {
            DominantStatus::Available
        } else if self.sold == self.total {
            DominantStatus::Sold
        } else {
            DominantStatus::Limited
        }
    }
}

/// Building-wide counts per status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct InventorySummary {
    pub total: u32,
    pub available: u32,
    pub reserved: u32,
    pub sold: u32,
}

impl InventorySummary {
    /// Share of units sold or reserved, in [0, 1]. Zero for an empty tower.
    pub fn absorption(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        (self.sold + self.reserved) as f32 / self.total as f32
    }
}

/// Per-floor statistics for every floor in the tower, rebuilt whenever the
/// inventory changes.
#[derive(Resource, Debug, Clone, Default)]
pub struct FloorStatsTable {
    pub floors: BTreeMap<i32, FloorStats>,
    pub summary: InventorySummary,
    /// Content hash of the records these stats were built from.
    pub source_hash: Option<u64>,
}

impl FloorStatsTable {
    pub fn get(&self, floor: i32) -> Option<&FloorStats> {
        self.floors.get(&floor)
    }

    /// Stats for a floor; floors outside the tower report as empty.
    pub fn get_or_empty(&self, floor: i32) -> FloorStats {
        self.floors
            .get(&floor)
            .copied()
            .unwrap_or_else(|| FloorStats::empty(floor))
    }

    pub fn dominant_status(&self, floor: i32) -> DominantStatus {
        self.get_or_empty(floor).dominant_status()
    }

    /// Floors ascending.
    pub fn iter(&self) -> impl Iterator<Item = &FloorStats> {
        self.floors.values()
    }
}
