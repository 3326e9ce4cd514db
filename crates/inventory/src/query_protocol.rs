//! JSON-lines query protocol for the `tower --query` headless mode.
//!
//! Each stdin line is one [`QueryCommand`] with a `cmd` discriminator. Each
//! stdout line is a [`QueryResponse`] carrying `protocol_version` and a `type`
//! tag. The types live in the library so they can be tested without the
//! binary; the I/O loop is in `crates/app/src/query_mode.rs`.

use serde::{Deserialize, Serialize};

use crate::facade::{FacadeTransform, FloorGeometry};
use crate::filter::{SortKey, UnitFilter};
use crate::floor_stats::{status_hex, DominantStatus, FloorStats, InventorySummary};
use crate::transform::EnrichedUnit;
use crate::units::{UnitLetter, UnitStatus};

// ---------------------------------------------------------------------------
// Commands (stdin)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(tag = "cmd")]
pub enum QueryCommand {
    /// Tower-wide counts.
    #[serde(rename = "summary")]
    Summary,

    /// Stats and enriched units for one floor.
    #[serde(rename = "floor")]
    Floor { floor: i32 },

    /// One report row per floor, top floor first.
    #[serde(rename = "floors")]
    Floors,

    #[serde(rename = "unit")]
    Unit { floor: i32, unit: UnitLetter },

    /// Apartment-browser listing.
    #[serde(rename = "units")]
    Units {
        #[serde(default)]
        filter: UnitFilter,
        #[serde(default)]
        sort: SortKey,
    },

    /// Zoom transform for a floor without changing the selection.
    #[serde(rename = "focus")]
    Focus { floor: i32 },

    #[serde(rename = "geometry")]
    Geometry { floor: i32 },

    /// Select a floor (or clear the selection with `null`) and run the
    /// view animation until it settles.
    #[serde(rename = "select")]
    Select {
        #[serde(default)]
        floor: Option<i32>,
    },

    /// Record a sale or reservation. Last write wins.
    #[serde(rename = "set_status")]
    SetStatus {
        floor: i32,
        unit: UnitLetter,
        status: UnitStatus,
        #[serde(default)]
        actor: Option<String>,
    },

    #[serde(rename = "quit")]
    Quit,
}

// ---------------------------------------------------------------------------
// Responses (stdout)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub protocol_version: u32,
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

/// Hotspot row for one floor, as the facade and the report show it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloorReport {
    #[serde(flatten)]
    pub stats: FloorStats,
    pub status: DominantStatus,
    pub status_label: &'static str,
    pub color: String,
    /// Cheapest and dearest unit on the floor, if it has any.
    pub price_range: Option<[u64; 2]>,
}

impl FloorReport {
    /// `units` should be the enriched units of `stats.floor`.
    pub fn new(stats: FloorStats, units: &[EnrichedUnit]) -> Self {
        let status = stats.dominant_status();
        let price_range = units
            .iter()
            .map(|u| u.price)
            .fold(None, |range: Option<[u64; 2]>, p| match range {
                None => Some([p, p]),
                Some([lo, hi]) => Some([lo.min(p), hi.max(p)]),
            });
        Self {
            stats,
            status,
            status_label: status.label(),
            color: status_hex(status),
            price_range,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ResponsePayload {
    #[serde(rename = "ready")]
    Ready { floors: usize, units: usize },

    #[serde(rename = "summary")]
    Summary { summary: InventorySummary },

    #[serde(rename = "floor")]
    Floor {
        report: FloorReport,
        units: Vec<EnrichedUnit>,
    },

    #[serde(rename = "floors")]
    Floors { floors: Vec<FloorReport> },

    #[serde(rename = "unit")]
    Unit { unit: EnrichedUnit },

    #[serde(rename = "units")]
    Units {
        count: usize,
        units: Vec<EnrichedUnit>,
    },

    #[serde(rename = "focus")]
    Focus {
        floor: i32,
        transform: FacadeTransform,
    },

    #[serde(rename = "geometry")]
    Geometry {
        floor: i32,
        geometry: FloorGeometry,
    },

    /// The view after the animation settled.
    #[serde(rename = "selected")]
    Selected {
        floor: Option<i32>,
        view: FacadeTransform,
    },

    #[serde(rename = "status_updated")]
    StatusUpdated {
        unit: EnrichedUnit,
        floor_status: DominantStatus,
    },

    #[serde(rename = "error")]
    Error { message: String },

    #[serde(rename = "goodbye")]
    Goodbye,
}

/// Bump when the command or response schema changes.
pub const PROTOCOL_VERSION: u32 = 1;

pub fn make_response(payload: ResponsePayload) -> QueryResponse {
    QueryResponse {
        protocol_version: PROTOCOL_VERSION,
        payload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TowerConfig;
    use crate::floor_stats::aggregate;
    use crate::sample::sample_inventory;
    use crate::transform::enrich_all;

    #[test]
    fn deserialize_simple_commands() {
        let cmd: QueryCommand = serde_json::from_str(r#"{"cmd":"summary"}"#).unwrap();
        assert!(matches!(cmd, QueryCommand::Summary));
        let cmd: QueryCommand = serde_json::from_str(r#"{"cmd":"floors"}"#).unwrap();
        assert!(matches!(cmd, QueryCommand::Floors));
        let cmd: QueryCommand = serde_json::from_str(r#"{"cmd":"quit"}"#).unwrap();
        assert!(matches!(cmd, QueryCommand::Quit));
    }

    #[test]
    fn deserialize_unit_command() {
        let cmd: QueryCommand =
            serde_json::from_str(r#"{"cmd":"unit","floor":20,"unit":"C"}"#).unwrap();
        if let QueryCommand::Unit { floor, unit } = cmd {
            assert_eq!(floor, 20);
            assert_eq!(unit, UnitLetter::C);
        } else {
            panic!("expected Unit");
        }
    }

    #[test]
    fn deserialize_units_command_defaults() {
        let cmd: QueryCommand = serde_json::from_str(r#"{"cmd":"units"}"#).unwrap();
        if let QueryCommand::Units { filter, sort } = cmd {
            assert_eq!(filter, UnitFilter::default());
            assert_eq!(sort, SortKey::Floor);
        } else {
            panic!("expected Units");
        }

        let json = r#"{"cmd":"units","filter":{"status":"available","max_floor":20},"sort":"price_desc"}"#;
        let cmd: QueryCommand = serde_json::from_str(json).unwrap();
        if let QueryCommand::Units { filter, sort } = cmd {
            assert_eq!(filter.status, Some(UnitStatus::Available));
            assert_eq!(filter.max_floor, Some(20));
            assert_eq!(sort, SortKey::PriceDesc);
        } else {
            panic!("expected Units");
        }
    }

    #[test]
    fn deserialize_select_and_clear() {
        let cmd: QueryCommand = serde_json::from_str(r#"{"cmd":"select","floor":30}"#).unwrap();
        assert!(matches!(cmd, QueryCommand::Select { floor: Some(30) }));
        let cmd: QueryCommand = serde_json::from_str(r#"{"cmd":"select","floor":null}"#).unwrap();
        assert!(matches!(cmd, QueryCommand::Select { floor: None }));
        let cmd: QueryCommand = serde_json::from_str(r#"{"cmd":"select"}"#).unwrap();
        assert!(matches!(cmd, QueryCommand::Select { floor: None }));
    }

    #[test]
    fn deserialize_set_status_command() {
        let json = r#"{"cmd":"set_status","floor":12,"unit":"F","status":"sold","actor":"desk"}"#;
        let cmd: QueryCommand = serde_json::from_str(json).unwrap();
        if let QueryCommand::SetStatus {
            floor,
            unit,
            status,
            actor,
        } = cmd
        {
            assert_eq!((floor, unit, status), (12, UnitLetter::F, UnitStatus::Sold));
            assert_eq!(actor.as_deref(), Some("desk"));
        } else {
            panic!("expected SetStatus");
        }
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(serde_json::from_str::<QueryCommand>(r#"{"cmd":"teleport"}"#).is_err());
        assert!(serde_json::from_str::<QueryCommand>(r#"{"cmd":"floor"}"#).is_err());
    }

    #[test]
    fn response_carries_version_and_type() {
        let resp = make_response(ResponsePayload::Goodbye);
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["protocol_version"], PROTOCOL_VERSION);
        assert_eq!(value["type"], "goodbye");

        let resp = make_response(ResponsePayload::Error {
            message: "nope".into(),
        });
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["type"], "error");
        assert_eq!(value["message"], "nope");
    }

    #[test]
    fn floor_report_has_price_range_and_colour() {
        let config = TowerConfig::default();
        let records = sample_inventory(&config, 4);
        let units = enrich_all(&config, &records).unwrap();
        let on_floor: Vec<EnrichedUnit> = units.into_iter().filter(|u| u.floor() == 20).collect();
        let report = FloorReport::new(aggregate(&records, 20), &on_floor);
        assert_eq!(report.stats.total, 6);
        let [lo, hi] = report.price_range.unwrap();
        assert_eq!(lo, on_floor.iter().map(|u| u.price).min().unwrap());
        assert_eq!(hi, on_floor.iter().map(|u| u.price).max().unwrap());
        assert!(report.color.starts_with('#'));

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["floor"], 20);
        assert_eq!(value["total"], 6);
    }

    #[test]
    fn empty_floor_report() {
        let report = FloorReport::new(FloorStats::empty(9), &[]);
        assert_eq!(report.status, DominantStatus::Empty);
        assert_eq!(report.status_label, "No Data");
        assert_eq!(report.price_range, None);
    }
}
