//! Headless `--query` mode: a blocking loop that reads JSON commands from
//! stdin and writes JSON responses to stdout.
//!
//! Each stdin line is a JSON object with a `"cmd"` discriminator. Each stdout
//! line is a JSON response with `"protocol_version"` and `"type"` fields. See
//! [`inventory::query_protocol`] for the schema. Logs go to stderr.

use std::io::{BufRead, Write};

use bevy::prelude::*;

use inventory::config::TowerConfig;
use inventory::error::InventoryError;
use inventory::facade::{focus_transform, FacadeLayout, FacadeView, FloorSelection};
use inventory::filter::sort_units;
use inventory::floor_stats::FloorStatsTable;
use inventory::inventory::Inventory;
use inventory::query_protocol::{
    make_response, FloorReport, QueryCommand, QueryResponse, ResponsePayload, PROTOCOL_VERSION,
};
use inventory::transform::{transform, EnrichedUnit};

use crate::report::floor_reports;

/// Frames `select` may run while waiting for the zoom to settle.
const MAX_SELECT_FRAMES: u32 = 600;

pub fn run_query_mode(app: &mut App) {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    let (floors, units) = {
        let world = app.world();
        (
            world.resource::<TowerConfig>().floor_count(),
            world.resource::<Inventory>().len(),
        )
    };
    write_response(&mut stdout, &make_response(ResponsePayload::Ready { floors, units }));
    eprintln!("tower query mode v{PROTOCOL_VERSION} ready, waiting for commands on stdin");

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("stdin read error: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<QueryCommand>(&line) {
            Ok(cmd) => process_command(cmd, app),
            Err(e) => make_response(ResponsePayload::Error {
                message: format!("Parse error: {e}"),
            }),
        };
        let is_goodbye = matches!(response.payload, ResponsePayload::Goodbye);
        write_response(&mut stdout, &response);
        if is_goodbye {
            break;
        }
    }

    eprintln!("tower query mode shutting down");
}

fn write_response(out: &mut impl Write, response: &QueryResponse) {
    match serde_json::to_string(response) {
        Ok(json) => {
            let _ = writeln!(out, "{json}");
            let _ = out.flush();
        }
        Err(e) => eprintln!("response encoding error: {e}"),
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

pub fn process_command(cmd: QueryCommand, app: &mut App) -> QueryResponse {
    match dispatch(cmd, app) {
        Ok(payload) => make_response(payload),
        Err(e) => make_response(ResponsePayload::Error {
            message: e.to_string(),
        }),
    }
}

fn out_of_range(config: &TowerConfig, floor: i32) -> InventoryError {
    InventoryError::FloorOutOfRange {
        floor,
        min: config.min_floor,
        max: config.max_floor,
    }
}

fn enriched(world: &World) -> Result<Vec<EnrichedUnit>, InventoryError> {
    let config = world.resource::<TowerConfig>();
    world.resource::<Inventory>().enriched(config)
}

fn dispatch(cmd: QueryCommand, app: &mut App) -> Result<ResponsePayload, InventoryError> {
    match cmd {
        QueryCommand::Summary => {
            let summary = app.world().resource::<FloorStatsTable>().summary;
            Ok(ResponsePayload::Summary { summary })
        }

        QueryCommand::Floor { floor } => {
            let world = app.world();
            let config = world.resource::<TowerConfig>();
            if !config.contains_floor(floor) {
                return Err(out_of_range(config, floor));
            }
            let units = world
                .resource::<Inventory>()
                .on_floor(floor)
                .iter()
                .map(|r| transform(config, r))
                .collect::<Result<Vec<_>, _>>()?;
            let stats = world.resource::<FloorStatsTable>().get_or_empty(floor);
            Ok(ResponsePayload::Floor {
                report: FloorReport::new(stats, &units),
                units,
            })
        }

        QueryCommand::Floors => Ok(ResponsePayload::Floors {
            floors: floor_reports(app.world())?,
        }),

        QueryCommand::Unit { floor, unit } => {
            let world = app.world();
            let config = world.resource::<TowerConfig>();
            let record = world
                .resource::<Inventory>()
                .get(floor, unit)
                .ok_or(InventoryError::UnitNotFound { floor, unit })?;
            Ok(ResponsePayload::Unit {
                unit: transform(config, record)?,
            })
        }

        QueryCommand::Units { filter, sort } => {
            let all = enriched(app.world())?;
            let mut hits = filter.apply(&all);
            sort_units(&mut hits, sort);
            let units: Vec<EnrichedUnit> = hits.into_iter().cloned().collect();
            Ok(ResponsePayload::Units {
                count: units.len(),
                units,
            })
        }

        // Fail-soft: floors outside the tower report the identity transform.
        QueryCommand::Focus { floor } => {
            let world = app.world();
            let transform = focus_transform(
                world.resource::<TowerConfig>(),
                world.resource::<FacadeLayout>(),
                Some(floor),
            );
            Ok(ResponsePayload::Focus { floor, transform })
        }

        QueryCommand::Geometry { floor } => {
            let world = app.world();
            let config = world.resource::<TowerConfig>();
            let geometry = world
                .resource::<FacadeLayout>()
                .geometry(floor)
                .ok_or_else(|| out_of_range(config, floor))?;
            Ok(ResponsePayload::Geometry { floor, geometry })
        }

        QueryCommand::Select { floor } => {
            app.world_mut().resource_mut::<FloorSelection>().floor = floor;
            app.update();
            let mut frames = 1;
            while !app.world().resource::<FacadeView>().is_settled() && frames < MAX_SELECT_FRAMES {
                app.update();
                frames += 1;
            }
            debug!("query: selection {floor:?} settled after {frames} frames");
            Ok(ResponsePayload::Selected {
                floor,
                view: app.world().resource::<FacadeView>().current,
            })
        }

        QueryCommand::SetStatus {
            floor,
            unit,
            status,
            actor,
        } => {
            app.world_mut()
                .resource_mut::<Inventory>()
                .set_status(floor, unit, status, actor.as_deref())?;
            app.update();

            let world = app.world();
            let config = world.resource::<TowerConfig>();
            let record = world
                .resource::<Inventory>()
                .get(floor, unit)
                .ok_or(InventoryError::UnitNotFound { floor, unit })?;
            Ok(ResponsePayload::StatusUpdated {
                unit: transform(config, record)?,
                floor_status: world.resource::<FloorStatsTable>().dominant_status(floor),
            })
        }

        QueryCommand::Quit => Ok(ResponsePayload::Goodbye),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory::facade::FacadeTransform;
    use inventory::floor_stats::DominantStatus;
    use inventory::sample::sample_inventory;
    use inventory::units::{UnitLetter, UnitStatus};

    use crate::install_inventory;

    fn sample_app() -> App {
        let config = TowerConfig::default();
        let inventory = Inventory::from_records(&config, sample_inventory(&config, 12)).unwrap();
        let mut app = App::new();
        install_inventory(&mut app, config, inventory);
        app
    }

    fn run(app: &mut App, json: &str) -> serde_json::Value {
        let cmd: QueryCommand = serde_json::from_str(json).unwrap();
        let response = process_command(cmd, app);
        serde_json::to_value(&response).unwrap()
    }

    #[test]
    fn summary_counts_every_unit() {
        let mut app = sample_app();
        let value = run(&mut app, r#"{"cmd":"summary"}"#);
        assert_eq!(value["type"], "summary");
        assert_eq!(value["protocol_version"], PROTOCOL_VERSION);
        assert_eq!(value["summary"]["total"], 228);
    }

    #[test]
    fn floor_lists_six_units_with_prices() {
        let mut app = sample_app();
        let value = run(&mut app, r#"{"cmd":"floor","floor":20}"#);
        assert_eq!(value["type"], "floor");
        assert_eq!(value["units"].as_array().unwrap().len(), 6);
        assert_eq!(value["units"][0]["price"], 359_800);
        assert_eq!(value["report"]["total"], 6);
    }

    #[test]
    fn floor_outside_tower_is_an_error() {
        let mut app = sample_app();
        let value = run(&mut app, r#"{"cmd":"floor","floor":50}"#);
        assert_eq!(value["type"], "error");
        assert!(value["message"].as_str().unwrap().contains("50"));
        let value = run(&mut app, r#"{"cmd":"geometry","floor":3}"#);
        assert_eq!(value["type"], "error");
    }

    #[test]
    fn floors_come_top_first() {
        let mut app = sample_app();
        let value = run(&mut app, r#"{"cmd":"floors"}"#);
        let floors = value["floors"].as_array().unwrap();
        assert_eq!(floors.len(), 38);
        assert_eq!(floors[0]["floor"], 44);
    }

    #[test]
    fn unit_lookup_and_missing_unit() {
        let mut app = sample_app();
        let value = run(&mut app, r#"{"cmd":"unit","floor":44,"unit":"A"}"#);
        assert_eq!(value["unit"]["id"], "44A");
        assert_eq!(value["unit"]["classification"]["unit_type"], "Penthouse");

        let mut empty = App::new();
        install_inventory(&mut empty, TowerConfig::default(), Inventory::default());
        let value = run(&mut empty, r#"{"cmd":"unit","floor":44,"unit":"A"}"#);
        assert_eq!(value["type"], "error");
    }

    #[test]
    fn units_filter_and_sort() {
        let mut app = sample_app();
        let value = run(
            &mut app,
            r#"{"cmd":"units","filter":{"min_floor":38},"sort":"price_desc"}"#,
        );
        let units = value["units"].as_array().unwrap();
        assert_eq!(value["count"], 42);
        assert_eq!(units.len(), 42);
        let prices: Vec<u64> = units.iter().map(|u| u["price"].as_u64().unwrap()).collect();
        assert!(prices.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn focus_is_fail_soft() {
        let mut app = sample_app();
        let value = run(&mut app, r#"{"cmd":"focus","floor":99}"#);
        assert_eq!(value["type"], "focus");
        assert_eq!(value["transform"]["scale"], 1.0);
        assert_eq!(value["transform"]["offset_y"], 0.0);
    }

    #[test]
    fn select_runs_the_zoom_to_completion() {
        let mut app = sample_app();
        let cmd = QueryCommand::Select { floor: Some(30) };
        let response = process_command(cmd, &mut app);
        let world = app.world();
        let expected = focus_transform(
            world.resource::<TowerConfig>(),
            world.resource::<FacadeLayout>(),
            Some(30),
        );
        match response.payload {
            ResponsePayload::Selected { floor, view } => {
                assert_eq!(floor, Some(30));
                assert_eq!(view, expected);
            }
            other => panic!("expected Selected, got {other:?}"),
        }

        let response = process_command(QueryCommand::Select { floor: None }, &mut app);
        match response.payload {
            ResponsePayload::Selected { floor, view } => {
                assert_eq!(floor, None);
                assert_eq!(view, FacadeTransform::IDENTITY);
            }
            other => panic!("expected Selected, got {other:?}"),
        }
    }

    #[test]
    fn set_status_updates_the_floor() {
        let mut app = sample_app();
        for letter in UnitLetter::ALL {
            let cmd = QueryCommand::SetStatus {
                floor: 9,
                unit: letter,
                status: UnitStatus::Sold,
                actor: Some("desk".into()),
            };
            process_command(cmd, &mut app);
        }
        let table = app.world().resource::<FloorStatsTable>();
        assert_eq!(table.dominant_status(9), DominantStatus::Sold);
        let record = app.world().resource::<Inventory>().get(9, UnitLetter::C).unwrap();
        assert_eq!(record.updated_by.as_deref(), Some("desk"));
    }

    #[test]
    fn quit_says_goodbye() {
        let mut app = sample_app();
        let value = run(&mut app, r#"{"cmd":"quit"}"#);
        assert_eq!(value["type"], "goodbye");
    }
}
