use std::process::ExitCode;
use std::time::Duration;

use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use clap::Parser;

use inventory::config::TowerConfig;
use inventory::error::InventoryError;
use inventory::feed::load_feed_file;
use inventory::inventory::Inventory;
use inventory::sample::sample_inventory;
use inventory::InventoryPlugin;

mod cli;
mod query_mode;
mod report;

use cli::CliArgs;

/// Fixed frame length so the facade animation is deterministic headless.
const FRAME: Duration = Duration::from_micros(16_667);

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let mut app = match build_app(&args) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("tower: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.query {
        query_mode::run_query_mode(&mut app);
    } else {
        report::print_report(&app);
    }
    ExitCode::SUCCESS
}

/// Headless app with the inventory loaded and one frame run, so every
/// derived resource is populated.
fn build_app(args: &CliArgs) -> Result<App, InventoryError> {
    let config = TowerConfig::default();
    config.validate()?;

    let mut app = App::new();
    // Installed first so feed loading is logged; output goes to stderr.
    app.add_plugins(LogPlugin {
        level: if args.verbose { Level::DEBUG } else { Level::INFO },
        ..default()
    });
    app.insert_resource(args.clone());
    let inventory = load_inventory(args, &config)?;
    install_inventory(&mut app, config, inventory);
    Ok(app)
}

pub(crate) fn install_inventory(app: &mut App, config: TowerConfig, inventory: Inventory) {
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.insert_resource(config);
    app.add_plugins(InventoryPlugin);
    app.insert_resource(inventory);
    app.update();
}

fn load_inventory(args: &CliArgs, config: &TowerConfig) -> Result<Inventory, InventoryError> {
    match &args.feed {
        Some(path) => load_feed_file(config, path),
        None => {
            let seed = args.sample_seed();
            info!("tower: generating sample inventory with seed {seed}");
            Inventory::from_records(config, sample_inventory(config, seed))
        }
    }
}
