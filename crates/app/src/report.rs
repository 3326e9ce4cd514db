//! Default mode: a per-floor hotspot report on stdout.

use std::io::Write;

use bevy::prelude::*;

use inventory::config::TowerConfig;
use inventory::error::InventoryError;
use inventory::floor_stats::FloorStatsTable;
use inventory::inventory::Inventory;
use inventory::pricing::format_price;
use inventory::query_protocol::FloorReport;
use inventory::transform::transform;

/// Report rows for every floor, top floor first, as the facade lists them.
pub fn floor_reports(world: &World) -> Result<Vec<FloorReport>, InventoryError> {
    let config = world.resource::<TowerConfig>();
    let inventory = world.resource::<Inventory>();
    let table = world.resource::<FloorStatsTable>();

    let mut reports = Vec::with_capacity(config.floor_count());
    for floor in config.floors().rev() {
        let units = inventory
            .on_floor(floor)
            .iter()
            .map(|r| transform(config, r))
            .collect::<Result<Vec<_>, _>>()?;
        reports.push(FloorReport::new(table.get_or_empty(floor), &units));
    }
    Ok(reports)
}

fn price_range(report: &FloorReport) -> String {
    match report.price_range {
        Some([lo, hi]) if lo == hi => format_price(lo),
        Some([lo, hi]) => format!("{} - {}", format_price(lo), format_price(hi)),
        None => "-".to_string(),
    }
}

pub fn write_report(world: &World, out: &mut impl Write) -> Result<(), InventoryError> {
    let reports = floor_reports(world)?;
    writeln!(
        out,
        "{:>5}  {:>5}  {:>5}  {:>5}  {:>5}  {:<9}  {:<7}  {}",
        "Floor", "Units", "Avail", "Resv", "Sold", "Status", "Colour", "Prices"
    )?;
    for r in &reports {
        writeln!(
            out,
            "{:>5}  {:>5}  {:>5}  {:>5}  {:>5}  {:<9}  {:<7}  {}",
            r.stats.floor,
            r.stats.total,
            r.stats.available,
            r.stats.reserved,
            r.stats.sold,
            r.status_label,
            r.color,
            price_range(r)
        )?;
    }
    let summary = world.resource::<FloorStatsTable>().summary;
    writeln!(
        out,
        "{} units: {} available, {} reserved, {} sold ({:.0}% absorbed)",
        summary.total,
        summary.available,
        summary.reserved,
        summary.sold,
        summary.absorption() * 100.0
    )?;
    Ok(())
}

pub fn print_report(app: &App) {
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    if let Err(e) = write_report(app.world(), &mut stdout) {
        eprintln!("tower: report failed: {e}");
    }
}
