//! Criterion benchmarks for the inventory core.
//!
//! Benchmarks:
//!   - enrich_all over a full 228-unit tower
//!   - aggregate_all and the content hash that gates it
//!   - facade layout from config
//!   - one headless frame after a status edit (aggregate + focus + animate)
//!
//! Run with: cargo bench -p inventory --features bench --bench inventory_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use inventory::config::TowerConfig;
use inventory::facade::FacadeLayout;
use inventory::floor_stats::{aggregate_all, content_hash};
use inventory::sample::sample_inventory;
use inventory::test_harness::TestTower;
use inventory::transform::enrich_all;
use inventory::units::{UnitLetter, UnitStatus};

// ---------------------------------------------------------------------------
// Benchmark: pure functions
// ---------------------------------------------------------------------------

fn bench_transform_and_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("inventory_pure");
    let config = TowerConfig::default();
    let records = sample_inventory(&config, 42);

    group.bench_function("enrich_all", |b| {
        b.iter(|| black_box(enrich_all(black_box(&config), black_box(&records))));
    });

    group.bench_function("aggregate_all", |b| {
        b.iter(|| black_box(aggregate_all(black_box(&config), black_box(&records))));
    });

    group.bench_function("content_hash", |b| {
        b.iter(|| black_box(content_hash(black_box(&records))));
    });

    group.bench_function("facade_layout", |b| {
        b.iter(|| black_box(FacadeLayout::from_config(black_box(&config))));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: plugin frame
// ---------------------------------------------------------------------------

fn bench_plugin_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("inventory_frame");
    let mut tower = TestTower::new().with_sample(42);
    let mut sold = false;

    // Alternate a status so every frame rebuilds the floor table.
    group.bench_function("status_edit_frame", |b| {
        b.iter(|| {
            sold = !sold;
            let status = if sold {
                UnitStatus::Sold
            } else {
                UnitStatus::Available
            };
            tower.set_status(20, UnitLetter::A, status);
        });
    });

    group.bench_function("idle_frame", |b| {
        b.iter(|| tower.tick(1));
    });

    group.finish();
}

criterion_group!(benches, bench_transform_and_aggregate, bench_plugin_frame);
criterion_main!(benches);
