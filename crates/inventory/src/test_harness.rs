//! # TestTower: headless test harness for the inventory plugin
//!
//! Wraps `bevy::app::App` + `MinimalPlugins` + [`InventoryPlugin`] with a
//! fluent builder. Time advances by a fixed 1/60 s per frame so animation
//! tests are deterministic.

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::config::TowerConfig;
use crate::facade::{FacadeLayout, FacadeTransform, FacadeView, FloorSelection};
use crate::floor_stats::{DominantStatus, FloorStats, FloorStatsTable};
use crate::inventory::Inventory;
use crate::sample::sample_inventory;
use crate::units::{UnitLetter, UnitRecord, UnitStatus};
use crate::InventoryPlugin;

/// Simulated frame length.
pub const FRAME: Duration = Duration::from_micros(16_667);

/// Upper bound on frames [`TestTower::settle`] will run.
const MAX_SETTLE_FRAMES: u32 = 1_000;

pub struct TestTower {
    app: App,
}

impl Default for TestTower {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTower {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Empty tower with the default configuration.
    pub fn new() -> Self {
        Self::with_config(TowerConfig::default())
    }

    /// Empty tower with a custom configuration, inserted before the plugin.
    pub fn with_config(config: TowerConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
        app.insert_resource(config);
        app.add_plugins(InventoryPlugin);
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Setup (builder pattern, consumes and returns Self)
    // -----------------------------------------------------------------------

    /// Load the seeded sample tower and run one frame.
    pub fn with_sample(self, seed: u64) -> Self {
        let records = sample_inventory(self.config(), seed);
        self.with_records(records)
    }

    /// Replace the inventory with `records` and run one frame.
    ///
    /// Panics if the records violate the inventory invariants.
    pub fn with_records(mut self, records: Vec<UnitRecord>) -> Self {
        let inventory = Inventory::from_records(self.config(), records)
            .expect("test records must form a valid inventory");
        self.app.insert_resource(inventory);
        self.app.update();
        self
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Run `n` frames.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    /// Run frames until the facade view reaches its target. Returns the
    /// number of frames it took.
    pub fn settle(&mut self) -> u32 {
        let mut frames = 0;
        while frames < MAX_SETTLE_FRAMES {
            self.app.update();
            frames += 1;
            if self.view().is_settled() {
                return frames;
            }
        }
        panic!("facade view did not settle within {MAX_SETTLE_FRAMES} frames");
    }

    /// Change the floor selection and run one frame.
    pub fn select_floor(&mut self, floor: Option<i32>) {
        self.app.world_mut().resource_mut::<FloorSelection>().floor = floor;
        self.app.update();
    }

    /// Admin status edit followed by one frame.
    pub fn set_status(&mut self, floor: i32, unit: UnitLetter, status: UnitStatus) {
        self.app
            .world_mut()
            .resource_mut::<Inventory>()
            .set_status(floor, unit, status, Some("test"))
            .expect("unit must exist");
        self.app.update();
    }

    /// Replace the tower configuration and run one frame.
    pub fn set_config(&mut self, config: TowerConfig) {
        self.app.insert_resource(config);
        self.app.update();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn config(&self) -> &TowerConfig {
        self.resource::<TowerConfig>()
    }

    pub fn inventory(&self) -> &Inventory {
        self.resource::<Inventory>()
    }

    pub fn table(&self) -> &FloorStatsTable {
        self.resource::<FloorStatsTable>()
    }

    pub fn layout(&self) -> &FacadeLayout {
        self.resource::<FacadeLayout>()
    }

    pub fn view(&self) -> &FacadeView {
        self.resource::<FacadeView>()
    }

    pub fn current_view(&self) -> FacadeTransform {
        self.view().current
    }

    pub fn floor_stats(&self, floor: i32) -> FloorStats {
        self.table().get_or_empty(floor)
    }

    pub fn dominant_status(&self, floor: i32) -> DominantStatus {
        self.table().dominant_status(floor)
    }

    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    pub fn assert_dominant(&self, floor: i32, expected: DominantStatus) {
        let actual = self.dominant_status(floor);
        assert_eq!(
            actual, expected,
            "floor {floor}: expected {expected:?}, got {actual:?} ({:?})",
            self.floor_stats(floor)
        );
    }

    pub fn assert_view_settled(&self) {
        let view = self.view();
        assert!(
            view.is_settled(),
            "view not settled: current {:?}, target {:?}",
            view.current,
            view.target
        );
    }
}
