use bevy::prelude::*;

use crate::error::InventoryError;
use crate::units::UnitLetter;

/// Lowest residential floor.
pub const MIN_FLOOR: i32 = 7;
/// Highest residential floor.
pub const MAX_FLOOR: i32 = 44;
/// First floor of the upper (penthouse) band. Floors below it are standard.
pub const PENTHOUSE_FLOOR: i32 = 38;

/// Price added per floor above the first floor of a band.
pub const FLOOR_PREMIUM: u64 = 1_000;

/// Base price per unit letter (A–F) on the first standard floor.
pub const STANDARD_BASE_PRICES: [u64; 6] = [346_800, 289_500, 231_400, 236_900, 295_200, 352_600];

/// Base price per unit letter (A–F) on the first upper floor.
pub const UPPER_BASE_PRICES: [u64; 6] = [612_000, 578_500, 545_000, 549_500, 583_000, 618_500];

/// The official price list quotes the top floor at the rate of floor 41.
pub const TOP_FLOOR_PRICED_AS: i32 = 41;

/// Facade overlay box, in percent of the facade image.
pub const OVERLAY_TOP: f32 = 8.0;
pub const OVERLAY_BOTTOM: f32 = 86.0;
pub const OVERLAY_LEFT: f32 = 34.0;
pub const OVERLAY_RIGHT: f32 = 66.0;

/// Scale applied to the facade image when drilling into a floor.
pub const ZOOM_MULTIPLIER: f32 = 2.2;
/// Vertical reference the selected floor is centred on, in percent.
pub const VIEW_CENTER: f32 = 50.0;

/// Rectangle on the facade photo that floor bands are laid out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayBox {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for OverlayBox {
    fn default() -> Self {
        Self {
            top: OVERLAY_TOP,
            bottom: OVERLAY_BOTTOM,
            left: OVERLAY_LEFT,
            right: OVERLAY_RIGHT,
        }
    }
}

impl OverlayBox {
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    fn is_valid(&self) -> bool {
        let in_range = |v: f32| (0.0..=100.0).contains(&v);
        in_range(self.top)
            && in_range(self.bottom)
            && in_range(self.left)
            && in_range(self.right)
            && self.top < self.bottom
            && self.left < self.right
    }
}

/// A single floor whose price is quoted as if it were another floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceOverride {
    pub floor: i32,
    pub priced_as: i32,
}

/// Pricing and classification regime a floor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloorBand {
    /// `[min_floor, penthouse_floor)`
    Standard,
    /// `[penthouse_floor, max_floor]`
    Upper,
}

/// Every tunable of the inventory core, passed by reference into the pure
/// functions and held as a resource by [`crate::InventoryPlugin`].
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TowerConfig {
    pub min_floor: i32,
    pub max_floor: i32,
    pub penthouse_floor: i32,
    pub floor_premium: u64,
    pub standard_base_prices: [u64; 6],
    pub upper_base_prices: [u64; 6],
    pub top_floor_override: Option<PriceOverride>,
    pub overlay: OverlayBox,
    pub zoom_multiplier: f32,
    pub view_center: f32,
}

impl Default for TowerConfig {
    fn default() -> Self {
        Self {
            min_floor: MIN_FLOOR,
            max_floor: MAX_FLOOR,
            penthouse_floor: PENTHOUSE_FLOOR,
            floor_premium: FLOOR_PREMIUM,
            standard_base_prices: STANDARD_BASE_PRICES,
            upper_base_prices: UPPER_BASE_PRICES,
            top_floor_override: Some(PriceOverride {
                floor: MAX_FLOOR,
                priced_as: TOP_FLOOR_PRICED_AS,
            }),
            overlay: OverlayBox::default(),
            zoom_multiplier: ZOOM_MULTIPLIER,
            view_center: VIEW_CENTER,
        }
    }
}

impl TowerConfig {
    /// Number of residential floors, `max - min + 1`.
    pub fn floor_count(&self) -> usize {
        (self.max_floor - self.min_floor + 1).max(0) as usize
    }

    pub fn contains_floor(&self, floor: i32) -> bool {
        (self.min_floor..=self.max_floor).contains(&floor)
    }

    /// Floors in ascending order.
    pub fn floors(&self) -> impl DoubleEndedIterator<Item = i32> {
        self.min_floor..=self.max_floor
    }

    pub fn band_of(&self, floor: i32) -> FloorBand {
        if floor >= self.penthouse_floor {
            FloorBand::Upper
        } else {
            FloorBand::Standard
        }
    }

    /// First floor of a band, where its base prices apply.
    pub fn band_first_floor(&self, band: FloorBand) -> i32 {
        match band {
            FloorBand::Standard => self.min_floor,
            FloorBand::Upper => self.penthouse_floor,
        }
    }

    pub fn base_price(&self, band: FloorBand, letter: UnitLetter) -> u64 {
        match band {
            FloorBand::Standard => self.standard_base_prices[letter.index()],
            FloorBand::Upper => self.upper_base_prices[letter.index()],
        }
    }

    /// Checks that the floor range, band boundary, overlay box and zoom are
    /// coherent.
    pub fn validate(&self) -> Result<(), InventoryError> {
        if self.min_floor > self.max_floor {
            return Err(InventoryError::InvalidConfig(format!(
                "min_floor {} above max_floor {}",
                self.min_floor, self.max_floor
            )));
        }
        if !(self.min_floor..=self.max_floor).contains(&self.penthouse_floor) {
            return Err(InventoryError::InvalidConfig(format!(
                "penthouse_floor {} outside {}..={}",
                self.penthouse_floor, self.min_floor, self.max_floor
            )));
        }
        if let Some(ov) = self.top_floor_override {
            if ov.floor != self.max_floor {
                return Err(InventoryError::InvalidConfig(format!(
                    "price override applies to the top floor {} only, not floor {}",
                    self.max_floor, ov.floor
                )));
            }
            let band = self.band_of(ov.floor);
            let same_band = self.band_of(ov.priced_as) == band;
            if !self.contains_floor(ov.floor) || !self.contains_floor(ov.priced_as) || !same_band {
                return Err(InventoryError::InvalidConfig(format!(
                    "price override {} -> {} must stay inside one band",
                    ov.floor, ov.priced_as
                )));
            }
        }
        if !self.overlay.is_valid() {
            return Err(InventoryError::InvalidConfig(format!(
                "overlay box {:?} must lie in [0, 100] with top < bottom and left < right",
                self.overlay
            )));
        }
        if self.zoom_multiplier <= 1.0 || !self.zoom_multiplier.is_finite() {
            return Err(InventoryError::InvalidConfig(format!(
                "zoom multiplier {} must be greater than 1",
                self.zoom_multiplier
            )));
        }
        Ok(())
    }
}

/// Puts the default tower back when a replaced config fails validation, so
/// later systems never see an inverted floor range or a degenerate overlay.
pub fn reject_invalid_config(mut config: ResMut<TowerConfig>) {
    if !config.is_changed() {
        return;
    }
    if let Err(e) = config.validate() {
        warn!("inventory: rejected config update ({e}), restoring the default tower");
        *config = TowerConfig::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(TowerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_floor_count_and_range() {
        let config = TowerConfig::default();
        assert_eq!(config.floor_count(), 38);
        assert!(config.contains_floor(MIN_FLOOR));
        assert!(config.contains_floor(MAX_FLOOR));
        assert!(!config.contains_floor(MAX_FLOOR + 1));
        assert_eq!(config.floors().count(), config.floor_count());
    }

    #[test]
    fn test_band_boundary() {
        let config = TowerConfig::default();
        assert_eq!(config.band_of(PENTHOUSE_FLOOR - 1), FloorBand::Standard);
        assert_eq!(config.band_of(PENTHOUSE_FLOOR), FloorBand::Upper);
        assert_eq!(config.band_first_floor(FloorBand::Upper), PENTHOUSE_FLOOR);
    }

    #[test]
    fn test_rejects_inverted_range() {
        let config = TowerConfig {
            min_floor: 20,
            max_floor: 10,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(InventoryError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_zoom_not_above_one() {
        let config = TowerConfig {
            zoom_multiplier: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_override_across_bands() {
        let config = TowerConfig {
            top_floor_override: Some(PriceOverride {
                floor: MAX_FLOOR,
                priced_as: PENTHOUSE_FLOOR - 1,
            }),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_override_below_top_floor() {
        let config = TowerConfig {
            top_floor_override: Some(PriceOverride {
                floor: MAX_FLOOR - 1,
                priced_as: TOP_FLOOR_PRICED_AS,
            }),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("top floor"), "{err}");

        let none = TowerConfig {
            top_floor_override: None,
            ..Default::default()
        };
        assert!(none.validate().is_ok());
    }

    #[test]
    fn test_rejects_overlay_outside_image() {
        let config = TowerConfig {
            overlay: OverlayBox {
                top: -5.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
