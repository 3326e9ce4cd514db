//! Apartment-browser filtering and sorting over enriched units.

use serde::{Deserialize, Serialize};

use crate::classification::UnitType;
use crate::transform::EnrichedUnit;
use crate::units::UnitStatus;

/// Browser criteria. Every `None` field matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitFilter {
    pub status: Option<UnitStatus>,
    pub min_floor: Option<i32>,
    pub max_floor: Option<i32>,
    pub bedrooms: Option<u8>,
    pub unit_type: Option<UnitType>,
    pub max_price: Option<u64>,
}

impl UnitFilter {
    pub fn available() -> Self {
        Self {
            status: Some(UnitStatus::Available),
            ..Default::default()
        }
    }

    pub fn matches(&self, unit: &EnrichedUnit) -> bool {
        let floor = unit.record.floor;
        self.status.is_none_or(|s| unit.record.status == s)
            && self.min_floor.is_none_or(|f| floor >= f)
            && self.max_floor.is_none_or(|f| floor <= f)
            && self.bedrooms.is_none_or(|b| unit.classification.bedrooms == b)
            && self.unit_type.is_none_or(|t| unit.classification.unit_type == t)
            && self.max_price.is_none_or(|p| unit.price <= p)
    }

    pub fn apply<'a>(&self, units: &'a [EnrichedUnit]) -> Vec<&'a EnrichedUnit> {
        units.iter().filter(|u| self.matches(u)).collect()
    }
}

/// Ordering options for the browser list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Floor then unit letter, the feed order.
    #[default]
    Floor,
    PriceAsc,
    PriceDesc,
    SizeDesc,
}

pub fn sort_units(units: &mut [&EnrichedUnit], key: SortKey) {
    match key {
        SortKey::Floor => units.sort_by_key(|u| u.record.key()),
        SortKey::PriceAsc => units.sort_by_key(|u| (u.price, u.record.key())),
        SortKey::PriceDesc => {
            units.sort_by(|a, b| b.price.cmp(&a.price).then(a.record.key().cmp(&b.record.key())))
        }
        SortKey::SizeDesc => units.sort_by(|a, b| {
            b.record
                .size_sqm
                .cmp(&a.record.size_sqm)
                .then(a.record.key().cmp(&b.record.key()))
        }),
    }
}
