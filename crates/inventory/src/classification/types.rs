use serde::{Deserialize, Serialize};

/// Floor-plan type of a unit as shown to buyers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    Studio,
    OneBedroom,
    TwoBedroom,
    ThreeBedroom,
    Penthouse,
}

impl UnitType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Studio => "Studio",
            Self::OneBedroom => "1 Bedroom",
            Self::TwoBedroom => "2 Bedroom",
            Self::ThreeBedroom => "3 Bedroom",
            Self::Penthouse => "Penthouse",
        }
    }
}

/// Type label with bedroom and bathroom counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub unit_type: UnitType,
    pub bedrooms: u8,
    pub bathrooms: u8,
}

impl Classification {
    pub const fn new(unit_type: UnitType, bedrooms: u8, bathrooms: u8) -> Self {
        Self {
            unit_type,
            bedrooms,
            bathrooms,
        }
    }
}

/// Compass direction a unit faces, for the compass-dot indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewDirection {
    pub label: &'static str,
    pub degrees: f32,
}

/// Classification plus view, the full answer of [`super::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitProfile {
    pub classification: Classification,
    pub view: ViewDirection,
}
