//! Unit identity and status types shared by every part of the inventory core.
//!
//! A unit is keyed by `(floor, UnitLetter)`. The letter alphabet is fixed
//! (A–F, six units per floor) and maps one-to-one onto 1-based unit numbers,
//! which in turn drive the compass view lookup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

// ---------------------------------------------------------------------------
// UnitLetter
// ---------------------------------------------------------------------------

/// Position of a unit on its floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UnitLetter {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl UnitLetter {
    /// All letters in floor order.
    pub const ALL: [UnitLetter; 6] = [
        UnitLetter::A,
        UnitLetter::B,
        UnitLetter::C,
        UnitLetter::D,
        UnitLetter::E,
        UnitLetter::F,
    ];

    /// Letter used when a label cannot be parsed.
    pub const DEFAULT: UnitLetter = UnitLetter::A;

    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
        }
    }

    /// 1-based unit number (A=1 … F=6).
    pub fn unit_number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// 0-based index into per-letter tables.
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
            Self::E => 4,
            Self::F => 5,
        }
    }

    /// Lenient parse: unknown labels fall back to [`UnitLetter::DEFAULT`].
    pub fn parse_or_default(label: &str) -> Self {
        label.parse().unwrap_or(Self::DEFAULT)
    }
}

impl fmt::Display for UnitLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for UnitLetter {
    type Err = InventoryError;

    /// Strict parse. Accepts a single letter in either case, surrounding
    /// whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            "F" => Ok(Self::F),
            _ => Err(InventoryError::UnknownUnitLetter(s.to_string())),
        }
    }
}

/// Unit number for a raw letter label. Unknown labels map to unit 1.
pub fn unit_number_for_label(label: &str) -> u8 {
    label
        .parse::<UnitLetter>()
        .map(UnitLetter::unit_number)
        .unwrap_or(1)
}

// ---------------------------------------------------------------------------
// UnitStatus
// ---------------------------------------------------------------------------

/// Sales status of a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitStatus {
    #[default]
    Available,
    Reserved,
    Sold,
}

impl UnitStatus {
    pub const ALL: [UnitStatus; 3] = [Self::Available, Self::Reserved, Self::Sold];

    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Reserved => "Reserved",
            Self::Sold => "Sold",
        }
    }

    /// Stable single-byte code, used for content hashing.
    pub fn code(self) -> u8 {
        match self {
            Self::Available => 0,
            Self::Reserved => 1,
            Self::Sold => 2,
        }
    }
}

impl FromStr for UnitStatus {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "reserved" => Ok(Self::Reserved),
            "sold" => Ok(Self::Sold),
            other => Err(InventoryError::Decode(format!("unknown unit status '{other}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// UnitRecord
// ---------------------------------------------------------------------------

/// A persisted unit row, as held by the upstream store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitRecord {
    pub id: String,
    pub floor: i32,
    pub unit: UnitLetter,
    pub size_sqm: u32,
    pub status: UnitStatus,
    pub notes: Option<String>,
    pub updated_at: Option<String>,
    pub updated_by: Option<String>,
}

impl UnitRecord {
    /// Record with no notes or audit fields. The id is derived from the key.
    pub fn new(floor: i32, unit: UnitLetter, size_sqm: u32, status: UnitStatus) -> Self {
        Self {
            id: format!("{floor}{unit}"),
            floor,
            unit,
            size_sqm,
            status,
            notes: None,
            updated_at: None,
            updated_by: None,
        }
    }

    pub fn key(&self) -> (i32, UnitLetter) {
        (self.floor, self.unit)
    }
}
