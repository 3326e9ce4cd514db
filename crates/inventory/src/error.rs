// ---------------------------------------------------------------------------
// InventoryError: typed failures surfaced to callers of the inventory core
// ---------------------------------------------------------------------------

use std::fmt;

use crate::units::UnitLetter;

/// Errors raised when upstream data breaks an inventory invariant, or when a
/// feed cannot be read at all.
///
/// Fail-soft paths (unknown letter during pricing, unmapped floor-plan size,
/// focus requests for floors outside the tower) never produce one of these.
#[derive(Debug)]
pub enum InventoryError {
    /// I/O error while reading a feed file.
    Io(std::io::Error),
    /// The feed was not valid JSON or did not match the row schema.
    Decode(String),
    /// A record names a floor outside the configured range.
    FloorOutOfRange { floor: i32, min: i32, max: i32 },
    /// A record names a unit letter outside the fixed alphabet.
    UnknownUnitLetter(String),
    /// Two records share the same (floor, unit) key.
    DuplicateUnit { floor: i32, unit: UnitLetter },
    /// No record exists for the requested (floor, unit) key.
    UnitNotFound { floor: i32, unit: UnitLetter },
    /// The tower configuration is not self-consistent.
    InvalidConfig(String),
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryError::Io(e) => write!(f, "I/O error: {e}"),
            InventoryError::Decode(msg) => write!(f, "Feed decoding error: {msg}"),
            InventoryError::FloorOutOfRange { floor, min, max } => {
                write!(f, "Floor {floor} is outside the tower range {min}..={max}")
            }
            InventoryError::UnknownUnitLetter(raw) => {
                write!(f, "Unknown unit letter '{raw}'")
            }
            InventoryError::DuplicateUnit { floor, unit } => {
                write!(f, "Duplicate unit {floor}{unit} in inventory")
            }
            InventoryError::UnitNotFound { floor, unit } => {
                write!(f, "Unit {floor}{unit} not found")
            }
            InventoryError::InvalidConfig(msg) => write!(f, "Invalid tower config: {msg}"),
        }
    }
}

impl std::error::Error for InventoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InventoryError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InventoryError {
    fn from(e: std::io::Error) -> Self {
        InventoryError::Io(e)
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(e: serde_json::Error) -> Self {
        InventoryError::Decode(e.to_string())
    }
}
