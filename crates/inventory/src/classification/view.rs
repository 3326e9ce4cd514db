use super::types::ViewDirection;

/// Compass label and bearing per unit number (1..=6).
const VIEWS: [(&str, f32); 6] = [
    ("N", 0.0),
    ("NE", 45.0),
    ("E", 90.0),
    ("SE", 135.0),
    ("S", 180.0),
    ("SW", 225.0),
];

/// Shown for unit numbers with no mapped bearing.
pub const CITY_VIEW: ViewDirection = ViewDirection {
    label: "City",
    degrees: 0.0,
};

pub fn view_for_unit_number(unit_number: u8) -> ViewDirection {
    match unit_number {
        1..=6 => {
            let (label, degrees) = VIEWS[(unit_number - 1) as usize];
            ViewDirection { label, degrees }
        }
        _ => CITY_VIEW,
    }
}
