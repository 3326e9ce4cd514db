//! Facade hotspot colours per dominant status.

use bevy::prelude::*;

use super::types::DominantStatus;

/// sRGB bytes per status. Empty floors get a neutral grey so "no data" never
/// reads as sold out.
const STATUS_RGB: [(DominantStatus, [u8; 3]); 4] = [
    (DominantStatus::Available, [51, 179, 107]),
    (DominantStatus::Limited, [237, 166, 46]),
    (DominantStatus::Sold, [204, 56, 56]),
    (DominantStatus::Empty, [140, 143, 148]),
];

/// Hotspot overlay alpha, 0–255.
pub const HOTSPOT_ALPHA: u8 = 90;

fn rgb(status: DominantStatus) -> [u8; 3] {
    STATUS_RGB
        .iter()
        .find(|(s, _)| *s == status)
        .map(|(_, c)| *c)
        .unwrap_or([128, 128, 128])
}

pub fn status_color(status: DominantStatus) -> Color {
    let [r, g, b] = rgb(status);
    Color::srgb_u8(r, g, b)
}

/// Translucent variant for the hotspot fill over the facade photo.
pub fn hotspot_color(status: DominantStatus) -> Color {
    let [r, g, b] = rgb(status);
    Color::srgba_u8(r, g, b, HOTSPOT_ALPHA)
}

/// Hex string for web front ends, e.g. `"#33B36B"`.
pub fn status_hex(status: DominantStatus) -> String {
    let [r, g, b] = rgb(status);
    format!("#{r:02X}{g:02X}{b:02X}")
}
