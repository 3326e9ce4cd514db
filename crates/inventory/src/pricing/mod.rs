mod format;
mod model;

pub use format::{format_price, format_price_full, MILLION_THRESHOLD};
pub use model::{effective_floor, price, price_for_label, price_per_sqm};
