/// Prices at or above this are shown in millions.
pub const MILLION_THRESHOLD: u64 = 1_000_000;

/// Compact price label for tooltips and cards: `"$1.2M"` from one million up
/// (one decimal), `"$360K"` below (nearest thousand).
pub fn format_price(price: u64) -> String {
    if price >= MILLION_THRESHOLD {
        let tenths = (price + 50_000) / 100_000;
        format!("${}.{}M", tenths / 10, tenths % 10)
    } else {
        format!("${}K", (price + 500) / 1_000)
    }
}

/// Full price with thousands separators, e.g. `"$359,800"`.
pub fn format_price_full(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
