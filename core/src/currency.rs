//! Display-only currency helpers.
//!
//! Prices are stored in USD. The bolívar figure is a display conversion using a
//! fixed BCV rate; nothing here fetches rates.

/// USD → VES conversion rate shown in the market header.
pub const BCV_RATE: f64 = 36.50;

/// Marketplace commission charged on every published lot.
pub const COMMISSION_RATE: f64 = 0.05;

pub fn to_bolivares(usd: f64) -> f64 {
    usd * BCV_RATE
}

/// Formats `value` the way the es-VE locale does: `.` groups thousands and
/// `,` separates decimals. `format_es_ve(48200.5, 2)` gives `"48.200,50"`.
pub fn format_es_ve(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push(',');
        grouped.push_str(frac);
    }

    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    if value.is_sign_negative() && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}
