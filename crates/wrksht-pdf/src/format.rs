//! Display strings for worksheet fields.

use wrksht_core::models::dims::Dims;

/// Text at or under this many bytes is never soft-wrapped.
pub const SOFT_WRAP_LIMIT: usize = 30;

/// `"<w inch> <w fraction> x <h inch> <h fraction>"`. Missing fractions
/// leave their slot empty.
pub fn format_dims(dims: &Dims) -> String {
    format!(
        "{} {} x {} {}",
        dims.width.inch,
        dims.width.fraction(),
        dims.height.inch,
        dims.height.fraction()
    )
}

/// Two decimals with comma-grouped thousands, e.g. `"$1,234.50"`. The sign
/// of a negative amount follows the prefix.
pub fn format_money(value: f64, prefix: &str) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{prefix}{sign}{grouped}.{frac:02}")
}

/// Put each comma-separated item of a long list on its own line.
///
/// Only the length is checked: long text without commas comes back
/// unchanged as a single line.
pub fn soft_wrap(text: &str) -> String {
    if text.len() <= SOFT_WRAP_LIMIT {
        return text.to_string();
    }
    text.split(',').map(str::trim).collect::<Vec<_>>().join("\n")
}
