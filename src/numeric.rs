//! Rounding and formatting applied to every reported value.
//!
//! Values are floored at the fifth decimal of their *exact* binary expansion, so the
//! result only depends on the input bits and never on intermediate float products.

/// Number of decimals kept by [`floor_round`] and printed by [`format_value`].
pub const DECIMALS: usize = 5;

// Enough digits to see past the fifth decimal of any finite f64 whose magnitude
// is not a subnormal, see `remainder_is_zero` for the rest.
const EXPANSION: usize = 64;

/// Floors `value` toward negative infinity at the fifth decimal.
///
/// `1.999999` becomes `1.99999` and `-1.000001` becomes `-1.00001`. Non-finite inputs
/// are returned unchanged so callers can detect them.
pub fn floor_round(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let magnitude = value.abs();
    let expanded = format!("{:.*}", EXPANSION, magnitude);
    let (int_part, frac_part) = expanded.split_once('.').unwrap_or((&expanded, ""));
    let (kept, rest) = frac_part.split_at(DECIMALS.min(frac_part.len()));

    let mut digits: Vec<u8> = int_part.bytes().chain(kept.bytes()).collect();
    let truncated = parse_digits(&digits);

    if value >= 0.0 {
        return truncated;
    }

    if remainder_is_zero(rest, truncated, magnitude) {
        -truncated
    } else {
        increment(&mut digits);
        -parse_digits(&digits)
    }
}

/// Euclidean norm of `v`, floored like any other reported value.
pub fn norm(v: &[f64]) -> f64 {
    floor_round(v.iter().map(|vi| vi * vi).sum::<f64>().sqrt())
}

/// Formats a single value with five decimals.
pub fn format_value(value: f64) -> String {
    format!("{:.*}", DECIMALS, value)
}

/// Formats `values` as five-decimal numbers separated by single spaces.
pub fn format_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format_value(*v))
        .collect::<Vec<_>>()
        .join(" ")
}

fn remainder_is_zero(rest: &str, truncated: f64, magnitude: f64) -> bool {
    // A tiny magnitude can print as all zeros while still being nonzero.
    rest.bytes().all(|b| b == b'0') && truncated == magnitude
}

/// Adds one unit in the last kept decimal, carrying through the integer digits.
fn increment(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

fn parse_digits(digits: &[u8]) -> f64 {
    let split = digits.len() - DECIMALS;
    let text = format!(
        "{}.{}",
        String::from_utf8_lossy(&digits[..split]),
        String::from_utf8_lossy(&digits[split..])
    );
    text.parse().unwrap_or(f64::NAN)
}
