//! Money utilities
//!
//! Monetary amounts travel as `f64` on the wire; every sum and rounding step
//! goes through `Decimal` internally so float error cannot accumulate into
//! stored totals.

use rust_decimal::prelude::*;

/// Fixed decimal places for monetary values
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Format an amount as a dollar string with thousands separators.
///
/// Rounds half away from zero to `precision` decimal places, then groups
/// the integer part with `,` every three digits. The sign sits between the
/// `$` and the digits, matching the display convention of the order pages.
///
/// # Examples
///
/// ```
/// use shared::util::format_currency;
///
/// assert_eq!(format_currency(1234.5, 2), "$1,234.50");
/// assert_eq!(format_currency(0.0, 2), "$0.00");
/// assert_eq!(format_currency(999999.999, 2), "$1,000,000.00");
/// ```
pub fn format_currency(amount: f64, precision: u32) -> String {
    let rounded = to_decimal(amount)
        .round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (digits.as_str(), ""),
    };

    // round_dp never pads the scale, so short fractions are zero-filled here
    let mut fraction = frac_part.to_string();
    while (fraction.len() as u32) < precision {
        fraction.push('0');
    }

    if precision == 0 {
        format!("${}{}", sign, group_thousands(int_part))
    } else {
        format!("${}{}.{}", sign, group_thousands(int_part), fraction)
    }
}

/// Insert `,` separators every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
