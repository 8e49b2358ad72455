//! Display formatting for figures shown on the dashboard.

use rust_decimal::{Decimal, RoundingStrategy};

/// Fraction digits kept by [`group_thousands`], matching en-US locale output.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Format a number with comma thousands separators (`12540` → `"12,540"`).
///
/// Up to three fraction digits are kept, rounded half away from zero, with
/// trailing zeros dropped.
#[must_use]
pub fn group_thousands(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

/// Format an amount as dollars with two decimals (`129.5` → `"$129.50"`).
#[must_use]
pub fn dollars(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}
