//! Amount parsing, rounding and display.
//!
//! Amounts come straight from a text field that is edited live, so parsing
//! never fails: whatever the user has typed so far, the digits in it are the
//! amount and an input with no digits is zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Thousands separator used when displaying amounts.
pub const GROUP_SEPARATOR: char = ' ';

/// Parse an amount, keeping only the ASCII digits of `input`.
///
/// Spaces, currency symbols, signs and decimal points are all discarded, so
/// `"40 000 ₽"` and `"40000"` are the same amount and `"1.5"` reads as `15`.
/// Returns zero when there are no digits, or when the digits do not fit in a
/// `Decimal` (more than 28 significant digits).
pub fn parse_amount(input: &str) -> Decimal {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Decimal::ZERO;
    }
    match Decimal::from_str_exact(&digits) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("amount {:?} out of range, using 0: {}", input, err);
            Decimal::ZERO
        }
    }
}

/// Round to whole currency units, half away from zero.
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a whole amount with grouped thousands and no decimal places.
pub fn format_grouped(value: Decimal) -> String {
    let whole = round_whole(value);
    let digits = whole.abs().trunc().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole.is_sign_negative() && !whole.is_zero() {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}
