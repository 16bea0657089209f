use super::amount::{format_grouped, parse_amount, round_whole};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Flat personal income tax rate (NDFL)
pub const TAX_RATE: Decimal = dec!(0.13);

/// Share of a gross amount left after tax
pub const NET_FACTOR: Decimal = dec!(0.87);

/// Which figure to derive from an amount
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Net pay: the amount itself when tax is included, otherwise gross less tax
    #[default]
    Base,
    /// The tax on the amount
    TaxOnly,
    /// Net pay plus a second, already derived amount (e.g. the tax), giving the total cost
    CombineWith(String),
}

/// Convert an amount to the figure selected by `mode`, formatted for display.
///
/// `tax_included` means the amount already has tax deducted, i.e. it is net
/// pay. Never fails; see [`parse_amount`] for how text becomes a number.
pub fn convert(amount: &str, tax_included: bool, mode: &Mode) -> String {
    format_grouped(convert_value(amount, tax_included, mode))
}

/// Same as [`convert`], without the formatting step.
pub fn convert_value(amount: &str, tax_included: bool, mode: &Mode) -> Decimal {
    let value = parse_amount(amount);
    let result = match mode {
        Mode::CombineWith(other) => {
            let other = parse_amount(other);
            if tax_included {
                value.checked_add(other)
            } else {
                value
                    .checked_mul(NET_FACTOR)
                    .and_then(|net| net.checked_add(other))
            }
        }
        Mode::TaxOnly => {
            let tax = value.checked_mul(TAX_RATE);
            if tax_included {
                tax.and_then(|t| t.checked_div(NET_FACTOR))
            } else {
                tax
            }
        }
        Mode::Base => {
            if tax_included {
                Some(value)
            } else {
                value.checked_mul(NET_FACTOR)
            }
        }
    };

    match result {
        Some(result) => {
            let result = round_whole(result);
            log::debug!(
                "convert {} (tax included: {}) {:?} -> {}",
                value,
                tax_included,
                mode,
                result
            );
            result
        }
        None => {
            log::warn!("overflow converting {} with {:?}, using 0", value, mode);
            Decimal::ZERO
        }
    }
}
