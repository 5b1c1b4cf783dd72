//! Monetary amounts

use rust_decimal::{Decimal, Error};

/// Parse an amount in plain (`10.50`) or scientific (`1.05e1`) notation.
///
/// The text is taken as-is: no surrounding whitespace and no rounding.
///
/// # Errors
///
/// Fails when the text isn't a number, or carries more digits than a
/// [`Decimal`] can hold exactly.
pub fn parse_amount(value: &str) -> Result<Decimal, Error> {
    match value.split_once(['e', 'E']) {
        Some((mantissa, _exponent)) => {
            Decimal::from_str_exact(mantissa)?;
            Decimal::from_scientific(value)
        }
        None => Decimal::from_str_exact(value),
    }
}
