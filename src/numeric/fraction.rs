// ============================================================================
// Fractional Decomposer
// Fractional digits of a decimal as a fixed-width string
// ============================================================================

use super::errors::{NumeralError, NumeralResult};
use crate::domain::tables::MAX_FRACTION_SIGNS;
use crate::utils::assert_non_negative;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Get the fractional digits of `value`, i.e. `2.05` -> `"05"`.
///
/// Digits are taken from the decimal text, so `X.0Y` keeps its leading
/// zero and no binary rounding is involved. At most
/// `min(max_signs, 9)` digits are kept; longer fractions are rounded
/// (half away from zero) to that width. A value with scale 0 yields `"0"`.
///
/// # Errors
/// - `Range` if `value` is negative or `max_signs` is zero
/// - `FractionOverflow` if rounding needs one more digit than allowed
///   (`0.998` to 2 signs); the carry is never pushed into the integer part
///
/// # Example
/// ```
/// use propys::numeric::decompose_fraction;
/// use rust_decimal::Decimal;
///
/// assert_eq!(decompose_fraction(Decimal::new(205, 2), 9).unwrap(), "05");
/// assert_eq!(decompose_fraction(Decimal::new(12345, 4), 2).unwrap(), "23");
/// assert!(decompose_fraction(Decimal::new(998, 3), 2).is_err());
/// ```
pub fn decompose_fraction(value: Decimal, max_signs: usize) -> NumeralResult<String> {
    assert_non_negative(value, false)?;
    assert_non_negative(max_signs, true)?;

    if value.scale() == 0 {
        return Ok("0".to_string());
    }

    let signs = max_signs.min(MAX_FRACTION_SIGNS);
    let text = value.to_string();
    let digits = text.split_once('.').map_or("0", |(_, fraction)| fraction);

    let overflow = || NumeralError::FractionOverflow {
        value: text.clone(),
        digits: digits.to_string(),
        signs,
    };

    let mut remainder = Decimal::from_str_exact(digits).map_err(|_| overflow())?;
    if digits.len() > signs {
        let factor = (digits.len() - signs) as u32;
        remainder.set_scale(factor).map_err(|_| overflow())?;
        remainder = remainder.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        tracing::trace!(
            "rounded fraction {} of {} to {} signs",
            digits,
            text,
            signs
        );
    }

    let remainder = remainder.to_u128().ok_or_else(overflow)?;
    let width = digits.len().min(signs);
    let rendered = format!("{:0width$}", remainder, width = width);

    if rendered.len() > signs {
        return Err(overflow());
    }

    Ok(rendered)
}
