// ============================================================================
// Numeral
// Integer or decimal amount, tagged at the API boundary
// ============================================================================

use super::errors::{NumeralError, NumeralResult};
use crate::utils::assert_non_negative;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A numeral to be written in words.
///
/// The kind decides how it is read: an `Integer` is a bare count
/// ("двадцять один"), a `Decimal` is a fraction ("дві цілих п'ять
/// сотих"). The decimal keeps its scale, so `2.50` and `2.5` are read
/// differently, the same way they are written.
///
/// # Example
/// ```
/// use propys::numeric::Numeral;
///
/// let n: Numeral = "12.50".parse().unwrap();
/// assert!(matches!(n, Numeral::Decimal(d) if d.scale() == 2));
///
/// let n: Numeral = "42".parse().unwrap();
/// assert_eq!(n, Numeral::Integer(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Numeral {
    Integer(i128),
    Decimal(Decimal),
}

impl Numeral {
    /// Check if the numeral is below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        match self {
            Numeral::Integer(value) => *value < 0,
            Numeral::Decimal(value) => *value < Decimal::ZERO,
        }
    }

    /// Turn a decimal without fractional digits (scale 0) into an integer.
    ///
    /// A decimal such as `2.0` has scale 1 and stays a decimal.
    pub fn normalize(self) -> Self {
        match self {
            Numeral::Decimal(value) if value.scale() == 0 => {
                value.to_i128().map_or(self, Numeral::Integer)
            }
            other => other,
        }
    }

    /// Fractional digits of the numeral, see [`decompose_fraction`].
    ///
    /// [`decompose_fraction`]: super::decompose_fraction
    pub fn fraction_digits(&self, max_signs: usize) -> NumeralResult<String> {
        match self {
            Numeral::Integer(value) => {
                assert_non_negative(*value, false)?;
                super::fraction::decompose_fraction(Decimal::ZERO, max_signs)
            }
            Numeral::Decimal(value) => super::fraction::decompose_fraction(*value, max_signs),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Numeral {
                #[inline]
                fn from(value: $t) -> Self {
                    Numeral::Integer(value as i128)
                }
            }
        )*
    };
}

impl_from_integer!(i32, u32, i64, u64, i128);

impl From<Decimal> for Numeral {
    #[inline]
    fn from(value: Decimal) -> Self {
        Numeral::Decimal(value)
    }
}

impl TryFrom<f64> for Numeral {
    type Error = NumeralError;

    /// Convert a float through its shortest decimal text (`2.05` stays
    /// `2.05`, never `2.04999...`). The result is always a decimal, so an
    /// integral float keeps one fractional digit: `2.0` reads as a fraction.
    ///
    /// # Errors
    /// - `Unsupported` for NaN and infinities
    /// - `MagnitudeOverflow` for floats too large for a decimal
    ///   (`Range` when they are also negative)
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(NumeralError::Unsupported {
                input: value.to_string(),
            });
        }

        let mut text = value.to_string();
        if !text.contains('.') {
            text.push_str(".0");
        }

        Decimal::from_str(&text)
            .map(Numeral::Decimal)
            .map_err(|_| out_of_range(&text))
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Numeral {
    type Err = NumeralError;

    /// Parse a numeral.
    ///
    /// # Examples
    /// - "123" -> Integer(123)
    /// - "123.450" -> Decimal(123.450)
    /// - "-5" -> Integer(-5) (negative values are rejected when rendered)
    ///
    /// Well-formed numerals too large to hold give `MagnitudeOverflow`
    /// (`Range` when negative); anything else gives `Unsupported`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let rejected = || {
            if is_numeral_text(trimmed) {
                out_of_range(trimmed)
            } else {
                NumeralError::Unsupported {
                    input: s.to_string(),
                }
            }
        };

        if trimmed.contains('.') {
            Decimal::from_str(trimmed)
                .map(Numeral::Decimal)
                .map_err(|_| rejected())
        } else {
            trimmed
                .parse::<i128>()
                .map(Numeral::Integer)
                .map_err(|_| rejected())
        }
    }
}

/// Optional sign, then digits with at most one decimal point.
fn is_numeral_text(text: &str) -> bool {
    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    !(whole.is_empty() && fraction.is_empty()) && all_digits(whole) && all_digits(fraction)
}

/// Error for a well-formed numeral that does not fit the numeric types.
fn out_of_range(text: &str) -> NumeralError {
    if text.starts_with('-') {
        NumeralError::Range {
            value: text.to_string(),
            strict: false,
        }
    } else {
        NumeralError::MagnitudeOverflow {
            amount: text.to_string(),
        }
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeral::Integer(value) => write!(f, "{}", value),
            Numeral::Decimal(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::ErrorKind;

    #[test]
    fn test_from_str() {
        assert_eq!("42".parse::<Numeral>().unwrap(), Numeral::Integer(42));
        assert_eq!(" 7 ".parse::<Numeral>().unwrap(), Numeral::Integer(7));
        assert_eq!(
            "3.10".parse::<Numeral>().unwrap(),
            Numeral::Decimal(Decimal::new(310, 2))
        );
        assert_eq!("-1".parse::<Numeral>().unwrap(), Numeral::Integer(-1));
    }

    #[test]
    fn test_from_str_invalid() {
        for input in ["", "abc", "1,5", "1.2.3", "12abc"] {
            let err = input.parse::<Numeral>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Type, "input {:?}", input);
        }
    }

    #[test]
    fn test_try_from_f64() {
        let n = Numeral::try_from(2.05).unwrap();
        assert_eq!(n, Numeral::Decimal(Decimal::new(205, 2)));
        assert_eq!(n.to_string(), "2.05");

        // Integral floats stay fractional
        let n = Numeral::try_from(2.0).unwrap();
        assert!(matches!(n, Numeral::Decimal(d) if d.scale() == 1));

        assert!(Numeral::try_from(f64::NAN).is_err());
        assert!(Numeral::try_from(f64::INFINITY).is_err());
    }

    #[test]
    fn test_try_from_f64_too_large() {
        assert_eq!(Numeral::try_from(1e30).unwrap_err().kind(), ErrorKind::Overflow);
        assert_eq!(Numeral::try_from(-1e30).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(
            Numeral::try_from(f64::NAN).unwrap_err().kind(),
            ErrorKind::Type
        );
        assert_eq!(
            Numeral::try_from(f64::NEG_INFINITY).unwrap_err().kind(),
            ErrorKind::Type
        );
    }

    #[test]
    fn test_from_str_too_large() {
        let huge_decimal = "1000000000000000000000000000000.5";
        assert_eq!(
            huge_decimal.parse::<Numeral>().unwrap_err(),
            NumeralError::MagnitudeOverflow {
                amount: huge_decimal.to_string()
            }
        );

        let huge_integer = "1".repeat(50);
        assert_eq!(
            huge_integer.parse::<Numeral>().unwrap_err().kind(),
            ErrorKind::Overflow
        );
        assert_eq!(
            format!("-{}", huge_integer).parse::<Numeral>().unwrap_err().kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            Numeral::Decimal(Decimal::from(5)).normalize(),
            Numeral::Integer(5)
        );
        let two_point_zero = Numeral::Decimal(Decimal::new(20, 1));
        assert_eq!(two_point_zero.normalize(), two_point_zero);
        assert_eq!(Numeral::Integer(3).normalize(), Numeral::Integer(3));
    }

    #[test]
    fn test_is_negative() {
        assert!(Numeral::Integer(-1).is_negative());
        assert!(Numeral::Decimal(Decimal::new(-1, 1)).is_negative());
        assert!(!Numeral::Integer(0).is_negative());
        assert!(!Numeral::from(Decimal::ZERO).is_negative());
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(Numeral::Integer(12).fraction_digits(9).unwrap(), "0");
        assert_eq!(
            Numeral::Decimal(Decimal::new(205, 2))
                .fraction_digits(9)
                .unwrap(),
            "05"
        );
    }
}
