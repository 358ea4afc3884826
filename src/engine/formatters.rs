// ============================================================================
// Formatters
// Integers, fractions and money amounts in words
// ============================================================================

use super::grouper::render_integer;
use crate::domain::tables::{FRACTIONS, MAX_FRACTION_SIGNS, WHOLE};
use crate::domain::{CurrencyConfig, Gender, WordForms, MINOR_UNIT_SIGNS};
use crate::interfaces::NumeralFormatter;
use crate::numeric::{decompose_fraction, Numeral, NumeralError, NumeralResult};
use crate::utils::assert_non_negative;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

// ============================================================================
// Free Functions
// ============================================================================

/// Integer in words, without a counted noun.
///
/// # Errors
/// `Range` for negative amounts, `MagnitudeOverflow` from 10^12 on.
pub fn integer_in_words(amount: i128, gender: Gender) -> NumeralResult<String> {
    assert_non_negative(amount, false)?;
    render_integer(amount, gender, &WordForms::empty())
}

/// Decimal fraction in words: "дві цілих п'ять сотих".
///
/// Both the whole part (ціла/цілих) and the fraction nouns (десята,
/// сота, ...) are feminine and fix the agreement, so `_gender` does not
/// change the result. Up to 9 fractional digits are named; longer
/// fractions are rounded to 9.
///
/// # Errors
/// `Range` for negative amounts, `Overflow` from the grouper or the
/// fraction decomposer.
pub fn float_in_words(amount: Decimal, _gender: Gender) -> NumeralResult<String> {
    assert_non_negative(amount, false)?;

    let whole = integer_part(amount)?;
    let mut phrase = render_integer(whole, Gender::Feminine, &WordForms::from(WHOLE))?;

    let remainder = decompose_fraction(amount, MAX_FRACTION_SIGNS)?;
    let noun = remainder
        .len()
        .checked_sub(1)
        .and_then(|index| FRACTIONS.get(index))
        .ok_or_else(|| NumeralError::FractionOverflow {
            value: amount.to_string(),
            digits: remainder.clone(),
            signs: MAX_FRACTION_SIGNS,
        })?;
    let fraction = render_integer(
        parse_digits(&remainder)?,
        Gender::Feminine,
        &WordForms::from(*noun),
    )?;

    phrase.push(' ');
    phrase.push_str(&fraction);

    tracing::debug!("float {} in words: {}", amount, phrase);
    Ok(phrase)
}

/// Numeral in words, dispatched on its kind.
///
/// A decimal without fractional digits is read as an integer first.
/// `gender` defaults to masculine for integers and feminine for
/// fractions.
///
/// # Example
/// ```
/// use propys::engine::numeral_in_words;
/// use propys::numeric::Numeral;
///
/// assert_eq!(numeral_in_words(&Numeral::from(21), None).unwrap(), "двадцять один");
/// let half: Numeral = "0.5".parse().unwrap();
/// assert_eq!(numeral_in_words(&half, None).unwrap(), "нуль цілих п'ять десятих");
/// ```
pub fn numeral_in_words(numeral: &Numeral, gender: Option<Gender>) -> NumeralResult<String> {
    if numeral.is_negative() {
        return Err(NumeralError::Range {
            value: numeral.to_string(),
            strict: false,
        });
    }

    match numeral.normalize() {
        Numeral::Integer(value) => integer_in_words(value, gender.unwrap_or(Gender::Masculine)),
        Numeral::Decimal(value) => float_in_words(value, gender.unwrap_or(Gender::Feminine)),
    }
}

/// Parse `text` as a numeral and write it in words.
///
/// # Errors
/// `Unsupported` when `text` is not an integer or decimal numeral, then
/// everything [`numeral_in_words`] may return.
pub fn numeral_in_words_str(text: &str, gender: Option<Gender>) -> NumeralResult<String> {
    let numeral: Numeral = text.parse()?;
    numeral_in_words(&numeral, gender)
}

/// Hryvnias and kopecks in words.
///
/// See [`currency_in_words_with`].
pub fn currency_in_words(amount: Decimal, zero_for_fraction: bool) -> NumeralResult<String> {
    currency_in_words_with(&CurrencyConfig::hryvnia(), amount, zero_for_fraction)
}

/// Money amount in words for any currency.
///
/// The amount is rounded to 2 places (half away from zero). Zero minor units are
/// left out unless `zero_for_fraction` is set. A single fractional digit
/// counts tens of minor units: `3.1` is 10 копійок, not 1.
///
/// # Example
/// ```
/// use propys::engine::currency_in_words;
/// use rust_decimal::Decimal;
///
/// assert_eq!(
///     currency_in_words(Decimal::new(2105, 2), false).unwrap(),
///     "двадцять одна гривня п'ять копійок"
/// );
/// ```
pub fn currency_in_words_with(
    config: &CurrencyConfig,
    amount: Decimal,
    zero_for_fraction: bool,
) -> NumeralResult<String> {
    assert_non_negative(amount, false)?;

    let amount = amount
        .round_dp_with_strategy(MINOR_UNIT_SIGNS as u32, RoundingStrategy::MidpointAwayFromZero);
    let mut phrase = render_integer(
        integer_part(amount)?,
        config.major.gender,
        &config.major.forms,
    )?;

    let remainder = decompose_fraction(amount, MINOR_UNIT_SIGNS)?;
    let mut minor = parse_digits(&remainder)?;

    if minor != 0 || zero_for_fraction {
        if remainder.len() == 1 {
            minor *= 10;
        }
        phrase.push(' ');
        phrase.push_str(&render_integer(
            minor,
            config.minor.gender,
            &config.minor.forms,
        )?);
    }

    tracing::debug!("currency {} in words: {}", amount, phrase);
    Ok(phrase)
}

fn integer_part(amount: Decimal) -> NumeralResult<i128> {
    amount
        .trunc()
        .to_i128()
        .ok_or_else(|| NumeralError::MagnitudeOverflow {
            amount: amount.to_string(),
        })
}

fn parse_digits(digits: &str) -> NumeralResult<i128> {
    digits.parse().map_err(|_| NumeralError::Unsupported {
        input: digits.to_string(),
    })
}

// ============================================================================
// Ukrainian Formatter
// ============================================================================

/// Ukrainian implementation of [`NumeralFormatter`].
///
/// # Example
/// ```
/// use propys::prelude::*;
/// use rust_decimal::Decimal;
///
/// let formatter = UkrainianFormatter::with_currency(CurrencyConfig::dollar()).unwrap();
/// assert_eq!(
///     formatter.currency_in_words(Decimal::new(150, 2), false).unwrap(),
///     "один долар п'ятдесят центів"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct UkrainianFormatter {
    currency: CurrencyConfig,
}

impl UkrainianFormatter {
    /// Formatter writing money in hryvnias
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter writing money in the given currency
    ///
    /// # Errors
    /// `InvalidCurrency` if the configuration fails validation.
    pub fn with_currency(currency: CurrencyConfig) -> NumeralResult<Self> {
        currency
            .validate()
            .map_err(|reason| NumeralError::InvalidCurrency { reason })?;
        Ok(Self { currency })
    }

    pub fn currency(&self) -> &CurrencyConfig {
        &self.currency
    }
}

impl NumeralFormatter for UkrainianFormatter {
    fn name(&self) -> &str {
        "uk"
    }

    fn in_words(&self, numeral: &Numeral, gender: Option<Gender>) -> NumeralResult<String> {
        numeral_in_words(numeral, gender)
    }

    fn currency_in_words(&self, amount: Decimal, zero_for_fraction: bool) -> NumeralResult<String> {
        currency_in_words_with(&self.currency, amount, zero_for_fraction)
    }
}
