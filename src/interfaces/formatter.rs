// ============================================================================
// Numeral Formatter Interface
// Defines the contract for language-specific in-words formatters
// ============================================================================

use crate::domain::Gender;
use crate::numeric::{Numeral, NumeralResult};
use rust_decimal::Decimal;

/// Writes numerals and money amounts in words for one language.
/// Implementations: Ukrainian (this crate); a front end picks one by name.
pub trait NumeralFormatter: Send + Sync {
    /// Language tag for logging and menus
    fn name(&self) -> &str;

    /// Numeral in words
    ///
    /// # Arguments
    /// * `numeral` - Integer or decimal to write out
    /// * `gender` - Grammatical gender of the counted noun, if any
    fn in_words(&self, numeral: &Numeral, gender: Option<Gender>) -> NumeralResult<String>;

    /// Money amount in words (major units, then minor units)
    fn currency_in_words(&self, amount: Decimal, zero_for_fraction: bool) -> NumeralResult<String>;

    /// Parse free-form numeric text (as typed by a user) and write it in words
    fn text_in_words(&self, text: &str) -> NumeralResult<String> {
        let numeral: Numeral = text.parse()?;
        self.in_words(&numeral, None)
    }
}

/// Formatter decorator that logs every call and its outcome
pub struct LoggingFormatter<F> {
    inner: F,
}

impl<F: NumeralFormatter> LoggingFormatter<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }

    fn log(&self, input: &dyn std::fmt::Display, result: &NumeralResult<String>) {
        match result {
            Ok(words) => tracing::debug!("[{}] {} -> {}", self.inner.name(), input, words),
            Err(err) => tracing::debug!("[{}] {} failed: {}", self.inner.name(), input, err),
        }
    }
}

impl<F: NumeralFormatter> NumeralFormatter for LoggingFormatter<F> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn in_words(&self, numeral: &Numeral, gender: Option<Gender>) -> NumeralResult<String> {
        let result = self.inner.in_words(numeral, gender);
        self.log(numeral, &result);
        result
    }

    fn currency_in_words(&self, amount: Decimal, zero_for_fraction: bool) -> NumeralResult<String> {
        let result = self.inner.currency_in_words(amount, zero_for_fraction);
        self.log(&amount, &result);
        result
    }
}
