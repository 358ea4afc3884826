// ============================================================================
// Propys Library
// Ukrainian numerals, fractions and money amounts written out in words
// ============================================================================

//! # Propys
//!
//! Writes non-negative numbers in Ukrainian words with full grammatical
//! agreement ("сума прописом").
//!
//! ## Features
//!
//! - **Gender agreement** of "one" and "two" with the counted noun
//! - **One / few / many** noun forms (гривня / гривні / гривень)
//! - **Decimal fractions** up to billionths, read from the decimal text
//! - **Currency mode** with configurable major and minor units
//! - **No shared mutable state**: every entry point is a pure function
//!
//! ## Example
//!
//! ```rust
//! use propys::prelude::*;
//! use rust_decimal::Decimal;
//!
//! // Bare integers
//! assert_eq!(
//!     integer_in_words(2_021, Gender::Masculine).unwrap(),
//!     "дві тисячі двадцять один"
//! );
//!
//! // Integers with a counted noun
//! let forms: WordForms = "книжка, книжки, книжок".parse().unwrap();
//! assert_eq!(
//!     render_integer(22, Gender::Feminine, &forms).unwrap(),
//!     "двадцять дві книжки"
//! );
//!
//! // Fractions
//! let numeral: Numeral = "2.05".parse().unwrap();
//! assert_eq!(
//!     numeral_in_words(&numeral, None).unwrap(),
//!     "дві цілих п'ять сотих"
//! );
//!
//! // Money
//! assert_eq!(
//!     currency_in_words(Decimal::new(31, 1), false).unwrap(),
//!     "три гривні десять копійок"
//! );
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub use engine::{
    choose_plural_form, currency_in_words, currency_in_words_with, float_in_words,
    get_plural_phrase, get_plural_phrase_packed, integer_in_words, numeral_in_words,
    numeral_in_words_str, render_integer,
};
pub use numeric::{decompose_fraction, ErrorKind, Numeral, NumeralError, NumeralResult};

pub mod prelude {
    pub use crate::domain::{CurrencyConfig, CurrencyUnit, Gender, WordForms};
    pub use crate::engine::{
        choose_plural_form, currency_in_words, currency_in_words_with, float_in_words,
        get_plural_phrase, get_plural_phrase_packed, integer_in_words, numeral_in_words,
        numeral_in_words_str, render_integer, PluralCategory, UkrainianFormatter,
    };
    pub use crate::interfaces::{LoggingFormatter, NumeralFormatter};
    pub use crate::numeric::{decompose_fraction, ErrorKind, Numeral, NumeralError, NumeralResult};
    pub use crate::utils::split_delimited;
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    #[test]
    fn test_plural_selection_table() {
        let f = WordForms::from(["one", "few", "many"]);
        assert_eq!(choose_plural_form(1, &f), f.one());
        assert_eq!(choose_plural_form(11, &f), f.many());
        assert_eq!(choose_plural_form(21, &f), f.one());
        assert_eq!(choose_plural_form(2, &f), f.few());
        assert_eq!(choose_plural_form(5, &f), f.many());
        assert_eq!(choose_plural_form(0, &f), f.many());
    }

    #[test]
    fn test_split_round_trip() {
        assert_eq!(split_delimited("a\\,b,c,d", ','), vec!["a,b", "c", "d"]);
    }

    #[test]
    fn test_zero_with_noun() {
        let f = WordForms::from(["рубль", "рублі", "рублів"]);
        assert_eq!(
            render_integer(0, Gender::Masculine, &f).unwrap(),
            "нуль рублів"
        );
    }

    #[test]
    fn test_exact_million_uses_million_noun() {
        assert_eq!(
            render_integer(1_000_000, Gender::Masculine, &WordForms::empty()).unwrap(),
            "один мільйон"
        );
    }

    #[test]
    fn test_currency_zero() {
        assert_eq!(currency_in_words(Decimal::ZERO, false).unwrap(), "нуль гривень");
        assert_eq!(
            currency_in_words(Decimal::ZERO, true).unwrap(),
            "нуль гривень нуль копійок"
        );
    }

    #[test]
    fn test_one_digit_fraction_is_tens_of_kopecks() {
        assert_eq!(decompose_fraction(dec("3.1"), 2).unwrap(), "1");
        assert_eq!(
            currency_in_words(dec("3.1"), false).unwrap(),
            "три гривні десять копійок"
        );
    }

    #[test]
    fn test_fraction_carry_overflows() {
        let err = decompose_fraction(dec("0.998"), 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overflow);
    }

    #[test]
    fn test_negative_rejected_everywhere() {
        let range = Some(ErrorKind::Range);
        let kind = |r: NumeralResult<String>| r.err().map(|e| e.kind());

        assert_eq!(kind(numeral_in_words(&Numeral::from(-1), None)), range);
        assert_eq!(kind(integer_in_words(-1, Gender::Masculine)), range);
        assert_eq!(kind(float_in_words(dec("-1.5"), Gender::Feminine)), range);
        assert_eq!(kind(currency_in_words(dec("-1"), false)), range);
        assert_eq!(
            kind(render_integer(-1, Gender::Masculine, &WordForms::empty())),
            range
        );
        assert_eq!(kind(decompose_fraction(dec("-1.5"), 2)), range);
    }

    #[test]
    fn test_magnitude_ceiling() {
        let f = WordForms::from(["рубль", "рублі", "рублів"]);
        let err = render_integer(10i128.pow(12), Gender::Masculine, &f).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overflow);
        assert!(render_integer(10i128.pow(12) - 1, Gender::Masculine, &f).is_ok());
    }

    #[test]
    fn test_idempotent() {
        let numeral = Numeral::from(dec("123456.789"));
        let first = numeral_in_words(&numeral, None).unwrap();
        let second = numeral_in_words(&numeral, None).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first,
            "сто двадцять три тисячі чотириста п'ятдесят шість цілих \
             сімсот вісімдесят дев'ять тисячних"
        );
    }

    #[test]
    fn test_float_input() {
        let numeral = Numeral::try_from(2.05).unwrap();
        assert_eq!(
            numeral_in_words(&numeral, None).unwrap(),
            "дві цілих п'ять сотих"
        );
    }

    #[test]
    fn test_concurrent_callers() {
        let inputs: Vec<i128> = (0..64).map(|i| i * 7_919_131 + 17).collect();
        let expected: Vec<String> = inputs
            .iter()
            .map(|n| integer_in_words(*n, Gender::Feminine).unwrap())
            .collect();

        crossbeam::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|_| {
                        inputs
                            .iter()
                            .map(|n| integer_in_words(*n, Gender::Feminine).unwrap())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        })
        .unwrap();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = CurrencyConfig::dollar();
        let json = serde_json::to_string(&config).unwrap();
        let back: CurrencyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        let gender: Gender = serde_json::from_str("\"Neuter\"").unwrap();
        assert_eq!(gender, Gender::Neuter);
    }
}
