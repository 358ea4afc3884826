// ============================================================================
// Engine Module
// Contains the numeral-to-words business logic
// ============================================================================

mod formatters;
mod grouper;
mod plural;

pub use formatters::{
    currency_in_words, currency_in_words_with, float_in_words, integer_in_words,
    numeral_in_words, numeral_in_words_str, UkrainianFormatter,
};
pub use grouper::{render_integer, MAGNITUDE_CEILING};
pub use plural::{choose_plural_form, get_plural_phrase, get_plural_phrase_packed, PluralCategory};
