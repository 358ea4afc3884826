// ============================================================================
// Plural Form Selector
// One / few / many agreement of a noun with a cardinal number
// ============================================================================

use crate::domain::{WordForms, FORM_COUNT};
use crate::numeric::NumeralResult;
use crate::utils::{assert_shape, split_delimited, DEFAULT_SEPARATOR};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which of the three noun forms a quantity takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PluralCategory {
    /// 1, 21, 31, ..., 101, ... (but not 11)
    One,
    /// 2-4, 22-24, ... (but not 12-14)
    Few,
    /// 0, 5-20, 25-30, ...
    Many,
}

impl PluralCategory {
    /// Category of `amount`; the sign is ignored.
    #[inline]
    pub const fn of(amount: i128) -> Self {
        let n = amount.unsigned_abs();
        let last = n % 10;
        let last_two = n % 100;

        if last == 1 && last_two != 11 {
            PluralCategory::One
        } else if last >= 2 && last <= 4 && (last_two < 10 || last_two >= 20) {
            PluralCategory::Few
        } else {
            PluralCategory::Many
        }
    }

    /// Position of the matching form in a (one, few, many) triple.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PluralCategory::One => 0,
            PluralCategory::Few => 1,
            PluralCategory::Many => 2,
        }
    }
}

/// Choose the form of a noun that agrees with `amount`.
///
/// # Example
/// ```
/// use propys::engine::choose_plural_form;
/// use propys::domain::WordForms;
///
/// let forms = WordForms::from(["гривня", "гривні", "гривень"]);
/// assert_eq!(choose_plural_form(21, &forms), "гривня");
/// assert_eq!(choose_plural_form(3, &forms), "гривні");
/// assert_eq!(choose_plural_form(11, &forms), "гривень");
/// ```
#[inline]
pub fn choose_plural_form(amount: i128, forms: &WordForms) -> &str {
    &forms.as_array()[PluralCategory::of(amount).index()]
}

/// Render `"<amount> <form>"`, or `absent_text` when `amount` is zero and
/// one is given (to drop phrases like "0 копійок" entirely).
pub fn get_plural_phrase(amount: i128, forms: &WordForms, absent_text: Option<&str>) -> String {
    match absent_text {
        Some(absent) if amount == 0 => absent.to_string(),
        _ => format!("{} {}", amount, choose_plural_form(amount, forms)),
    }
}

/// [`get_plural_phrase`] with forms and absent text packed in one
/// delimited string: `"one, few, many"` or `"one, few, many, absent"`.
///
/// # Errors
/// Returns `Shape` unless the string holds 3 or 4 segments.
pub fn get_plural_phrase_packed(amount: i128, packed: &str) -> NumeralResult<String> {
    let mut segments = split_delimited(packed, DEFAULT_SEPARATOR);
    let absent = if segments.len() == FORM_COUNT + 1 {
        segments.pop()
    } else {
        assert_shape(segments.len(), FORM_COUNT)?;
        None
    };
    let forms = WordForms::try_from(segments)?;
    Ok(get_plural_phrase(amount, &forms, absent.as_deref()))
}
