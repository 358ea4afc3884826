// ============================================================================
// Word Forms
// The (one, few, many) triple of a counted noun
// ============================================================================

use crate::numeric::{NumeralError, NumeralResult};
use crate::utils::{join_delimited, split_delimited, DEFAULT_SEPARATOR};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of forms in a word-form triple.
pub const FORM_COUNT: usize = 3;

/// Inflected forms of a noun after a numeral: for one object, for a few
/// (2-4) and for many (5+, 11-14, 0).
///
/// A value of this type always holds exactly three forms; the arity is
/// checked when it is built, so selecting a form can never fail.
///
/// # Example
/// ```
/// use propys::domain::WordForms;
///
/// let from_array = WordForms::from(["гривня", "гривні", "гривень"]);
/// let parsed: WordForms = "гривня, гривні, гривень".parse().unwrap();
/// assert_eq!(from_array, parsed);
/// assert_eq!(parsed.many(), "гривень");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordForms {
    forms: [String; FORM_COUNT],
}

impl WordForms {
    /// Build from exactly three forms.
    pub fn new(one: impl Into<String>, few: impl Into<String>, many: impl Into<String>) -> Self {
        Self {
            forms: [one.into(), few.into(), many.into()],
        }
    }

    /// Three empty forms: renders a bare numeral.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the delimited text format (`"one, few, many"`, `\,` escapes a
    /// literal comma).
    ///
    /// # Errors
    /// Returns `Shape` unless the text has exactly three segments.
    pub fn parse(text: &str) -> NumeralResult<Self> {
        Self::try_from(split_delimited(text, DEFAULT_SEPARATOR))
    }

    /// Form for one object (1, 21, 101, ...)
    #[inline]
    pub fn one(&self) -> &str {
        &self.forms[0]
    }

    /// Form for a few objects (2-4, 22-24, ...)
    #[inline]
    pub fn few(&self) -> &str {
        &self.forms[1]
    }

    /// Form for many objects (0, 5-20, 25-30, ...)
    #[inline]
    pub fn many(&self) -> &str {
        &self.forms[2]
    }

    pub fn as_array(&self) -> &[String; FORM_COUNT] {
        &self.forms
    }
}

impl<S: Into<String>> From<[S; FORM_COUNT]> for WordForms {
    fn from(forms: [S; FORM_COUNT]) -> Self {
        let [one, few, many] = forms;
        Self::new(one, few, many)
    }
}

impl<S: Into<String>> TryFrom<Vec<S>> for WordForms {
    type Error = NumeralError;

    fn try_from(forms: Vec<S>) -> Result<Self, Self::Error> {
        let forms: [S; FORM_COUNT] = forms.try_into().map_err(|rejected: Vec<S>| {
            NumeralError::Shape {
                expected: FORM_COUNT,
                actual: rejected.len(),
            }
        })?;
        Ok(Self::from(forms))
    }
}

impl TryFrom<&[&str]> for WordForms {
    type Error = NumeralError;

    fn try_from(forms: &[&str]) -> Result<Self, Self::Error> {
        Self::try_from(forms.to_vec())
    }
}

impl TryFrom<&str> for WordForms {
    type Error = NumeralError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::parse(text)
    }
}

impl FromStr for WordForms {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for WordForms {
    /// Writes the delimited text format, escaping literal commas.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_delimited(&self.forms, DEFAULT_SEPARATOR))
    }
}
