// ============================================================================
// Validation Utilities
// Shape and range checks shared by every component, plus the delimited
// word-form text format ("гривня, гривні, гривень")
// ============================================================================

use crate::numeric::{NumeralError, NumeralResult};
use std::fmt::Display;

/// Default separator of the delimited word-form format.
pub const DEFAULT_SEPARATOR: char = ',';

const ESCAPE: char = '\\';

/// Checks that a collection has exactly `expected` elements.
///
/// # Errors
/// Returns `Shape` when `actual != expected`.
#[inline]
pub fn assert_shape(actual: usize, expected: usize) -> NumeralResult<()> {
    if actual != expected {
        return Err(NumeralError::Shape { expected, actual });
    }
    Ok(())
}

/// Checks that `value` is not negative (or strictly positive when `strict`).
///
/// Works for any ordered numeric type whose `Default` is zero
/// (`i128`, `i64`, `usize`, `Decimal`, ...).
///
/// # Errors
/// Returns `Range` when the check fails.
pub fn assert_non_negative<T>(value: T, strict: bool) -> NumeralResult<()>
where
    T: PartialOrd + Default + Display,
{
    let zero = T::default();
    let failed = if strict { value <= zero } else { value < zero };
    if failed {
        return Err(NumeralError::Range {
            value: value.to_string(),
            strict,
        });
    }
    Ok(())
}

/// Splits `text` on `separator`, keeping escaped separators (`\,`) as
/// literal characters, and trims whitespace around every segment.
///
/// The escape is resolved in the same pass as the split, so no placeholder
/// character is ever substituted into the text. A backslash that does not
/// precede the separator is kept as is.
///
/// ```
/// use propys::utils::split_delimited;
///
/// assert_eq!(split_delimited("a\\,b, c ,d", ','), vec!["a,b", "c", "d"]);
/// ```
pub fn split_delimited(text: &str, separator: char) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESCAPE && chars.peek() == Some(&separator) {
            current.push(separator);
            chars.next();
        } else if ch == separator {
            segments.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    segments.push(current.trim().to_string());

    segments
}

/// Joins segments with `separator`, escaping separators inside segments.
///
/// Inverse of [`split_delimited`] for segments without surrounding
/// whitespace.
pub fn join_delimited<S: AsRef<str>>(segments: &[S], separator: char) -> String {
    let escaped = format!("{}{}", ESCAPE, separator);
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(&segment.as_ref().replace(separator, &escaped));
    }
    out
}
