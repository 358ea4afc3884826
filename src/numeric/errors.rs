// ============================================================================
// Numeral Errors
// Error types for validation, rendering and fraction decomposition
// ============================================================================

use thiserror::Error;

/// Broad category of a [`NumeralError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Word-form collection of the wrong arity
    Shape,
    /// Negative amount (or non-positive where strictly positive is required)
    Range,
    /// Magnitude or fraction width cannot be represented
    Overflow,
    /// Input is neither an integer nor a decimal numeral
    Type,
    /// Formatter configuration is unusable
    Config,
}

/// Errors that can occur while turning a numeral into words.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum NumeralError {
    /// Word forms did not resolve to the expected number of elements
    #[error("word forms must have {expected} elements, not {actual}")]
    Shape { expected: usize, actual: usize },

    /// Value is negative (or zero when `strict`)
    #[error("{}", range_message(.value, .strict))]
    Range { value: String, strict: bool },

    /// Rounding the fractional digits would need more than `signs` digits
    #[error("signs overflow: cannot round fractional part {digits} of {value} to fit in {signs} signs")]
    FractionOverflow {
        value: String,
        digits: String,
        signs: usize,
    },

    /// Integer part is 10^12 or more
    #[error("cannot render numbers of 10^12 or more, got {amount}")]
    MagnitudeOverflow { amount: String },

    /// Input could not be read as an integer or decimal numeral
    #[error("amount should be an integer or decimal numeral, got {input:?}")]
    Unsupported { input: String },

    /// Currency configuration failed validation
    #[error("invalid currency configuration: {reason}")]
    InvalidCurrency { reason: String },
}

fn range_message(value: &str, strict: &bool) -> String {
    if *strict {
        format!("value must be positive, not {}", value)
    } else {
        format!("value must be positive or zero, not {}", value)
    }
}

impl NumeralError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NumeralError::Shape { .. } => ErrorKind::Shape,
            NumeralError::Range { .. } => ErrorKind::Range,
            NumeralError::FractionOverflow { .. } | NumeralError::MagnitudeOverflow { .. } => {
                ErrorKind::Overflow
            }
            NumeralError::Unsupported { .. } => ErrorKind::Type,
            NumeralError::InvalidCurrency { .. } => ErrorKind::Config,
        }
    }
}

/// Result type alias for numeral operations
pub type NumeralResult<T> = Result<T, NumeralError>;
