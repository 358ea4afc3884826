// ============================================================================
// Numeric Module
// Numeral representation, fraction decomposition and error types
// ============================================================================
//
// This module provides:
// - Numeral: Integer / Decimal tagged input, built at the API boundary
// - decompose_fraction: fixed-width fractional digits with rounding
// - NumeralError: Error types shared by the whole crate
//
// Design principles:
// - No floating-point arithmetic; floats are converted through their text
// - All fallible operations return Result (no panics)

mod errors;
mod fraction;
mod numeral;

pub use errors::{ErrorKind, NumeralError, NumeralResult};
pub use fraction::decompose_fraction;
pub use numeral::Numeral;
