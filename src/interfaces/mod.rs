// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod formatter;

pub use formatter::{LoggingFormatter, NumeralFormatter};
