// ============================================================================
// Utilities Module
// Validation helpers reused by every other component
// ============================================================================

mod validation;

pub use validation::{
    assert_non_negative, assert_shape, join_delimited, split_delimited, DEFAULT_SEPARATOR,
};
