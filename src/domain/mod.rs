// ============================================================================
// Domain Models Module
// Grammatical value objects, lookup tables and currency configuration
// ============================================================================

pub mod config;
pub mod gender;
pub mod tables;
pub mod word_forms;

pub use config::{CurrencyConfig, CurrencyUnit, MINOR_UNIT_SIGNS};
pub use gender::Gender;
pub use word_forms::{WordForms, FORM_COUNT};
