// ============================================================================
// Currency Configuration
// Unit nouns and genders used when writing money amounts in words
// ============================================================================

use super::gender::Gender;
use super::word_forms::WordForms;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of minor-unit digits after the separator.
pub const MINOR_UNIT_SIGNS: usize = 2;

// ============================================================================
// Currency Unit
// ============================================================================

/// One currency unit: its noun forms and the gender numerals agree with.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrencyUnit {
    pub forms: WordForms,
    pub gender: Gender,
}

impl CurrencyUnit {
    pub fn new(forms: impl Into<WordForms>, gender: Gender) -> Self {
        Self {
            forms: forms.into(),
            gender,
        }
    }
}

// ============================================================================
// Complete Currency Configuration
// ============================================================================

/// Major and minor units of a currency (e.g. гривня / копійка)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrencyConfig {
    /// Whole unit (гривня, долар, ...)
    pub major: CurrencyUnit,

    /// Hundredth of the whole unit (копійка, цент, ...)
    pub minor: CurrencyUnit,
}

impl CurrencyConfig {
    /// Create a new configuration from both units
    pub fn new(major: CurrencyUnit, minor: CurrencyUnit) -> Self {
        Self { major, minor }
    }

    /// Builder method: Replace the major unit
    pub fn with_major(mut self, forms: impl Into<WordForms>, gender: Gender) -> Self {
        self.major = CurrencyUnit::new(forms, gender);
        self
    }

    /// Builder method: Replace the minor unit
    pub fn with_minor(mut self, forms: impl Into<WordForms>, gender: Gender) -> Self {
        self.minor = CurrencyUnit::new(forms, gender);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        // "нуль гривень" needs a many form for the major unit
        if self.major.forms.many().is_empty() {
            return Err("Major unit must have a many form".to_string());
        }
        if self.minor.forms.many().is_empty() {
            return Err("Minor unit must have a many form".to_string());
        }

        Ok(())
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self::hryvnia()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CurrencyConfig {
    /// Ukrainian hryvnia
    /// - гривня (feminine)
    /// - копійка (feminine)
    pub fn hryvnia() -> Self {
        Self::new(
            CurrencyUnit::new(["гривня", "гривні", "гривень"], Gender::Feminine),
            CurrencyUnit::new(["копійка", "копійки", "копійок"], Gender::Feminine),
        )
    }

    /// US dollar
    /// - долар (masculine)
    /// - цент (masculine)
    pub fn dollar() -> Self {
        Self::new(
            CurrencyUnit::new(["долар", "долари", "доларів"], Gender::Masculine),
            CurrencyUnit::new(["цент", "центи", "центів"], Gender::Masculine),
        )
    }

    /// Euro
    /// - євро (neuter, indeclinable)
    /// - цент (masculine)
    pub fn euro() -> Self {
        Self::new(
            CurrencyUnit::new(["євро", "євро", "євро"], Gender::Neuter),
            CurrencyUnit::new(["цент", "центи", "центів"], Gender::Masculine),
        )
    }
}
