// ============================================================================
// Grammatical Gender
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Grammatical gender of the counted noun.
///
/// Only "one" and "two" change with gender (один/одна/одне, два/дві/два);
/// every other digit word is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Gender {
    #[default]
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    /// Column of this gender in the gendered ones table.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Gender::Masculine => 0,
            Gender::Feminine => 1,
            Gender::Neuter => 2,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Masculine => write!(f, "masculine"),
            Gender::Feminine => write!(f, "feminine"),
            Gender::Neuter => write!(f, "neuter"),
        }
    }
}
