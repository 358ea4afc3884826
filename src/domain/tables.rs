// ============================================================================
// Lookup Tables
// Digit names, magnitude nouns and fraction nouns
// ============================================================================
//
// Every table is a `const`/`static` array: built at compile time, shared
// by all threads, never mutated.

use super::gender::Gender;

/// Word triple held in a static table: (one, few, many).
pub type StaticForms = [&'static str; 3];

/// Word for zero.
pub const ZERO: &str = "нуль";

/// Ones digit (0-9) by gender: (masculine, feminine, neuter).
pub const ONES: [[&str; 3]; 10] = [
    ["", "", ""],
    ["один", "одна", "одне"],
    ["два", "дві", "два"],
    ["три", "три", "три"],
    ["чотири", "чотири", "чотири"],
    ["п'ять", "п'ять", "п'ять"],
    ["шість", "шість", "шість"],
    ["сім", "сім", "сім"],
    ["вісім", "вісім", "вісім"],
    ["дев'ять", "дев'ять", "дев'ять"],
];

/// 10-19, which are single compound words rather than "ten + one".
pub const TEENS: [&str; 10] = [
    "десять",
    "одинадцять",
    "дванадцять",
    "тринадцять",
    "чотирнадцять",
    "п'ятнадцять",
    "шістнадцять",
    "сімнадцять",
    "вісімнадцять",
    "дев'ятнадцять",
];

/// Tens digit (2-9); slot 1 is covered by `TEENS`.
pub const TENS: [&str; 10] = [
    "",
    "",
    "двадцять",
    "тридцять",
    "сорок",
    "п'ятдесят",
    "шістдесят",
    "сімдесят",
    "вісімдесят",
    "дев'яносто",
];

/// Hundreds digit (1-9).
pub const HUNDREDS: [&str; 10] = [
    "",
    "сто",
    "двісті",
    "триста",
    "чотириста",
    "п'ятсот",
    "шістсот",
    "сімсот",
    "вісімсот",
    "дев'ятсот",
];

/// Noun of a magnitude group together with its fixed gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magnitude {
    pub forms: StaticForms,
    pub gender: Gender,
}

/// Thousand, million, billion; in ascending order.
pub const MAGNITUDES: [Magnitude; 3] = [
    Magnitude {
        forms: ["тисяча", "тисячі", "тисяч"],
        gender: Gender::Feminine,
    },
    Magnitude {
        forms: ["мільйон", "мільйони", "мільйонів"],
        gender: Gender::Masculine,
    },
    Magnitude {
        forms: ["мільярд", "мільярди", "мільярдів"],
        gender: Gender::Masculine,
    },
];

/// Size of one magnitude group.
pub const GROUP_BASE: u128 = 1000;

/// "Whole" noun of a decimal fraction's integer part (feminine).
pub const WHOLE: StaticForms = ["ціла", "цілих", "цілих"];

/// Fraction nouns indexed by `digits - 1`: tenths ... billionths.
/// All of them are feminine.
pub const FRACTIONS: [StaticForms; 9] = [
    ["десята", "десятих", "десятих"],
    ["сота", "сотих", "сотих"],
    ["тисячна", "тисячних", "тисячних"],
    ["десятитисячна", "десятитисячних", "десятитисячних"],
    ["стотисячна", "стотисячних", "стотисячних"],
    ["мільйонна", "мільйонних", "мільйонних"],
    ["десятимільйонна", "десятимільйонних", "десятимільйонних"],
    ["стомільйонна", "стомільйонних", "стомільйонних"],
    ["мільярдна", "мільярдних", "мільярдних"],
];

/// Most fractional digits the fraction nouns can name.
pub const MAX_FRACTION_SIGNS: usize = FRACTIONS.len();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gendered_ones() {
        assert_eq!(ONES[1][Gender::Masculine.index()], "один");
        assert_eq!(ONES[1][Gender::Feminine.index()], "одна");
        assert_eq!(ONES[1][Gender::Neuter.index()], "одне");
        assert_eq!(ONES[2][Gender::Feminine.index()], "дві");
        assert_eq!(ONES[5][Gender::Neuter.index()], "п'ять");
    }

    #[test]
    fn test_magnitude_genders() {
        assert_eq!(MAGNITUDES[0].gender, Gender::Feminine);
        assert_eq!(MAGNITUDES[1].gender, Gender::Masculine);
        assert_eq!(MAGNITUDES[2].gender, Gender::Masculine);
    }

    #[test]
    fn test_no_empty_nouns() {
        for forms in FRACTIONS.iter().chain(std::iter::once(&WHOLE)) {
            assert!(forms.iter().all(|f| !f.is_empty()));
        }
        assert_eq!(MAX_FRACTION_SIGNS, 9);
    }
}
