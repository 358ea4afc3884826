// ============================================================================
// Numeral Grouper
// Integer -> words, one base-1000 magnitude group at a time
// ============================================================================
//
// The number is folded over four fixed stages, lowest first:
//
//     ones (caller gender + caller noun)
//     thousands (feminine, тисяча)
//     millions (masculine, мільйон)
//     billions (masculine, мільярд)
//
// Each stage takes `rest = amount % 1000` off the remaining amount and
// renders it with its own gender and noun. Words of a stage precede the
// words of the stages below it. Whatever is left after the billions stage
// is 10^12 or more and cannot be named.

use super::plural::PluralCategory;
use crate::domain::tables::{GROUP_BASE, HUNDREDS, MAGNITUDES, ONES, TEENS, TENS, ZERO};
use crate::domain::{Gender, WordForms};
use crate::numeric::{NumeralError, NumeralResult};
use crate::utils::assert_non_negative;
use smallvec::{smallvec, SmallVec};

/// Largest amount the grouper can render, plus one.
pub const MAGNITUDE_CEILING: i128 = 1_000_000_000_000;

/// Words of one magnitude group: hundreds, tens, ones, noun.
type GroupWords<'a> = SmallVec<[&'a str; 4]>;

/// One stage of the fold: the gender and noun forms a group agrees with.
#[derive(Debug, Clone, Copy)]
struct Stage<'a> {
    gender: Gender,
    forms: [&'a str; 3],
}

impl<'a> Stage<'a> {
    fn noun(&self, category: PluralCategory) -> &'a str {
        self.forms[category.index()]
    }

    fn many(&self) -> &'a str {
        self.noun(PluralCategory::Many)
    }
}

/// Write a non-negative integer below 10^12 in words, followed by the
/// agreeing form of `forms` (pass [`WordForms::empty`] for a bare number).
///
/// `gender` applies to the lowest group only; thousands are always
/// feminine and millions/billions masculine.
///
/// # Errors
/// - `Range` if `amount` is negative
/// - `MagnitudeOverflow` if `amount >= 10^12`
///
/// # Example
/// ```
/// use propys::engine::render_integer;
/// use propys::domain::{Gender, WordForms};
///
/// let forms = WordForms::from(["гривня", "гривні", "гривень"]);
/// assert_eq!(
///     render_integer(1_021, Gender::Feminine, &forms).unwrap(),
///     "одна тисяча двадцять одна гривня"
/// );
/// ```
pub fn render_integer(amount: i128, gender: Gender, forms: &WordForms) -> NumeralResult<String> {
    assert_non_negative(amount, false)?;

    if amount == 0 {
        return Ok(join_words([ZERO, forms.many()]));
    }

    let stages = stages(gender, forms);
    let mut groups: SmallVec<[GroupWords<'_>; 4]> = SmallVec::new();
    let mut remaining = amount.unsigned_abs();

    for (position, stage) in stages.iter().enumerate() {
        if remaining == 0 {
            break;
        }

        let rest = (remaining % GROUP_BASE) as usize;
        remaining /= GROUP_BASE;

        if rest == 0 {
            // An empty lowest group still names what is counted:
            // 1 000 000 -> "один мільйон", 1 000 рублів -> "одна тисяча рублів"
            if groups.is_empty() && position == 0 {
                groups.push(smallvec![stage.many()]);
            }
            continue;
        }

        let words = render_group(rest, stage);
        tracing::trace!("group {} ({}): {:?}", position, rest, words);
        groups.push(words);
    }

    if remaining != 0 {
        return Err(NumeralError::MagnitudeOverflow {
            amount: amount.to_string(),
        });
    }

    Ok(join_words(groups.iter().rev().flatten().copied()))
}

/// The caller's stage followed by the fixed magnitude stages.
fn stages<'a>(gender: Gender, forms: &'a WordForms) -> [Stage<'a>; 4] {
    let magnitude = |i: usize| Stage {
        gender: MAGNITUDES[i].gender,
        forms: MAGNITUDES[i].forms,
    };

    [
        Stage {
            gender,
            forms: [forms.one(), forms.few(), forms.many()],
        },
        magnitude(0),
        magnitude(1),
        magnitude(2),
    ]
}

/// Words of a non-zero group value (1..=999).
fn render_group<'a>(rest: usize, stage: &Stage<'a>) -> GroupWords<'a> {
    let mut words = GroupWords::new();

    words.push(HUNDREDS[rest / 100]);

    let below_hundred = rest % 100;
    let tens = below_hundred / 10;

    if tens == 1 {
        // 10-19 are single words and always take the many form
        words.push(TEENS[below_hundred - 10]);
        words.push(stage.many());
    } else {
        let ones = below_hundred % 10;
        words.push(TENS[tens]);
        words.push(ONES[ones][stage.gender.index()]);
        words.push(stage.noun(PluralCategory::of(rest as i128)));
    }

    words
}

/// Join words with single spaces, skipping empty ones.
fn join_words<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    let mut phrase = String::new();
    for word in words.into_iter().filter(|w| !w.is_empty()) {
        if !phrase.is_empty() {
            phrase.push(' ');
        }
        phrase.push_str(word);
    }
    phrase
}
