//! Password policy rules
//!
//! Each rule checks one independent aspect of a candidate and contributes
//! at most one feedback message.

mod dictionary;
mod length;
mod owner;
mod pattern;
mod variety;

use crate::context::Context;
use crate::wordlist::Wordlist;

pub use dictionary::dictionary_word_rule;
pub use length::{diversity_ratio_rule, min_length_rule};
pub use owner::owner_name_rule;
pub use pattern::{
    ambiguous_chars_rule, excess_repeat_rule, sequential_rule, AMBIGUOUS_CHARS,
    SEQUENTIAL_PATTERNS,
};
pub use variety::{
    digit_rule, lowercase_rule, special_rule, uppercase_rule, whitespace_rule, SPECIAL_CHARS,
};

/// Result type for rule checks.
/// - `Some(feedback)` - Rule violated
/// - `None` - Rule passed
pub type RuleResult = Option<String>;

/// A single check in a policy, listed in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    MinLength(usize),
    HasUppercase,
    HasLowercase,
    HasDigit,
    HasSpecial,
    NoWhitespace,
    DiversityRatio,
    NoSequential,
    NoExcessRepeat,
    NoDictionaryWord(Wordlist),
    NoAmbiguousChars,
    NoOwnerName,
}

impl Rule {
    /// Stable identifier, safe to log.
    pub fn id(&self) -> &'static str {
        match self {
            Rule::MinLength(_) => "min-length",
            Rule::HasUppercase => "has-uppercase",
            Rule::HasLowercase => "has-lowercase",
            Rule::HasDigit => "has-digit",
            Rule::HasSpecial => "has-special",
            Rule::NoWhitespace => "no-whitespace",
            Rule::DiversityRatio => "diversity-ratio",
            Rule::NoSequential => "no-sequential",
            Rule::NoExcessRepeat => "no-excess-repeat",
            Rule::NoDictionaryWord(_) => "no-dictionary-word",
            Rule::NoAmbiguousChars => "no-ambiguous-chars",
            Rule::NoOwnerName => "no-owner-name",
        }
    }

    /// Runs the rule against a candidate.
    pub fn check(&self, candidate: &str, context: &Context) -> RuleResult {
        match self {
            Rule::MinLength(threshold) => min_length_rule(candidate, *threshold),
            Rule::HasUppercase => uppercase_rule(candidate),
            Rule::HasLowercase => lowercase_rule(candidate),
            Rule::HasDigit => digit_rule(candidate),
            Rule::HasSpecial => special_rule(candidate),
            Rule::NoWhitespace => whitespace_rule(candidate),
            Rule::DiversityRatio => diversity_ratio_rule(candidate),
            Rule::NoSequential => sequential_rule(candidate),
            Rule::NoExcessRepeat => excess_repeat_rule(candidate),
            Rule::NoDictionaryWord(words) => dictionary_word_rule(candidate, words),
            Rule::NoAmbiguousChars => ambiguous_chars_rule(candidate),
            Rule::NoOwnerName => owner_name_rule(candidate, context),
        }
    }
}
