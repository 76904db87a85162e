//! Dictionary rule - flags common words anywhere in the candidate.

use crate::wordlist::Wordlist;
use super::RuleResult;

pub fn dictionary_word_rule(candidate: &str, words: &Wordlist) -> RuleResult {
    if words.contains_in(&candidate.to_lowercase()) {
        return Some("Password should not contain common dictionary words.".to_string());
    }
    None
}
