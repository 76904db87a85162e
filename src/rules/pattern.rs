//! Pattern rules - sequences, repeated characters, and look-alike characters.

use std::collections::HashMap;
use super::RuleResult;

/// Literal runs flagged as sequential, matched case-insensitively.
pub const SEQUENTIAL_PATTERNS: &[&str] = &["123", "234", "345", "abc", "abcd", "qwerty"];

/// Visually similar characters, matched case-sensitively.
pub const AMBIGUOUS_CHARS: &[char] = &['I', 'l', '1', 'O', '0', 'Q'];

const MAX_OCCURRENCES: usize = 2;

pub fn sequential_rule(candidate: &str) -> RuleResult {
    let lowered = candidate.to_lowercase();
    if SEQUENTIAL_PATTERNS.iter().any(|p| lowered.contains(p)) {
        return Some(
            "Password should not contain sequential characters (e.g., '123', 'abc').".to_string(),
        );
    }
    None
}

/// Counts total occurrences per character, wherever they appear.
pub fn excess_repeat_rule(candidate: &str) -> RuleResult {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in candidate.chars() {
        let count = counts.entry(c).or_insert(0);
        *count += 1;
        if *count > MAX_OCCURRENCES {
            return Some(
                "Password should not contain excessive repeated characters (e.g., 'aaa', '111')."
                    .to_string(),
            );
        }
    }
    None
}

pub fn ambiguous_chars_rule(candidate: &str) -> RuleResult {
    if candidate.chars().any(|c| AMBIGUOUS_CHARS.contains(&c)) {
        return Some("Password should avoid visually similar characters.".to_string());
    }
    None
}
