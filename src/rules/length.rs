//! Length rules - minimum length and character diversity.

use std::collections::HashSet;
use super::RuleResult;

/// Checks the candidate has at least `threshold` characters.
pub fn min_length_rule(candidate: &str, threshold: usize) -> RuleResult {
    if candidate.chars().count() < threshold {
        return Some(format!(
            "Password should be at least {} characters long.",
            threshold
        ));
    }
    None
}

/// Checks at least half the characters (rounded down) are distinct.
///
/// An empty candidate is skipped; the length rule already reports it.
pub fn diversity_ratio_rule(candidate: &str) -> RuleResult {
    let length = candidate.chars().count();
    if length == 0 {
        return None;
    }

    let distinct: HashSet<char> = candidate.chars().collect();
    if distinct.len() < length / 2 {
        return Some(
            "Password has too many repetitive characters; try adding more variety.".to_string(),
        );
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_too_short() {
        assert_eq!(
            min_length_rule("Ab1!", 8),
            Some("Password should be at least 8 characters long.".to_string())
        );
    }

    #[test]
    fn test_min_length_exactly_minimum() {
        assert_eq!(min_length_rule("12345678", 8), None);
    }

    #[test]
    fn test_min_length_counts_chars_not_bytes() {
        // 4 chars, 8 bytes
        assert!(min_length_rule("ééé!", 5).is_some());
        assert_eq!(min_length_rule("éééé", 4), None);
    }

    #[test]
    fn test_diversity_empty_is_skipped() {
        assert_eq!(diversity_ratio_rule(""), None);
    }

    #[test]
    fn test_diversity_low_variety() {
        // 8 chars, 2 distinct
        assert!(diversity_ratio_rule("aaaabbbb").is_some());
    }

    #[test]
    fn test_diversity_exact_half() {
        // 8 chars, 4 distinct
        assert_eq!(diversity_ratio_rule("aabbccdd"), None);
    }

    #[test]
    fn test_diversity_formula_on_mixed_triples() {
        // 12 chars, 4 distinct: 4 is below 6
        assert_eq!(
            diversity_ratio_rule("aaaBBB111!!!"),
            Some("Password has too many repetitive characters; try adding more variety.".to_string())
        );
        // 12 chars, 7 distinct: not below 6
        assert_eq!(diversity_ratio_rule("aaBBcc11!!xy"), None);
    }
}
