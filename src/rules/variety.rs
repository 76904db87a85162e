//! Character variety rules - uppercase, lowercase, digits, special chars, whitespace.

use super::RuleResult;

/// Characters accepted as special.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

pub fn uppercase_rule(candidate: &str) -> RuleResult {
    if !candidate.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password should include at least one uppercase letter.".to_string());
    }
    None
}

pub fn lowercase_rule(candidate: &str) -> RuleResult {
    if !candidate.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password should include at least one lowercase letter.".to_string());
    }
    None
}

pub fn digit_rule(candidate: &str) -> RuleResult {
    if !candidate.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password should include at least one digit.".to_string());
    }
    None
}

pub fn special_rule(candidate: &str) -> RuleResult {
    if !candidate.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Some(
            "Password should include at least one special character (e.g., @, #, $).".to_string(),
        );
    }
    None
}

/// Flags any Unicode whitespace, not only the ASCII space.
pub fn whitespace_rule(candidate: &str) -> RuleResult {
    if candidate.chars().any(char::is_whitespace) {
        return Some("Password should not contain spaces.".to_string());
    }
    None
}
