//! Owner rule - the candidate must not embed the account owner's name.

use crate::context::Context;
use super::RuleResult;

pub fn owner_name_rule(candidate: &str, context: &Context) -> RuleResult {
    let name = context.owner_name()?;
    if candidate.to_lowercase().contains(&name.to_lowercase()) {
        return Some(format!("Password should not contain your name: {}.", name));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_name_case_insensitive() {
        let ctx = Context::with_owner_name("Alice");
        assert_eq!(
            owner_name_rule("xx#aLiCe99", &ctx),
            Some("Password should not contain your name: Alice.".to_string())
        );
    }

    #[test]
    fn test_owner_name_absent() {
        assert_eq!(owner_name_rule("anything", &Context::default()), None);
    }

    #[test]
    fn test_owner_name_empty_never_matches() {
        let ctx = Context::with_owner_name("");
        assert_eq!(owner_name_rule("anything", &ctx), None);
        assert_eq!(owner_name_rule("", &ctx), None);
    }

    #[test]
    fn test_owner_name_not_present() {
        let ctx = Context::with_owner_name("Bob");
        assert_eq!(owner_name_rule("Tr7#kWm9$vBx4&Zp", &ctx), None);
    }
}
