//! Named policies - ordered rule sets sharing one rule catalog.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::rules::Rule;
use crate::wordlist::{wordlist_path_from_env, Wordlist, WordlistError};

/// Environment variable selecting the policy used by [`Policy::from_env`].
pub const POLICY_ENV: &str = "PWD_POLICY";

const BASIC_MIN_LENGTH: usize = 8;
const STRICT_MIN_LENGTH: usize = 16;

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Unknown policy: {0} (expected \"basic\" or \"strict\")")]
    UnknownPolicy(String),
    #[error(transparent)]
    Wordlist(#[from] WordlistError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyName {
    Basic,
    Strict,
}

impl FromStr for PolicyName {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(PolicyName::Basic),
            "strict" => Ok(PolicyName::Strict),
            _ => Err(PolicyError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for PolicyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyName::Basic => f.write_str("basic"),
            PolicyName::Strict => f.write_str("strict"),
        }
    }
}

/// An ordered set of rules. Rule order is feedback order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    name: PolicyName,
    rules: Vec<Rule>,
}

impl Policy {
    /// Eight characters plus the character class, whitespace and variety checks.
    pub fn basic() -> Self {
        Self {
            name: PolicyName::Basic,
            rules: vec![
                Rule::MinLength(BASIC_MIN_LENGTH),
                Rule::HasUppercase,
                Rule::HasLowercase,
                Rule::HasDigit,
                Rule::HasSpecial,
                Rule::NoWhitespace,
                Rule::DiversityRatio,
            ],
        }
    }

    /// Sixteen characters and the full rule catalog.
    pub fn strict() -> Self {
        Self {
            name: PolicyName::Strict,
            rules: vec![
                Rule::MinLength(STRICT_MIN_LENGTH),
                Rule::HasUppercase,
                Rule::HasLowercase,
                Rule::HasDigit,
                Rule::HasSpecial,
                Rule::NoWhitespace,
                Rule::DiversityRatio,
                Rule::NoSequential,
                Rule::NoExcessRepeat,
                Rule::NoDictionaryWord(Wordlist::builtin()),
                Rule::NoAmbiguousChars,
                Rule::NoOwnerName,
            ],
        }
    }

    pub fn named(name: PolicyName) -> Self {
        match name {
            PolicyName::Basic => Self::basic(),
            PolicyName::Strict => Self::strict(),
        }
    }

    /// Builds the policy named by `PWD_POLICY` (default `strict`).
    ///
    /// When `PWD_WORDLIST_PATH` is set, its words are added to the builtin
    /// dictionary.
    ///
    /// # Errors
    ///
    /// Returns error if the policy name is unknown or the wordlist file
    /// cannot be loaded.
    pub fn from_env() -> Result<Self, PolicyError> {
        let name = match std::env::var(POLICY_ENV) {
            Ok(value) if !value.trim().is_empty() => value.parse()?,
            _ => PolicyName::Strict,
        };

        let mut policy = Self::named(name);
        if let Some(path) = wordlist_path_from_env() {
            let words = Wordlist::builtin().extended_from_path(path)?;
            policy = policy.with_wordlist(words);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Policy configured: {} ({} rules)", policy.name, policy.rules.len());

        Ok(policy)
    }

    /// Replaces the dictionary used by the dictionary rule, if the policy has one.
    pub fn with_wordlist(mut self, words: Wordlist) -> Self {
        for rule in &mut self.rules {
            if let Rule::NoDictionaryWord(current) = rule {
                *current = words.clone();
            }
        }
        self
    }

    pub fn name(&self) -> PolicyName {
        self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The length threshold of the policy's length rule.
    pub fn min_length(&self) -> usize {
        self.rules
            .iter()
            .find_map(|rule| match rule {
                Rule::MinLength(threshold) => Some(*threshold),
                _ => None,
            })
            .unwrap_or(0)
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::strict()
    }
}

impl From<PolicyName> for Policy {
    fn from(name: PolicyName) -> Self {
        Self::named(name)
    }
}
