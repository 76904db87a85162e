//! Evaluation context - auxiliary data consulted by context-sensitive rules.

/// Data about the account the candidate password belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    owner_name: Option<String>,
}

impl Context {
    /// Context carrying the account owner's display name.
    pub fn with_owner_name(name: impl Into<String>) -> Self {
        Self {
            owner_name: Some(name.into()),
        }
    }

    /// The owner name, or `None` when absent or blank.
    pub fn owner_name(&self) -> Option<&str> {
        self.owner_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}
