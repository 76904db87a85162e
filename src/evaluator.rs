//! Policy evaluator - runs every rule of a policy and collects feedback.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::context::Context;
use crate::policy::Policy;

/// Outcome of evaluating a candidate against a policy.
///
/// A verdict is strong exactly when it carries no feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    feedback: Vec<String>,
}

impl Verdict {
    pub fn from_feedback(feedback: Vec<String>) -> Self {
        Self { feedback }
    }

    pub fn is_strong(&self) -> bool {
        self.feedback.is_empty()
    }

    /// Feedback messages in rule order.
    pub fn feedback(&self) -> &[String] {
        &self.feedback
    }

    pub fn into_feedback(self) -> Vec<String> {
        self.feedback
    }
}

/// Evaluates a candidate against every rule of `policy`.
///
/// All rules run, in policy order, whatever earlier rules reported.
///
/// # Arguments
/// * `candidate` - The password to evaluate
/// * `context` - Account data for context-sensitive rules
/// * `policy` - The rule set to apply
pub fn evaluate(candidate: &SecretString, context: &Context, policy: &Policy) -> Verdict {
    evaluate_str(candidate.expose_secret(), context, policy)
}

/// Same as [`evaluate`], for callers holding a plain string.
pub fn evaluate_str(candidate: &str, context: &Context, policy: &Policy) -> Verdict {
    let mut feedback = Vec::new();

    for rule in policy.rules() {
        if let Some(message) = rule.check(candidate, context) {
            #[cfg(feature = "tracing")]
            tracing::debug!(rule = rule.id(), "rule violated");
            feedback.push(message);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        policy = %policy.name(),
        violations = feedback.len(),
        "evaluation finished"
    );

    Verdict::from_feedback(feedback)
}

/// Evaluates with cancellation, checked before each rule.
///
/// Returns `None` if the token was cancelled before all rules ran.
#[cfg(feature = "async")]
pub fn evaluate_cancellable(
    candidate: &SecretString,
    context: &Context,
    policy: &Policy,
    token: &CancellationToken,
) -> Option<Verdict> {
    let pwd = candidate.expose_secret();
    let mut feedback = Vec::new();

    for rule in policy.rules() {
        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::debug!(policy = %policy.name(), "evaluation cancelled");
            return None;
        }
        if let Some(message) = rule.check(pwd, context) {
            feedback.push(message);
        }
    }

    Some(Verdict::from_feedback(feedback))
}

/// Delay before an async evaluation starts, so rapid re-typing can cancel it.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Async version that sends the verdict via channel.
///
/// Nothing is sent if the token is cancelled.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    candidate: &SecretString,
    context: &Context,
    policy: &Policy,
    token: CancellationToken,
    tx: mpsc::Sender<Verdict>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(EVALUATION_DEBOUNCE).await;
    let Some(verdict) = evaluate_cancellable(candidate, context, policy, &token) else {
        return;
    };

    if let Err(_e) = tx.send(verdict).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password verdict: {}", _e);
    }
}
