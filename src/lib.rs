//! Password policy evaluation library
//!
//! This library checks candidate passwords against a named policy, an
//! ordered set of independent rules, and returns every deficiency found
//! in rule order. It also generates random passwords from a secure source.
//!
//! # Features
//!
//! - `async`: Enables cancellable, channel-based evaluation (pulls in tokio)
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! Read only by [`Policy::from_env`]:
//!
//! - `PWD_POLICY`: `basic` or `strict` (default: `strict`)
//! - `PWD_WORDLIST_PATH`: File of extra dictionary words, one per line
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{evaluate, generate, Context, Policy};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Str0ng@Passw0rd!".to_string().into());
//! let context = Context::with_owner_name("Alice");
//!
//! let verdict = evaluate(&password, &context, &Policy::basic());
//! assert!(verdict.is_strong());
//!
//! let verdict = evaluate(&password, &context, &Policy::strict());
//! for message in verdict.feedback() {
//!     println!("- {}", message);
//! }
//!
//! let fresh = generate(20).expect("OS RNG available");
//! # let _ = fresh;
//! ```

// Internal modules
mod context;
mod evaluator;
mod generator;
mod policy;
mod rules;
mod wordlist;

// Public API
pub use context::Context;
pub use evaluator::{evaluate, evaluate_str, Verdict};
pub use generator::{
    alphabet, generate, parse_length, GeneratorError, MAX_GENERATED_LENGTH, MIN_GENERATED_LENGTH,
};
pub use policy::{Policy, PolicyError, PolicyName, POLICY_ENV};
pub use rules::{Rule, RuleResult, AMBIGUOUS_CHARS, SEQUENTIAL_PATTERNS, SPECIAL_CHARS};
pub use wordlist::{wordlist_path_from_env, Wordlist, WordlistError, WORDLIST_PATH_ENV};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_cancellable, evaluate_tx, EVALUATION_DEBOUNCE};
