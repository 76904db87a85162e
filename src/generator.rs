//! Secure password generator.
//!
//! Draws each character independently and uniformly from letters, digits
//! and the special characters accepted by the special-character rule,
//! using a ChaCha `StdRng` seeded from the operating system's RNG.
//!
//! Output is not filtered against the pattern rules: a generated password
//! may still repeat a character three times or contain a listed sequence.

use rand::distributions::Uniform;
use rand::rngs::{OsRng, StdRng};
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use secrecy::SecretString;
use thiserror::Error;

use crate::rules::SPECIAL_CHARS;

/// Shortest password the generator produces, matching the strict policy.
pub const MIN_GENERATED_LENGTH: usize = 16;

/// Longest password the generator produces.
pub const MAX_GENERATED_LENGTH: usize = 4096;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Password length must be between {minimum} and {maximum}, got {requested}")]
    InvalidLength {
        requested: usize,
        minimum: usize,
        maximum: usize,
    },
    #[error("Not a valid length: {0:?}")]
    InvalidNumericInput(String),
    #[error("Secure random source unavailable: {0}")]
    RandomSource(#[from] rand::Error),
}

/// All characters a generated password may contain.
pub fn alphabet() -> Vec<u8> {
    (b'A'..=b'Z')
        .chain(b'a'..=b'z')
        .chain(b'0'..=b'9')
        .chain(SPECIAL_CHARS.bytes())
        .collect()
}

/// Generates a password of exactly `length` characters.
///
/// The value is only returned, never logged.
///
/// # Errors
///
/// - `InvalidLength` if `length` is outside
///   [`MIN_GENERATED_LENGTH`]..=[`MAX_GENERATED_LENGTH`]
/// - `RandomSource` if the OS RNG cannot seed the generator
pub fn generate(length: usize) -> Result<SecretString, GeneratorError> {
    generate_from(&mut OsRng, length)
}

/// Seeds a ChaCha-based `StdRng` from `seed_source` and samples from it.
pub(crate) fn generate_from<R: RngCore + CryptoRng>(
    seed_source: &mut R,
    length: usize,
) -> Result<SecretString, GeneratorError> {
    check_length(length)?;

    let rng = StdRng::from_rng(seed_source)?;
    let alphabet = alphabet();
    let password: String = rng
        .sample_iter(Uniform::from(0..alphabet.len()))
        .take(length)
        .map(|i| alphabet[i] as char)
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(length, "password generated");

    Ok(SecretString::new(password.into()))
}

fn check_length(length: usize) -> Result<(), GeneratorError> {
    if !(MIN_GENERATED_LENGTH..=MAX_GENERATED_LENGTH).contains(&length) {
        return Err(GeneratorError::InvalidLength {
            requested: length,
            minimum: MIN_GENERATED_LENGTH,
            maximum: MAX_GENERATED_LENGTH,
        });
    }
    Ok(())
}

/// Parses a user-typed length for [`generate`].
///
/// # Errors
///
/// - `InvalidNumericInput` if `input` is not a non-negative integer
/// - `InvalidLength` if the number is outside the accepted range
pub fn parse_length(input: &str) -> Result<usize, GeneratorError> {
    let input = input.trim();
    let length: usize = input
        .parse()
        .map_err(|_| GeneratorError::InvalidNumericInput(input.to_string()))?;

    check_length(length)?;
    Ok(length)
}
