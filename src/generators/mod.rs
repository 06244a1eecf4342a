//! Password generation strategies.
//!
//! Three independent generators share one capability: produce a password
//! string from their configured parameters. All of them draw from the
//! operating system's cryptographically secure randomness source
//! ([`rand::rngs::OsRng`]); output is used as a real credential, so a
//! seeded general-purpose PRNG is never acceptable here.

mod memorable;
mod pin;
mod random;
pub(crate) mod wordlist;

pub use memorable::MemorablePasswordGenerator;
pub use pin::PinGenerator;
pub use random::RandomPasswordGenerator;

use std::ops::RangeInclusive;

use thiserror::Error;

/// Valid output length for PIN and random passwords.
pub const LENGTH_RANGE: RangeInclusive<usize> = 4..=32;

/// Valid word count for memorable passwords.
pub const WORD_COUNT_RANGE: RangeInclusive<usize> = 2..=10;

pub(crate) const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub(crate) const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub(crate) const DIGITS: &[u8] = b"0123456789";
pub(crate) const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{}|;:,.<>?";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("password length {0} is outside the allowed range {min}-{max}",
        min = LENGTH_RANGE.start(), max = LENGTH_RANGE.end())]
    LengthOutOfRange(usize),
    #[error("word count {0} is outside the allowed range {min}-{max}",
        min = WORD_COUNT_RANGE.start(), max = WORD_COUNT_RANGE.end())]
    WordCountOutOfRange(usize),
}

/// Common capability of all generator strategies.
pub trait Generate {
    /// Produces one freshly drawn password.
    fn generate(&self) -> String;
}
