//! Credential weakness scoring and password generation.
//!
//! Two independent subsystems with no shared runtime state:
//!
//! - **Scoring engine**: runs a fixed, ordered battery of weakness
//!   checks against a `(username, password)` pair and returns a weighted
//!   score plus a formatted report with remediation tips.
//! - **Generators**: PIN, randomized and memorable (passphrase)
//!   strategies, all drawing from the OS cryptographically secure
//!   randomness source.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_toolkit::{Generate, PinGenerator, evaluate};
//! use secrecy::SecretString;
//!
//! // Score a credential pair
//! let password = SecretString::new("Tr0ub4dor&3".to_string().into());
//! let result = evaluate(Some("newuser"), Some(&password));
//! println!("{}", result.report);
//! assert_eq!(result.percent, 100);
//!
//! // Generate a 6-digit PIN
//! let pin = PinGenerator::new(6).unwrap().generate();
//! assert_eq!(pin.len(), 6);
//! ```

// Internal modules
mod checks;
mod evaluator;
mod generators;
mod template;
mod types;

// Public API
pub use checks::{Check, DEFAULT_MIN_LENGTH, build_checks};
pub use evaluator::{evaluate, evaluate_with_min_length};
pub use generators::{
    Generate, GeneratorError, LENGTH_RANGE, MemorablePasswordGenerator, PinGenerator,
    RandomPasswordGenerator, WORD_COUNT_RANGE,
};
pub use types::{ScoreResult, SecurityLevel, Severity};
