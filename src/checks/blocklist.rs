//! Embedded common-password blocklist.
//!
//! Matching is case-insensitive: both the stored entries and the probed
//! password are lower-cased before comparison.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Fixed common-password set. Entries mix cases as published; the lookup
/// normalizes them.
const COMMON_PASSWORDS: &[&str] = &[
    "123456",
    "password",
    "123456789",
    "12345678",
    "12345",
    "111111",
    "1234567",
    "admin",
    "qwerty",
    "P@ssw0rd",
    "zxcvbnm",
];

static COMMON_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    COMMON_PASSWORDS
        .iter()
        .map(|p| p.to_lowercase())
        .collect()
});

/// Returns `true` if the password is in the common-password set.
pub fn is_common(password: &str) -> bool {
    COMMON_SET.contains(&password.to_lowercase())
}
