//! Weakness check registry.
//!
//! Each check is a data descriptor: a predicate over the credential pair
//! plus static metadata (message templates, severity, remediation tip).
//! Evaluation order is registry order, and registry order is also report
//! order.

mod blocklist;
mod composition;
mod identity;

pub use blocklist::is_common;
pub use composition::{has_letter, has_special, has_upper, meets_min_length};
pub use identity::{contains_username, is_leet_of_username, is_swapcase_of_username};

use crate::types::Severity;

/// Default minimum password length for the `length` check.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Predicate over `(username, password)`; `true` means the check passed.
pub type Predicate = Box<dyn Fn(&str, &str) -> bool + Send + Sync>;

/// A single weakness check: predicate plus report metadata.
pub struct Check {
    /// Unique key, also useful for diagnostics.
    pub id: &'static str,
    /// Positive contribution to the total when the check passes.
    pub weight: u32,
    pub severity: Severity,
    pub predicate: Predicate,
    /// Template for the report line when the check passes.
    pub pass_msg: &'static str,
    /// Template for the report line when the check fails.
    pub fail_msg: &'static str,
    /// Optional remediation tip template, grouped by severity on failure.
    pub tip: Option<&'static str>,
    /// Extra template context beyond `username` and `password`.
    pub context: Vec<(&'static str, String)>,
}

/// Builds the fixed check sequence in mandatory evaluation order.
///
/// `min_length` parameterizes only the `length` check's threshold and its
/// message context.
pub fn build_checks(min_length: usize) -> Vec<Check> {
    vec![
        Check {
            id: "length",
            weight: 1,
            severity: Severity::High,
            predicate: Box::new(move |_, p| meets_min_length(p, min_length)),
            pass_msg: "✅ Password length is sufficient.",
            fail_msg: "❌ Password is shorter than {min_length} characters.",
            tip: Some("Use at least {min_length} characters."),
            context: vec![("min_length", min_length.to_string())],
        },
        Check {
            id: "has_letter",
            weight: 1,
            severity: Severity::Medium,
            predicate: Box::new(|_, p| has_letter(p)),
            pass_msg: "✅ Contains at least one letter.",
            fail_msg: "❌ Password does not contain any letters.",
            tip: Some("Add at least one letter."),
            context: vec![],
        },
        Check {
            id: "has_special",
            weight: 1,
            severity: Severity::Medium,
            predicate: Box::new(|_, p| has_special(p)),
            pass_msg: "✅ Contains at least one special character.",
            fail_msg: "❌ Password does not contain any special characters.",
            tip: Some("Add a special character such as ! or #."),
            context: vec![],
        },
        Check {
            id: "has_upper",
            weight: 1,
            severity: Severity::Low,
            predicate: Box::new(|_, p| has_upper(p)),
            pass_msg: "✅ Password contains uppercase letters.",
            fail_msg: "❌ Password does not contain any uppercase letters.",
            tip: Some("Mix in an uppercase letter."),
            context: vec![],
        },
        Check {
            id: "not_contains_username",
            weight: 1,
            severity: Severity::High,
            predicate: Box::new(|u, p| !contains_username(u, p)),
            pass_msg: "✅ Password does not contain the username.",
            fail_msg: "❌ Password contains the username.",
            tip: Some("Do not include your username in the password."),
            context: vec![],
        },
        Check {
            id: "not_swapcase",
            weight: 1,
            severity: Severity::Medium,
            predicate: Box::new(|u, p| !is_swapcase_of_username(u, p)),
            pass_msg: "✅ Password is not a swapcase version of the username.",
            fail_msg: "❌ Password is a swapcase version of the username.",
            tip: Some("Avoid case-flipped variants of your username."),
            context: vec![],
        },
        Check {
            id: "not_leet_of_username",
            weight: 1,
            severity: Severity::Medium,
            predicate: Box::new(|u, p| !is_leet_of_username(u, p)),
            pass_msg: "✅ Not a leet-speak version of the username.",
            fail_msg: "❌ Password is a leet-speak version of the username.",
            tip: Some("Leet substitutions of your username are easy to guess."),
            context: vec![],
        },
        Check {
            id: "not_common",
            weight: 1,
            severity: Severity::High,
            predicate: Box::new(|_, p| !is_common(p)),
            pass_msg: "✅ Not a common password.",
            fail_msg: "❌ Password is one of the most common passwords.",
            tip: Some("Pick a password that is not on common-password lists."),
            context: vec![],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_checks_order_is_fixed() {
        let ids: Vec<_> = build_checks(8).iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                "length",
                "has_letter",
                "has_special",
                "has_upper",
                "not_contains_username",
                "not_swapcase",
                "not_leet_of_username",
                "not_common",
            ]
        );
    }

    #[test]
    fn test_build_checks_weights_are_one() {
        let total: u32 = build_checks(8).iter().map(|c| c.weight).sum();
        assert_eq!(total, 8);
    }

    #[test]
    fn test_length_check_uses_min_length() {
        let checks = build_checks(12);
        let length = &checks[0];
        assert!(!(length.predicate)("u", "elevenchars"));
        assert!((length.predicate)("u", "twelve chars"));
        assert_eq!(length.context, vec![("min_length", "12".to_string())]);
    }
}
