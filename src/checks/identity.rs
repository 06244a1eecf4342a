//! Identity checks - passwords derived from the username.
//!
//! All three checks treat an empty username as vacuously passing: with
//! no username there is nothing to derive the password from, and the
//! substring tests would otherwise match every password.

/// Fixed leet-substitution table: (plain letter, leet character).
const LEET_TABLE: &[(char, char)] = &[
    ('a', '@'),
    ('s', '$'),
    ('o', '0'),
    ('i', '!'),
    ('e', '3'),
    ('l', '1'),
    ('t', '7'),
    ('b', '8'),
    ('g', '9'),
    ('z', '2'),
];

/// Returns `true` if the lower-cased username occurs in the lower-cased
/// password. An empty username never matches.
pub fn contains_username(username: &str, password: &str) -> bool {
    if username.is_empty() {
        return false;
    }
    password.to_lowercase().contains(&username.to_lowercase())
}

/// Returns `true` if the password is exactly the swap-case transform of
/// the username.
pub fn is_swapcase_of_username(username: &str, password: &str) -> bool {
    if username.is_empty() {
        return false;
    }
    password == swapcase(username)
}

/// Returns `true` if reversing leet substitutions on the password yields
/// a string containing the username (case-insensitively).
pub fn is_leet_of_username(username: &str, password: &str) -> bool {
    if username.is_empty() {
        return false;
    }
    unleet(password)
        .to_lowercase()
        .contains(&username.to_lowercase())
}

/// Inverts the case of every alphabetic character.
fn swapcase(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_uppercase() {
                c.to_lowercase().collect::<String>()
            } else if c.is_lowercase() {
                c.to_uppercase().collect::<String>()
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// Replaces every leet character with its plain-letter counterpart.
fn unleet(s: &str) -> String {
    s.chars()
        .map(|c| {
            LEET_TABLE
                .iter()
                .find(|(_, leet)| *leet == c)
                .map(|(plain, _)| *plain)
                .unwrap_or(c)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_username_case_insensitive() {
        assert!(contains_username("alice", "alice2024"));
        assert!(contains_username("alice", "xXAlIcEx"));
        assert!(!contains_username("alice", "bob2024"));
    }

    #[test]
    fn test_contains_username_empty_username_never_matches() {
        assert!(!contains_username("", "anything"));
        assert!(!contains_username("", ""));
    }

    #[test]
    fn test_swapcase_transform() {
        assert_eq!(swapcase("alice"), "ALICE");
        assert_eq!(swapcase("AlIcE"), "aLiCe");
        assert_eq!(swapcase("a1b2!"), "A1B2!");
    }

    #[test]
    fn test_is_swapcase_of_username() {
        assert!(is_swapcase_of_username("alice", "ALICE"));
        assert!(is_swapcase_of_username("AlIcE", "aLiCe"));
        assert!(!is_swapcase_of_username("alice", "alice"));
        assert!(!is_swapcase_of_username("", ""));
    }

    #[test]
    fn test_unleet_reverses_table() {
        assert_eq!(unleet("p@ssw0rd"), "password");
        assert_eq!(unleet("90@7"), "goat");
        assert_eq!(unleet("plain"), "plain");
    }

    #[test]
    fn test_is_leet_of_username() {
        assert!(is_leet_of_username("password", "p@ssw0rd"));
        assert!(is_leet_of_username("alice", "@1!c3"));
        assert!(!is_leet_of_username("alice", "b0b"));
        assert!(!is_leet_of_username("", "@nything"));
    }

    #[test]
    fn test_is_leet_with_surrounding_text() {
        // Username embedded inside a longer de-leeted password still fails.
        assert!(is_leet_of_username("admin", "my@dm!n2024"));
    }
}
