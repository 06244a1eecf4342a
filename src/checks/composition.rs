//! Composition checks - length and character-class requirements.

/// Checks that the password reaches the minimum character count.
pub fn meets_min_length(password: &str, min_length: usize) -> bool {
    password.chars().count() >= min_length
}

/// Checks for at least one ASCII letter, either case.
pub fn has_letter(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_alphabetic())
}

/// Checks for at least one ASCII punctuation character.
pub fn has_special(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_punctuation())
}

/// Checks for at least one ASCII uppercase letter.
pub fn has_upper(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}
