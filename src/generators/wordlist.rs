//! Embedded word list for memorable passwords.
//!
//! Read-only shared resource; safe for concurrent access from any number
//! of generator instances.

pub(crate) const WORDS: &[&str] = &[
    // Nouns
    "apple", "banana", "orange", "grape", "melon", "house", "garden", "beach",
    "mountain", "river", "coffee", "pizza", "burger", "pasta", "salad", "cloud",
    "tiger", "eagle", "horse", "dragon", "castle", "guitar", "piano", "ocean",
    "planet", "rocket", "camera", "pencil", "anchor", "bridge", "candle",
    "forest", "island", "lantern", "meadow", "harbor", "compass", "thunder",
    "willow", "marble", "copper", "silver", "feather", "ember", "canyon",
    "glacier", "prairie", "tunnel", "violet", "walnut",
    // Adjectives
    "happy", "sunny", "cloudy", "windy", "rainy", "bright", "dark", "fast",
    "slow", "cold", "hot", "tall", "short", "round", "square", "loud", "quiet",
    "fresh", "sweet", "sour", "clean", "dirty", "soft", "hard", "smooth",
    "rough", "light", "heavy", "early", "late", "new", "old", "young", "rich",
    "poor", "busy", "calm", "brave", "wise", "gentle", "mellow", "vivid",
    "sturdy", "nimble", "golden", "silent", "amber", "crisp", "bold", "keen",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wordlist_is_nonempty_lowercase_ascii() {
        assert!(WORDS.len() >= 50);
        for word in WORDS {
            assert!(!word.is_empty());
            assert!(word.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_wordlist_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }
}
