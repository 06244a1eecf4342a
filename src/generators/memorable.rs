//! Memorable (passphrase) password generator.

use rand::Rng;
use rand::rngs::OsRng;

use super::wordlist::WORDS;
use super::{Generate, GeneratorError, WORD_COUNT_RANGE};

/// Generates passphrases: `word_count` words drawn uniformly with
/// replacement from the embedded word list, joined by `separator`.
///
/// The separator is inserted verbatim; a separator that also appears
/// inside a word can make the output ambiguous, which is accepted
/// behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorablePasswordGenerator {
    word_count: usize,
    separator: String,
    capitalize: bool,
}

impl MemorablePasswordGenerator {
    /// Creates a generator for `word_count` words joined by `separator`.
    ///
    /// # Errors
    /// Returns [`GeneratorError::WordCountOutOfRange`] when `word_count`
    /// is outside 2-10.
    pub fn new(
        word_count: usize,
        separator: impl Into<String>,
        capitalize: bool,
    ) -> Result<Self, GeneratorError> {
        if !WORD_COUNT_RANGE.contains(&word_count) {
            return Err(GeneratorError::WordCountOutOfRange(word_count));
        }
        Ok(Self {
            word_count,
            separator: separator.into(),
            capitalize,
        })
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    fn pick_word(&self, rng: &mut impl Rng) -> String {
        let word = WORDS[rng.gen_range(0..WORDS.len())];
        if self.capitalize {
            capitalize_first(word)
        } else {
            word.to_string()
        }
    }
}

impl Default for MemorablePasswordGenerator {
    /// Four lowercase words joined by `"-"`.
    fn default() -> Self {
        Self {
            word_count: 4,
            separator: "-".to_string(),
            capitalize: false,
        }
    }
}

impl Generate for MemorablePasswordGenerator {
    fn generate(&self) -> String {
        let mut rng = OsRng;
        let words: Vec<String> = (0..self.word_count)
            .map(|_| self.pick_word(&mut rng))
            .collect();
        words.join(&self.separator)
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
