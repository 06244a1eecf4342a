//! Randomized password generator over a configurable character pool.

use rand::Rng;
use rand::rngs::OsRng;

use super::{DIGITS, Generate, GeneratorError, LENGTH_RANGE, LOWERCASE, SYMBOLS, UPPERCASE};

/// Generates passwords of `length` characters drawn uniformly from a
/// pool built at construction time. Letters are always in the pool;
/// digits and symbols are opt-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomPasswordGenerator {
    length: usize,
    pool: Vec<u8>,
}

impl RandomPasswordGenerator {
    /// Creates a generator with the given pool options.
    ///
    /// # Errors
    /// Returns [`GeneratorError::LengthOutOfRange`] when `length` is
    /// outside 4-32.
    pub fn new(
        length: usize,
        include_numbers: bool,
        include_symbols: bool,
    ) -> Result<Self, GeneratorError> {
        if !LENGTH_RANGE.contains(&length) {
            return Err(GeneratorError::LengthOutOfRange(length));
        }

        // Letters are unconditional, so the pool is never empty.
        let mut pool = Vec::with_capacity(
            LOWERCASE.len() + UPPERCASE.len() + DIGITS.len() + SYMBOLS.len(),
        );
        pool.extend_from_slice(LOWERCASE);
        pool.extend_from_slice(UPPERCASE);
        if include_numbers {
            pool.extend_from_slice(DIGITS);
        }
        if include_symbols {
            pool.extend_from_slice(SYMBOLS);
        }

        Ok(Self { length, pool })
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Generate for RandomPasswordGenerator {
    fn generate(&self) -> String {
        let mut rng = OsRng;
        (0..self.length)
            .map(|_| self.pool[rng.gen_range(0..self.pool.len())] as char)
            .collect()
    }
}
