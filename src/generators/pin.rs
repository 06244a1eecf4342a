//! PIN code generator - digits only.

use rand::Rng;
use rand::rngs::OsRng;

use super::{DIGITS, Generate, GeneratorError, LENGTH_RANGE};

/// Generates PIN codes: `length` digits drawn uniformly from `0-9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinGenerator {
    length: usize,
}

impl PinGenerator {
    /// Creates a generator for PINs of exactly `length` digits.
    ///
    /// # Errors
    /// Returns [`GeneratorError::LengthOutOfRange`] when `length` is
    /// outside 4-32.
    pub fn new(length: usize) -> Result<Self, GeneratorError> {
        if !LENGTH_RANGE.contains(&length) {
            return Err(GeneratorError::LengthOutOfRange(length));
        }
        Ok(Self { length })
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Generate for PinGenerator {
    fn generate(&self) -> String {
        let mut rng = OsRng;
        (0..self.length)
            .map(|_| DIGITS[rng.gen_range(0..DIGITS.len())] as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_has_exact_length() {
        let generator = PinGenerator::new(6).expect("valid length");
        for _ in 0..50 {
            assert_eq!(generator.generate().len(), 6);
        }
    }

    #[test]
    fn test_pin_is_digits_only() {
        let generator = PinGenerator::new(32).expect("valid length");
        for _ in 0..20 {
            assert!(generator.generate().chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_pin_rejects_out_of_range_length() {
        assert_eq!(
            PinGenerator::new(3),
            Err(GeneratorError::LengthOutOfRange(3))
        );
        assert_eq!(
            PinGenerator::new(33),
            Err(GeneratorError::LengthOutOfRange(33))
        );
        assert_eq!(PinGenerator::new(0), Err(GeneratorError::LengthOutOfRange(0)));
    }

    #[test]
    fn test_pin_boundary_lengths_accepted() {
        assert!(PinGenerator::new(4).is_ok());
        assert!(PinGenerator::new(32).is_ok());
    }
}
