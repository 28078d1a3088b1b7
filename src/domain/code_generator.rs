//! Random short code generation.
//!
//! Codes are drawn from a general-purpose, non-cryptographic RNG. Short codes
//! are public identifiers, not secrets, so only uniform spread matters here.

use rand::Rng;

/// The 64 characters a generated code may contain.
pub const ALPHABET: &[u8; 64] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_-";

/// Source of candidate short codes.
///
/// The shortener asks for a fresh candidate on every attempt and filters it
/// through the same admissibility check as custom codes.
///
/// # Implementations
///
/// - [`RandomCodeGenerator`] - Uniform draws from [`ALPHABET`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces a candidate code of exactly `length` characters.
    fn generate(&self, length: usize) -> String;
}

/// Draws each character independently and uniformly from [`ALPHABET`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self, length: usize) -> String {
        let mut rng = rand::rng();

        (0..length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_64_distinct_characters() {
        let distinct: HashSet<u8> = ALPHABET.iter().copied().collect();
        assert_eq!(distinct.len(), 64);
    }

    #[test]
    fn test_generate_has_requested_length() {
        let generator = RandomCodeGenerator;

        for length in [1, 3, 6, 10] {
            assert_eq!(generator.generate(length).len(), length);
        }
    }

    #[test]
    fn test_generate_zero_length_is_empty() {
        assert!(RandomCodeGenerator.generate(0).is_empty());
    }

    #[test]
    fn test_generate_uses_alphabet_only() {
        let generator = RandomCodeGenerator;

        for _ in 0..100 {
            let code = generator.generate(10);
            assert!(code.bytes().all(|b| ALPHABET.contains(&b)), "bad code: {}", code);
        }
    }

    #[test]
    fn test_generate_produces_unique_codes() {
        let generator = RandomCodeGenerator;
        let codes: HashSet<String> = (0..1000).map(|_| generator.generate(10)).collect();

        assert_eq!(codes.len(), 1000);
    }
}
