//! Shift (Caesar) cipher.

use super::Cipher;
use crate::alphabet::{index_of, letter_at, normalize};
use crate::kind::Direction;
use tracing::debug;

/// Shifts every letter by a fixed amount within its own case table.
///
/// The only engine without construction checks: empty text is accepted and
/// transforms to an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caesar {
    text: String,
    shift: usize,
}

impl Caesar {
    /// `shift` may be any integer; it is reduced to its residue in `0..26`.
    pub fn new(text: impl Into<String>, shift: i64) -> Self {
        let text = text.into();
        let shift = normalize(shift);
        debug!(shift, len = text.len(), "caesar cipher constructed");
        Self { text, shift }
    }

    /// Canonical shift in `0..26`
    pub fn shift(&self) -> usize {
        self.shift
    }
}

impl Cipher for Caesar {
    fn transform(&self, direction: Direction) -> String {
        let delta = direction.sign() * self.shift as i64;
        shift_text(&self.text, normalize(delta))
    }
}

fn shift_text(text: &str, shift: usize) -> String {
    text.chars()
        .map(|c| match index_of(c) {
            Some((index, case)) => letter_at(index + shift, case),
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_lowercase() {
        assert_eq!(Caesar::new("abc", 3).encode(), "def");
        assert_eq!(Caesar::new("xyz", 3).encode(), "abc");
    }

    #[test]
    fn test_encode_uppercase() {
        assert_eq!(Caesar::new("ABC", 3).encode(), "DEF");
        assert_eq!(Caesar::new("XYZ", 3).encode(), "ABC");
    }

    #[test]
    fn test_non_letters_pass_through() {
        assert_eq!(Caesar::new("Hello, World!", 3).encode(), "Khoor, Zruog!");
        assert_eq!(Caesar::new("123", 3).encode(), "123");
        assert_eq!(
            Caesar::new("Khoor, Zruog! 123", 3).decode(),
            "Hello, World! 123"
        );
    }

    #[test]
    fn test_large_and_negative_shifts() {
        assert_eq!(Caesar::new("abc", 29).encode(), "def");
        assert_eq!(Caesar::new("def", 29).decode(), "abc");
        assert_eq!(Caesar::new("abc", -23).encode(), "def");
        assert_eq!(Caesar::new("abc", 29).shift(), 3);
    }

    #[test]
    fn test_decode_wraps() {
        assert_eq!(Caesar::new("abc", 3).decode(), "xyz");
        assert_eq!(Caesar::new("ABC", 3).decode(), "XYZ");
    }

    #[test]
    fn test_empty_text_is_accepted() {
        let cipher = Caesar::new("", 7);
        assert_eq!(cipher.encode(), "");
        assert_eq!(cipher.decode(), "");
    }

    #[test]
    fn test_zero_shift_is_identity() {
        assert_eq!(Caesar::new("Same text", 26).encode(), "Same text");
    }
}
