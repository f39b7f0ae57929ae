//! Reflection (Atbash) cipher.

use super::{require_non_empty, Cipher};
use crate::alphabet::{index_of, letter_at, ALPHABET_LEN};
use crate::error::Result;
use crate::kind::Direction;
use tracing::debug;

/// Mirrors each letter: index `i` becomes `25 - i` in the same case.
/// The mapping is its own inverse, so both directions are the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atbash {
    text: String,
}

impl Atbash {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        require_non_empty(&text, "text")?;
        debug!(len = text.len(), "atbash cipher constructed");
        Ok(Self { text })
    }
}

impl Cipher for Atbash {
    fn transform(&self, _direction: Direction) -> String {
        self.text
            .chars()
            .map(|c| match index_of(c) {
                Some((index, case)) => letter_at(ALPHABET_LEN - 1 - index, case),
                None => c,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CipherError;

    #[test]
    fn test_encode() {
        let cipher = Atbash::new("Hello World!").unwrap();
        assert_eq!(cipher.encode(), "Svool Dliow!");
    }

    #[test]
    fn test_decode() {
        let cipher = Atbash::new("Svool Dliow!").unwrap();
        assert_eq!(cipher.decode(), "Hello World!");
    }

    #[test]
    fn test_digits_pass_through() {
        let cipher = Atbash::new("Hello World! 123").unwrap();
        assert_eq!(cipher.encode(), "Svool Dliow! 123");
    }

    #[test]
    fn test_directions_agree() {
        let cipher = Atbash::new("The quick brown fox").unwrap();
        assert_eq!(cipher.encode(), cipher.decode());
    }

    #[test]
    fn test_alphabet_reverses() {
        let cipher = Atbash::new("abcdefghijklmnopqrstuvwxyz").unwrap();
        assert_eq!(cipher.encode(), "zyxwvutsrqponmlkjihgfedcba");
    }

    #[test]
    fn test_empty_text_rejected() {
        assert!(matches!(Atbash::new(""), Err(CipherError::InvalidInput(_))));
    }
}
