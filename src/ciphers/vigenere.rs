//! Keyed-shift (Vigenère) cipher.
//!
//! The sanitized secret is cycled as a key stream. The key cursor only
//! moves when a letter is consumed from the text, so punctuation and spaces
//! never use up key letters: `"HELLO WORLD"` and `"HELLOWORLD"` encrypt to
//! the same letters.

use super::{require_non_empty, Cipher};
use crate::alphabet::{index_of, letter_at, sanitize_secret, shift_index, Case};
use crate::error::{CipherError, Result};
use crate::kind::Direction;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    text: String,
    /// Key letters as uppercase-table indices. Never empty.
    key: Vec<usize>,
}

impl Vigenere {
    /// Fails if `text` is empty or `secret` has no letters.
    pub fn new(text: impl Into<String>, secret: &str) -> Result<Self> {
        let text = text.into();
        require_non_empty(&text, "text")?;
        let secret = sanitize_secret(secret);
        if secret.is_empty() {
            return Err(CipherError::InvalidInput(
                "secret must contain at least one letter".into(),
            ));
        }

        let key = secret
            .chars()
            .filter_map(index_of)
            .map(|(index, _)| index)
            .collect();
        debug!(key_len = secret.len(), len = text.len(), "vigenere cipher constructed");
        Ok(Self { text, key })
    }

    /// The key as it is applied: letters only, upper case
    pub fn secret(&self) -> String {
        self.key
            .iter()
            .map(|&i| letter_at(i, Case::Upper))
            .collect()
    }
}

impl Cipher for Vigenere {
    fn transform(&self, direction: Direction) -> String {
        let mut stream = self.key.iter().cycle();
        self.text
            .chars()
            .map(|c| match index_of(c) {
                Some((index, case)) => {
                    // `key` is non-empty, so the cycle never ends.
                    let key = stream.next().copied().unwrap_or_default();
                    letter_at(shift_index(index, direction.sign() * key as i64), case)
                }
                None => c,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_encoding() {
        let cipher = Vigenere::new("Hello World!", "KEY").unwrap();
        assert_eq!(cipher.encode(), "Rijvs Uyvjn!");
    }

    #[test]
    fn test_basic_decoding() {
        let cipher = Vigenere::new("Rijvs, Uyvjn!", "KEY").unwrap();
        assert_eq!(cipher.decode(), "Hello, World!");
    }

    #[test]
    fn test_long_secret() {
        let cipher = Vigenere::new("EXAMPLE-EXAMPLE-EXAMPLE", "EXAMPLEEXAMPLE").unwrap();
        assert_eq!(cipher.encode(), "IUAYEWI-IUAYEWI-IUAYEWI");
    }

    #[test]
    fn test_short_secret_repeats() {
        let cipher = Vigenere::new("THEEXAMPLEVIGENERE", "KEY").unwrap();
        assert_eq!(cipher.encode(), "DLCOBYWTJOZGQILOVC");
        let back = Vigenere::new("DLCOBYWTJOZGQILOVC", "KEY").unwrap();
        assert_eq!(back.decode(), "THEEXAMPLEVIGENERE");
    }

    #[test]
    fn test_non_letters_do_not_consume_key() {
        let spaced = Vigenere::new("HELLO WORLD", "KEY").unwrap().encode();
        let packed = Vigenere::new("HELLOWORLD", "KEY").unwrap().encode();
        assert_eq!(spaced, "RIJVS UYVJN");
        assert_eq!(spaced.replace(' ', ""), packed);
        assert_eq!(Vigenere::new("HELLO123", "KEY").unwrap().encode(), "RIJVS123");
    }

    #[test]
    fn test_secret_is_sanitized() {
        let cipher = Vigenere::new("Hello World!", "k-e y!").unwrap();
        assert_eq!(cipher.secret(), "KEY");
        assert_eq!(cipher.encode(), "Rijvs Uyvjn!");
    }

    #[test]
    fn test_empty_inputs_rejected() {
        assert!(matches!(
            Vigenere::new("", "KEY"),
            Err(CipherError::InvalidInput(_))
        ));
        assert!(matches!(
            Vigenere::new("HELLO", ""),
            Err(CipherError::InvalidInput(_))
        ));
        assert!(matches!(
            Vigenere::new("HELLO", "1234 !"),
            Err(CipherError::InvalidInput(_))
        ));
    }
}
