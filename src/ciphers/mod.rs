//! The five cipher engines.
//!
//! Each engine is an immutable value built by a validating constructor.
//! `encode` and `decode` are thin wrappers over a single
//! [`Cipher::transform`] driven by [`Direction`], so both directions share
//! one code path.

pub mod alberti;
pub mod atbash;
pub mod caesar;
pub mod playfair;
pub mod vigenere;

pub use alberti::Alberti;
pub use atbash::Atbash;
pub use caesar::Caesar;
pub use playfair::Playfair;
pub use vigenere::Vigenere;

use crate::kind::Direction;

/// Symmetric encode/decode contract shared by every engine.
pub trait Cipher {
    /// Run the transform over the engine's stored text.
    fn transform(&self, direction: Direction) -> String;

    fn encode(&self) -> String {
        self.transform(Direction::Encode)
    }

    fn decode(&self) -> String {
        self.transform(Direction::Decode)
    }
}

/// Reject an empty required string parameter.
pub(crate) fn require_non_empty(value: &str, what: &str) -> crate::Result<()> {
    if value.is_empty() {
        return Err(crate::CipherError::InvalidInput(format!(
            "{} cannot be empty",
            what
        )));
    }
    Ok(())
}
