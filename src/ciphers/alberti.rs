//! Rotating-disk (Alberti) cipher.
//!
//! Two concentric disks per letter case: the fixed outer disk is the plain
//! alphabet, the inner disk is a scrambled alphabet turned to
//! `initial_position` when the engine is built. While scanning the text the
//! inner disk of a case turns one step after every letter of that case.
//!
//! The turning disks live on the stack of each `transform` call. The engine
//! itself only keeps the starting disks, so every call starts from the same
//! position and repeated calls give identical output.

use super::{require_non_empty, Cipher};
use crate::alphabet::{index_of, letter_at, normalize, Case, ALPHABET_LEN};
use crate::error::Result;
use crate::kind::Direction;
use tracing::debug;

/// Inner disk letter order before any rotation
pub const INNER_DISK: &[u8; ALPHABET_LEN] = b"PJWQRSTUVZABCDEFGHIKLMNOXY";

type Disk = [u8; ALPHABET_LEN];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alberti {
    text: String,
    inner_upper: Disk,
    inner_lower: Disk,
}

impl Alberti {
    /// Build with the inner disks turned left by `initial_position` steps.
    /// Negative positions turn right; any value is reduced modulo 26.
    pub fn new(text: impl Into<String>, initial_position: i64) -> Result<Self> {
        let text = text.into();
        require_non_empty(&text, "text")?;

        let mut inner_upper = *INNER_DISK;
        inner_upper.rotate_left(normalize(initial_position));
        let inner_lower = inner_upper.map(|b| b.to_ascii_lowercase());

        debug!(initial_position, len = text.len(), "alberti cipher constructed");
        Ok(Self {
            text,
            inner_upper,
            inner_lower,
        })
    }

    /// Starting inner disk for `case`
    pub fn inner_disk(&self, case: Case) -> String {
        let disk = match case {
            Case::Upper => &self.inner_upper,
            Case::Lower => &self.inner_lower,
        };
        disk.iter().map(|&b| b as char).collect()
    }
}

impl Cipher for Alberti {
    fn transform(&self, direction: Direction) -> String {
        let mut upper = self.inner_upper;
        let mut lower = self.inner_lower;

        self.text
            .chars()
            .map(|c| {
                let Some((index, case)) = index_of(c) else {
                    return c;
                };
                let disk = match case {
                    Case::Upper => &mut upper,
                    Case::Lower => &mut lower,
                };
                let out = match direction {
                    Direction::Encode => disk[index] as char,
                    Direction::Decode => {
                        // Every disk holds all 26 letters of its case.
                        let pos = disk.iter().position(|&b| b as char == c).unwrap_or(index);
                        letter_at(pos, case)
                    }
                };
                disk.rotate_left(1);
                out
            })
            .collect()
    }
}
