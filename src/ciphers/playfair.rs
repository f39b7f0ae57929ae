//! Digraph-grid (Playfair) cipher.
//!
//! The key builds a 5×5 grid of 25 letters (J shares a cell with I). Text is
//! cut into digraphs over every character, not only letters:
//!
//! - two equal characters in a row get a filler `X` between them, and the
//!   second one starts the next digraph
//! - an odd trailing character is padded with `X`
//! - a digraph holding any non-letter is copied through unchanged
//!
//! Letter digraphs are replaced by grid position: same row shifts along the
//! row, same column shifts along the column, otherwise the two letters swap
//! columns. Decoding drops every uppercase `X` from the result, including
//! ones that were in the original text.

use super::{require_non_empty, Cipher};
use crate::alphabet::{index_of, sanitize_secret, Case, ALPHABET_LEN};
use crate::error::{CipherError, Result};
use crate::kind::Direction;
use tracing::debug;

pub const GRID_SIDE: usize = 5;
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// Inserted between doubled characters and after an odd trailing one
pub const FILLER: char = 'X';

/// Grid alphabet: the 26 letters without J
const GRID_ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Row-major 5×5 key square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [u8; GRID_CELLS],
    /// Cell index of each letter, by uppercase-table index. J points at I.
    positions: [usize; ALPHABET_LEN],
}

impl Grid {
    /// Build the grid from a secret. Non-letters in the secret are ignored.
    pub fn new(secret: &str) -> Result<Self> {
        let keyed = sanitize_secret(secret).replace('J', "I");

        let mut cells = [0u8; GRID_CELLS];
        let mut seen = [false; ALPHABET_LEN];
        let mut filled = 0;
        for c in keyed.chars().chain(GRID_ALPHABET.chars()) {
            if filled == GRID_CELLS {
                break;
            }
            let index = c as usize - 'A' as usize;
            if !seen[index] {
                seen[index] = true;
                cells[filled] = c as u8;
                filled += 1;
            }
        }

        const UNSET: usize = usize::MAX;
        let mut positions = [UNSET; ALPHABET_LEN];
        for (cell, &letter) in cells.iter().enumerate() {
            positions[(letter - b'A') as usize] = cell;
        }
        positions[(b'J' - b'A') as usize] = positions[(b'I' - b'A') as usize];

        if let Some(missing) = positions.iter().position(|&p| p == UNSET) {
            return Err(CipherError::GridLookupFailure((b'A' + missing as u8) as char));
        }

        Ok(Self { cells, positions })
    }

    /// `(row, col)` of an ASCII letter in either case
    pub fn locate(&self, letter: char) -> Option<(usize, usize)> {
        let (index, _) = index_of(letter)?;
        let cell = self.positions[index];
        Some((cell / GRID_SIDE, cell % GRID_SIDE))
    }

    /// Uppercase letter at `(row, col)`, wrapping both coordinates
    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[(row % GRID_SIDE) * GRID_SIDE + col % GRID_SIDE] as char
    }

    /// Grid rows as strings, top to bottom
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks_exact(GRID_SIDE)
            .map(|row| row.iter().map(|&b| b as char).collect())
            .collect()
    }

    /// Substitute one letter digraph.
    fn substitute(&self, a: char, b: char, direction: Direction) -> Option<(char, char)> {
        let (row_a, col_a) = self.locate(a)?;
        let (row_b, col_b) = self.locate(b)?;
        // Moving back one step is moving forward four.
        let step = match direction {
            Direction::Encode => 1,
            Direction::Decode => GRID_SIDE - 1,
        };

        let pair = if row_a == row_b {
            (self.at(row_a, col_a + step), self.at(row_b, col_b + step))
        } else if col_a == col_b {
            (self.at(row_a + step, col_a), self.at(row_b + step, col_b))
        } else {
            (self.at(row_a, col_b), self.at(row_b, col_a))
        };
        Some(pair)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfair {
    text: String,
    grid: Grid,
}

impl Playfair {
    /// Fails if `text` or `secret` is empty.
    pub fn new(text: impl Into<String>, secret: &str) -> Result<Self> {
        let text = text.into();
        require_non_empty(&text, "text")?;
        require_non_empty(secret, "secret")?;
        let grid = Grid::new(secret)?;
        debug!(grid = ?grid.rows(), len = text.len(), "playfair cipher constructed");
        Ok(Self { text, grid })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl Cipher for Playfair {
    fn transform(&self, direction: Direction) -> String {
        let mut out = String::with_capacity(self.text.len() + 2);
        for (a, b) in digraphs(&self.text) {
            if !a.is_ascii_alphabetic() || !b.is_ascii_alphabetic() {
                out.push(a);
                out.push(b);
                continue;
            }
            match self.grid.substitute(a, b, direction) {
                Some((new_a, new_b)) => {
                    out.push(match_case(a, new_a));
                    out.push(match_case(b, new_b));
                }
                // Unreachable: Grid::new guarantees a cell for every letter.
                None => {
                    out.push(a);
                    out.push(b);
                }
            }
        }

        if direction == Direction::Decode {
            out.retain(|c| c != FILLER);
        }
        out
    }
}

/// Split text into digraphs, inserting fillers for doubled characters and
/// padding an odd tail.
pub fn digraphs(text: &str) -> Vec<(char, char)> {
    let chars: Vec<char> = text
        .chars()
        .map(|c| match c {
            'J' => 'I',
            'j' => 'i',
            other => other,
        })
        .collect();

    let mut pairs = Vec::with_capacity(chars.len() / 2 + 1);
    let mut i = 0;
    while i < chars.len() {
        let a = chars[i];
        let next = chars.get(i + 1).copied().unwrap_or(FILLER);
        let b = if next == a {
            FILLER
        } else {
            i += 1;
            next
        };
        pairs.push((a, b));
        i += 1;
    }
    pairs
}

fn match_case(original: char, replacement: char) -> char {
    match Case::of(original) {
        Some(case) => case.apply(replacement),
        None => replacement,
    }
}
