//! Tabula recta: the 26×26 square used to work Vigenère by hand.

use crate::alphabet::{letter_at, Case, ALPHABET_LEN};
use serde::Serialize;

/// Row `i`, column `j` holds the letter `(i + j) mod 26`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabulaRecta {
    rows: Vec<String>,
}

impl TabulaRecta {
    pub fn new() -> Self {
        let rows = (0..ALPHABET_LEN)
            .map(|i| {
                (0..ALPHABET_LEN)
                    .map(|j| letter_at(i + j, Case::Upper))
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Ciphertext letter for a key row and plaintext column
    pub fn lookup(&self, key: char, plain: char) -> Option<char> {
        let row = self.rows.get(upper_index(key)?)?;
        row.chars().nth(upper_index(plain)?)
    }

    /// Header line plus one labelled line per row
    pub fn render(&self) -> String {
        let mut output = String::new();
        output.push_str("  | ");
        output.push_str(&spaced(&self.rows[0]));
        output.push('\n');
        output.push_str(&format!("--+-{}\n", "-".repeat(ALPHABET_LEN * 2 - 1)));
        for row in &self.rows {
            let label = row.chars().next().unwrap_or(' ');
            output.push_str(&format!("{} | {}\n", label, spaced(row)));
        }
        output
    }
}

impl Default for TabulaRecta {
    fn default() -> Self {
        Self::new()
    }
}

fn upper_index(c: char) -> Option<usize> {
    crate::alphabet::index_of(c.to_ascii_uppercase()).map(|(i, _)| i)
}

fn spaced(row: &str) -> String {
    row.chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}
