//! Shared 26-letter alphabet model.
//!
//! Every engine addresses letters by their position `0..26` in one of two
//! fixed tables. Lookup is case-specific: an uppercase letter is only found
//! in [`UPPER`] and a lowercase letter only in [`LOWER`], and the same index
//! names the same letter in both.

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Uppercase table.
pub const UPPER: &[u8; ALPHABET_LEN] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase table.
pub const LOWER: &[u8; ALPHABET_LEN] = b"abcdefghijklmnopqrstuvwxyz";

/// Letter case of a classified character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Upper,
    Lower,
}

impl Case {
    /// The table letters of this case are looked up in.
    pub fn table(self) -> &'static [u8; ALPHABET_LEN] {
        match self {
            Case::Upper => UPPER,
            Case::Lower => LOWER,
        }
    }

    /// Case of `c`, or `None` for anything outside `A-Z`/`a-z`.
    pub fn of(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() {
            Some(Case::Upper)
        } else if c.is_ascii_lowercase() {
            Some(Case::Lower)
        } else {
            None
        }
    }

    /// Convert `c` to this case.
    pub fn apply(self, c: char) -> char {
        match self {
            Case::Upper => c.to_ascii_uppercase(),
            Case::Lower => c.to_ascii_lowercase(),
        }
    }
}

/// Index of `c` in its own case table together with that case.
///
/// Returns `None` for non-letters, which every engine passes through.
pub fn index_of(c: char) -> Option<(usize, Case)> {
    let case = Case::of(c)?;
    let base = case.table()[0];
    Some(((c as u8 - base) as usize, case))
}

/// Letter at `index` in the table for `case`. Indices wrap modulo 26.
pub fn letter_at(index: usize, case: Case) -> char {
    case.table()[index % ALPHABET_LEN] as char
}

/// Move `index` by a signed `delta`, wrapping into `0..26`.
pub fn shift_index(index: usize, delta: i64) -> usize {
    (index + normalize(delta)) % ALPHABET_LEN
}

/// Normalize any signed offset into its canonical residue `0..26`.
pub fn normalize(offset: i64) -> usize {
    offset.rem_euclid(ALPHABET_LEN as i64) as usize
}

/// Key material as engines consume it: letters only, upper case.
pub fn sanitize_secret(secret: &str) -> String {
    secret
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
