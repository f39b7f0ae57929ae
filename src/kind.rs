use crate::error::{CipherError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which way a transform runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encode,
    Decode,
}

impl Direction {
    /// Sign applied to a key-derived shift in this direction
    pub fn sign(self) -> i64 {
        match self {
            Direction::Encode => 1,
            Direction::Decode => -1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encode => write!(f, "encode"),
            Direction::Decode => write!(f, "decode"),
        }
    }
}

/// Supported ciphers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    #[default]
    Caesar,
    Atbash,
    Vigenere,
    Alberti,
    Playfair,
}

impl CipherKind {
    pub const ALL: [CipherKind; 5] = [
        CipherKind::Caesar,
        CipherKind::Atbash,
        CipherKind::Vigenere,
        CipherKind::Alberti,
        CipherKind::Playfair,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CipherKind::Caesar => "Caesar Cipher",
            CipherKind::Atbash => "Atbash Cipher",
            CipherKind::Vigenere => "Vigenère Cipher",
            CipherKind::Alberti => "Alberti Cipher",
            CipherKind::Playfair => "Playfair Cipher",
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            CipherKind::Caesar | CipherKind::Atbash => "Substitution",
            CipherKind::Vigenere | CipherKind::Alberti => "Polyalphabetic",
            CipherKind::Playfair => "Digraph",
        }
    }

    /// Key material the cipher needs besides the text
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            CipherKind::Caesar => Some("--shift"),
            CipherKind::Atbash => None,
            CipherKind::Vigenere | CipherKind::Playfair => Some("--secret"),
            CipherKind::Alberti => Some("--position"),
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CipherKind::Caesar => "caesar",
            CipherKind::Atbash => "atbash",
            CipherKind::Vigenere => "vigenere",
            CipherKind::Alberti => "alberti",
            CipherKind::Playfair => "playfair",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for CipherKind {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "caesar" | "shift" => Ok(Self::Caesar),
            "atbash" | "reflection" => Ok(Self::Atbash),
            "vigenere" | "vigenère" | "keyed" => Ok(Self::Vigenere),
            "alberti" | "disk" => Ok(Self::Alberti),
            "playfair" | "grid" => Ok(Self::Playfair),
            _ => Err(CipherError::UnsupportedCipher(s.to_string())),
        }
    }
}
