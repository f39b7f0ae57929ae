//! Classicrypt - classical substitution ciphers
//!
//! Five pre-modern ciphers behind one symmetric contract. None of them is
//! secure; they exist for teaching and puzzles.
//!
//! | Cipher   | Engine                    | Key material          |
//! |----------|---------------------------|-----------------------|
//! | Caesar   | [`ciphers::Caesar`]       | integer shift         |
//! | Atbash   | [`ciphers::Atbash`]       | none                  |
//! | Vigenère | [`ciphers::Vigenere`]     | secret word           |
//! | Alberti  | [`ciphers::Alberti`]      | initial disk position |
//! | Playfair | [`ciphers::Playfair`]     | secret word           |
//!
//! Every engine is built by a constructor that validates its parameters and
//! returns an immutable value. [`Cipher::encode`] and [`Cipher::decode`] can
//! then be called any number of times and always return the same result.
//! Letters keep their case; anything outside `A-Z`/`a-z` passes through.
//!
//! ## Example
//!
//! ```
//! use classicrypt::{Cipher, Playfair, Vigenere};
//!
//! let vigenere = Vigenere::new("Hello World!", "KEY").unwrap();
//! assert_eq!(vigenere.encode(), "Rijvs Uyvjn!");
//!
//! let playfair = Playfair::new("GyiZsc Wkcgc!X", "keyword").unwrap();
//! assert_eq!(playfair.decode(), "Hello World!");
//! ```

pub mod alphabet;
pub mod ciphers;
pub mod cli;
pub mod error;
pub mod kind;
pub mod random;
pub mod table;

pub use ciphers::{Alberti, Atbash, Caesar, Cipher, Playfair, Vigenere};
pub use error::{CipherError, Result};
pub use kind::{CipherKind, Direction};
pub use table::TabulaRecta;
