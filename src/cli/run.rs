use crate::ciphers::{Alberti, Atbash, Caesar, Cipher, Playfair, Vigenere};
use crate::error::{CipherError, Result};
use crate::kind::{CipherKind, Direction};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Options for the encode and decode commands
#[derive(Debug, Clone, Default)]
pub struct CipherOptions {
    pub cipher: CipherKind,
    /// Caesar shift
    pub shift: Option<i64>,
    /// Vigenère and Playfair key
    pub secret: Option<String>,
    /// Alberti inner disk starting position
    pub position: Option<i64>,
}

/// Outcome of one encode or decode run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CipherReport {
    pub cipher: CipherKind,
    pub direction: Direction,
    pub input: String,
    pub output: String,
}

impl CipherReport {
    /// Plain output is just the transformed text
    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            Ok(format!("{}\n", serde_json::to_string_pretty(self)?))
        } else {
            Ok(format!("{}\n", self.output))
        }
    }
}

/// Construct the engine selected by `options` over `text`
pub fn build_cipher(text: &str, options: &CipherOptions) -> Result<Box<dyn Cipher>> {
    let cipher: Box<dyn Cipher> = match options.cipher {
        CipherKind::Caesar => {
            let shift = options.shift.ok_or(CipherError::MissingParameter("--shift"))?;
            Box::new(Caesar::new(text, shift))
        }
        CipherKind::Atbash => Box::new(Atbash::new(text)?),
        CipherKind::Vigenere => Box::new(Vigenere::new(text, required_secret(options)?)?),
        CipherKind::Alberti => {
            let position = options
                .position
                .ok_or(CipherError::MissingParameter("--position"))?;
            Box::new(Alberti::new(text, position)?)
        }
        CipherKind::Playfair => Box::new(Playfair::new(text, required_secret(options)?)?),
    };
    Ok(cipher)
}

fn required_secret(options: &CipherOptions) -> Result<&str> {
    options
        .secret
        .as_deref()
        .ok_or(CipherError::MissingParameter("--secret"))
}

/// Encode or decode `text` with the cipher selected by `options`
pub fn run_cipher(text: &str, direction: Direction, options: &CipherOptions) -> Result<CipherReport> {
    info!(cipher = %options.cipher, %direction, "running cipher");
    let cipher = build_cipher(text, options)?;
    let output = cipher.transform(direction);
    debug!(input_len = text.len(), output_len = output.len(), "transform complete");

    Ok(CipherReport {
        cipher: options.cipher,
        direction,
        input: text.to_string(),
        output,
    })
}

/// Text from the positional argument, or the contents of `input`.
/// One trailing newline is dropped from file contents.
pub fn read_text(text: Option<String>, input: Option<&Path>) -> Result<String> {
    match (text, input) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => {
            debug!(path = %path.display(), "reading text from file");
            let mut contents = std::fs::read_to_string(path)?;
            if contents.ends_with('\n') {
                contents.pop();
                if contents.ends_with('\r') {
                    contents.pop();
                }
            }
            Ok(contents)
        }
        (None, None) => Err(CipherError::MissingParameter("TEXT or --input")),
    }
}
