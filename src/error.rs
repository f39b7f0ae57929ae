use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Letter {0:?} not found in grid")]
    GridLookupFailure(char),

    #[error("Unsupported cipher: {0}")]
    UnsupportedCipher(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CipherError>;
