//! Error types.
//!
//! The public lookup operations never fail; these errors describe the
//! internal steps that are degraded to empty results and logged.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Private key material errors.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("private key is not valid hex")]
    NotHex,

    #[error("private key must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("private key is not a valid secp256k1 scalar")]
    OutOfRange,
}

/// Decoding and decryption errors.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;
