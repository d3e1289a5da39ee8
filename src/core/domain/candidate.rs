//! Candidate type.
//!
//! A proposed env file paired with the private key that should decrypt it.

use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::core::types::{KeyHex, VarName};

/// An env file path paired with key material from the environment
#[derive(Clone)]
pub struct Candidate {
    var: VarName,
    path: PathBuf,
    key: Zeroizing<KeyHex>,
}

impl Candidate {
    /// Create a candidate for `path` using the key held in variable `var`
    pub fn new(var: impl Into<VarName>, path: impl Into<PathBuf>, key: impl Into<KeyHex>) -> Self {
        Self {
            var: var.into(),
            path: path.into(),
            key: Zeroizing::new(key.into()),
        }
    }

    /// Environment variable the key came from
    pub fn var(&self) -> &str {
        &self.var
    }

    /// Env file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Hex-encoded private key
    pub fn key(&self) -> &str {
        &self.key
    }
}

// Key material stays out of logs and panic messages.
impl std::fmt::Debug for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Candidate")
            .field("var", &self.var)
            .field("path", &self.path)
            .field("key", &"<redacted>")
            .finish()
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.var, self.path.display())
    }
}
