//! Lookup configuration.
//!
//! Controls where env files are searched for, which environment variables
//! carry keys, and how multiple keys are ordered.

use std::path::{Path, PathBuf};

use crate::core::constants;

/// Order in which candidates are tried when several keys are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CandidateOrder {
    /// Iteration order of the environment. Platform-defined.
    #[default]
    Environment,
    /// Sorted by variable name.
    Lexical,
}

/// Options for locating and decoding env files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Directory env files are resolved against
    pub dir: PathBuf,
    /// Environment variable prefix carrying private keys
    pub prefix: String,
    /// File used for the bare prefix variable
    pub default_file: String,
    /// Candidate ordering policy
    pub order: CandidateOrder,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            prefix: constants::KEY_PREFIX.to_string(),
            default_file: constants::ENV_FILE.to_string(),
            order: CandidateOrder::default(),
        }
    }
}

impl Options {
    /// Default options rooted at `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::default().with_dir(dir)
    }

    pub fn with_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_default_file(mut self, file: impl Into<String>) -> Self {
        self.default_file = file.into();
        self
    }

    pub fn with_order(mut self, order: CandidateOrder) -> Self {
        self.order = order;
        self
    }
}
