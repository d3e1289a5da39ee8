//! Test support utilities for dotenv-decrypt integration tests.
//!
//! Provides isolated project directories, key generation, and helper
//! commands.

#![allow(dead_code)]

pub mod assertions;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated project directory.
///
/// No process-global state is mutated: child processes get an explicit
/// environment and `.current_dir()`, and library tests pass variables
/// through an explicit `Environ` source.
pub struct Test {
    /// Temporary directory holding the env files
    pub dir: TempDir,
}

/// A generated secp256k1 keypair.
pub struct Keypair {
    /// Hex-encoded private key, as stored in DOTENV_PRIVATE_KEY*
    pub private: String,
    /// Uncompressed public key bytes
    pub public: Vec<u8>,
}

impl Keypair {
    /// Generate a fresh keypair.
    pub fn generate() -> Self {
        let (sk, pk) = ecies::utils::generate_keypair();
        Self {
            private: hex::encode(sk.serialize()),
            public: pk.serialize().to_vec(),
        }
    }

    /// Encrypt `plaintext` for this key as an `encrypted:<base64>` value.
    pub fn seal(&self, plaintext: &str) -> String {
        let ciphertext =
            ecies::encrypt(&self.public, plaintext.as_bytes()).expect("encryption failed");
        format!("encrypted:{}", STANDARD.encode(ciphertext))
    }
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with one env file written.
    pub fn with_file(name: &str, contents: &str) -> Self {
        let t = Self::new();
        t.write(name, contents);
        t
    }

    /// Write an env file into the project directory.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write env file");
        path
    }
}
