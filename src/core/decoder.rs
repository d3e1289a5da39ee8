//! Env file decoding.
//!
//! Picks the first usable candidate, reads its file and decrypts tagged
//! values. Every failure degrades to an empty or partial result.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{debug, warn};

use crate::core::cipher::Cipher;
use crate::core::domain::{Candidate, ConfigMap};
use crate::core::parser::{self, RawValue};
use crate::error::{CipherError, Result};

/// Resolves candidates into a `ConfigMap` using a cipher backend
#[derive(Debug, Clone, Default)]
pub struct Decoder<C> {
    cipher: C,
}

impl<C: Cipher> Decoder<C> {
    pub fn new(cipher: C) -> Self {
        Self { cipher }
    }

    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    /// Map of the first candidate whose key parses and whose file opens.
    ///
    /// Later candidates are not tried once a file has been read, even if
    /// some of its values fail to decrypt. Returns an empty map when no
    /// candidate is usable.
    pub fn resolve(&self, candidates: &[Candidate]) -> ConfigMap {
        for candidate in candidates {
            match self.load(candidate) {
                Ok(map) => {
                    debug!(
                        path = %candidate.path().display(),
                        entries = map.len(),
                        failures = map.failures().len(),
                        "resolved env file"
                    );
                    return map;
                }
                Err(e) => debug!(candidate = %candidate, error = %e, "skipping candidate"),
            }
        }

        debug!(candidates = candidates.len(), "no usable env file");
        ConfigMap::new()
    }

    /// Read and decode a single candidate.
    ///
    /// # Errors
    ///
    /// Returns `KeyError` if the key is malformed, or `Io` if the file
    /// cannot be opened or read. Invalid UTF-8 in the file is replaced, not
    /// rejected. Per-value decryption failures are not errors.
    pub fn load(&self, candidate: &Candidate) -> Result<ConfigMap> {
        let identity = self.cipher.parse_identity(candidate.key())?;
        let bytes = std::fs::read(candidate.path())?;
        let contents = String::from_utf8_lossy(&bytes);
        Ok(self.decode(&contents, &identity, ConfigMap::from_source(candidate.path())))
    }

    /// Decode file contents into `map`.
    pub fn decode(&self, contents: &str, identity: &C::Identity, mut map: ConfigMap) -> ConfigMap {
        for line in parser::parse(contents) {
            match line.value {
                RawValue::Plain(value) => map.insert(line.name, value),
                RawValue::Encrypted(payload) => match self.decrypt_value(payload, identity) {
                    Ok(value) => map.insert(line.name, value),
                    Err(e) => {
                        warn!(name = line.name, error = %e, "could not decrypt value");
                        map.insert_failed(line.name);
                    }
                },
            }
        }
        map
    }

    /// Decode a base64 payload and decrypt it to text.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidBase64` for a malformed payload, or
    /// `CipherError::DecryptionFailed` if the key does not match.
    pub fn decrypt_value(&self, payload: &str, identity: &C::Identity) -> Result<String> {
        let ciphertext = STANDARD.decode(payload).map_err(CipherError::from)?;
        let plaintext = self.cipher.decrypt(&ciphertext, identity)?;
        Ok(String::from_utf8_lossy(&plaintext).into_owned())
    }
}
