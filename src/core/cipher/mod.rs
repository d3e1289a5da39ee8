//! Decryption primitive.
//!
//! Abstracts private-key parsing and decryption so the decoder can be driven
//! by any public-key scheme. The default backend is ECIES over secp256k1.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file (e.g., `x25519.rs`)
//! 3. Re-export from this module

use crate::error::Result;

mod ecies;

pub use self::ecies::{Ecies, PrivateKey};

/// Cryptographic backend trait.
pub trait Cipher {
    /// Type representing a parsed private key.
    type Identity;

    /// Parse key material as found in the environment.
    ///
    /// # Errors
    ///
    /// Returns `KeyError` if the key is malformed.
    fn parse_identity(&self, key: &str) -> Result<Self::Identity>;

    /// Decrypt raw ciphertext bytes.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` if the ciphertext is malformed
    /// or was not encrypted for `identity`.
    fn decrypt(&self, ciphertext: &[u8], identity: &Self::Identity) -> Result<Vec<u8>>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}
