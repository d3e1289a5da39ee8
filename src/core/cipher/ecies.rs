//! ECIES backend implementation.
//!
//! secp256k1 keys, AES-256-GCM payloads. Ciphertexts are the ephemeral
//! uncompressed public key followed by nonce, tag and encrypted bytes.

use tracing::trace;
use zeroize::Zeroizing;

use super::Cipher;
use crate::core::constants::PRIVATE_KEY_LEN;
use crate::error::{CipherError, KeyError, Result};

/// ECIES backend using secp256k1 keys
#[derive(Debug, Clone, Copy, Default)]
pub struct Ecies;

/// A validated secp256k1 private key
#[derive(Clone)]
pub struct PrivateKey {
    bytes: Zeroizing<[u8; PRIVATE_KEY_LEN]>,
}

impl PrivateKey {
    /// Parse a hex-encoded private key
    ///
    /// # Errors
    ///
    /// Returns `KeyError` if the string is not hex, has the wrong length,
    /// or is not a valid scalar for the curve.
    pub fn from_hex(key: &str) -> Result<Self> {
        let decoded = Zeroizing::new(hex::decode(key.trim()).map_err(|_| KeyError::NotHex)?);
        if decoded.len() != PRIVATE_KEY_LEN {
            return Err(KeyError::InvalidLength {
                expected: PRIVATE_KEY_LEN,
                actual: decoded.len(),
            }
            .into());
        }

        ::ecies::SecretKey::parse_slice(&decoded).map_err(|_| KeyError::OutOfRange)?;

        let mut bytes = Zeroizing::new([0u8; PRIVATE_KEY_LEN]);
        bytes.copy_from_slice(&decoded);
        Ok(Self { bytes })
    }

    fn as_bytes(&self) -> &[u8] {
        &self.bytes[..]
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

impl Cipher for Ecies {
    type Identity = PrivateKey;

    fn name(&self) -> &'static str {
        "ecies-secp256k1"
    }

    fn parse_identity(&self, key: &str) -> Result<PrivateKey> {
        PrivateKey::from_hex(key)
    }

    fn decrypt(&self, ciphertext: &[u8], identity: &PrivateKey) -> Result<Vec<u8>> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting");

        let plaintext = ::ecies::decrypt(identity.as_bytes(), ciphertext)
            .map_err(|e| CipherError::DecryptionFailed(format!("{:?}", e)))?;

        trace!(plaintext_len = plaintext.len(), "decrypted");
        Ok(plaintext)
    }
}
