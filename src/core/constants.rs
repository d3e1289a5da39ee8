//! Constants used throughout dotenv-decrypt.
//!
//! Centralizes magic strings and configuration values.

/// Environment variable prefix carrying private keys (DOTENV_PRIVATE_KEY).
pub const KEY_PREFIX: &str = "DOTENV_PRIVATE_KEY";

/// Default environment file name (.env).
pub const ENV_FILE: &str = ".env";

/// Marker prefixing an encrypted, base64-encoded value.
pub const ENCRYPTED_MARKER: &str = "encrypted:";

/// Keyword optionally preceding a variable name.
pub const EXPORT_KEYWORD: &str = "export ";

/// Environment variable read by the CLI for its log filter.
pub const LOG_ENV: &str = "DOTENV_DECRYPT_LOG";

/// Length in bytes of a secp256k1 private key.
pub const PRIVATE_KEY_LEN: usize = 32;
