//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A variable name as written in the env file (e.g., DATABASE_URL).
///
/// Case-sensitive.
pub type VarName = String;

/// A hex-encoded private key as found in the environment.
pub type KeyHex = String;

/// A `NAME=value` line as returned by `Secrets::all`.
pub type Assignment = String;
