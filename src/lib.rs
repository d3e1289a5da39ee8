//! dotenv-decrypt - load .env files and decrypt encrypted values at runtime.
//!
//! Private keys are read from `DOTENV_PRIVATE_KEY*` environment variables.
//! Each key selects an env file (`DOTENV_PRIVATE_KEY` → `.env`,
//! `DOTENV_PRIVATE_KEY_PRODUCTION` → `.env.production`); the first file that
//! opens with a valid key is parsed and its `encrypted:<base64>` values are
//! decrypted.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── list          # Print all NAME=value lines
//! │   ├── get           # Print one value
//! │   ├── status        # Show keys and the file in use
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # Lookup options
//!     ├── environ       # Environment variable sources
//!     ├── locator       # Key discovery and file naming
//!     ├── parser        # Env file line parsing
//!     ├── decoder       # Candidate selection and decryption
//!     ├── cipher/       # Decryption backends
//!     │   ├── mod       # Cipher trait
//!     │   └── ecies     # ECIES secp256k1 implementation
//!     ├── domain/       # Candidate, ConfigMap
//!     └── secrets       # Memoizing lookup handle
//! ```
//!
//! # Failure model
//!
//! Lookups never fail. Missing keys or files give empty results, and a
//! value that cannot be decrypted reads as the empty string (and is listed
//! by [`ConfigMap::failures`]). Details are reported through `tracing`.

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::config::{CandidateOrder, Options};
pub use crate::core::domain::{Candidate, ConfigMap};
pub use crate::core::secrets::Secrets;
