//! Status command.
//!
//! Shows which keys were found, which env file each maps to, and which one
//! ended up being used.

use crate::cli::output;
use crate::core::cipher::Cipher;
use crate::core::constants::KEY_PREFIX;
use crate::core::domain::Candidate;
use crate::core::secrets::Secrets;
use crate::error::Result;

/// Whether a candidate could be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Usable,
    InvalidKey,
    MissingFile,
}

impl State {
    fn of<C: Cipher>(cipher: &C, candidate: &Candidate) -> Self {
        if cipher.parse_identity(candidate.key()).is_err() {
            State::InvalidKey
        } else if !candidate.path().is_file() {
            State::MissingFile
        } else {
            State::Usable
        }
    }

    fn label(self) -> &'static str {
        match self {
            State::Usable => "ok",
            State::InvalidKey => "invalid key",
            State::MissingFile => "file not found",
        }
    }
}

/// Show discovered candidates and the resolved file.
pub fn execute(secrets: &Secrets) -> Result<()> {
    let candidates = secrets.candidates();

    output::section("Keys");
    if candidates.is_empty() {
        output::dimmed("no private keys in environment");
        output::hint(&format!("export {}=<hex private key>", KEY_PREFIX));
        return Ok(());
    }

    let cipher = secrets.decoder().cipher();
    for candidate in &candidates {
        let path = candidate.path().display().to_string();
        let state = State::of(cipher, candidate);
        output::candidate(state == State::Usable, candidate.var(), &path, state.label());
    }

    let map = secrets.map();
    println!();
    output::section("Resolved");
    match map.source() {
        Some(source) => {
            output::kv("file", source.display());
            output::kv("variables", map.len());
            output::kv("cipher", cipher.name());
            if !map.failures().is_empty() {
                output::warn(&format!(
                    "could not decrypt: {}",
                    map.failures().join(", ")
                ));
            }
        }
        None => output::dimmed("no usable env file"),
    }

    Ok(())
}
