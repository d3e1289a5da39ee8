//! Env file line parsing.
//!
//! Turns one raw line into at most one assignment. Decryption happens in the
//! decoder; the parser only recognizes the encrypted marker.

use crate::core::constants::{ENCRYPTED_MARKER, EXPORT_KEYWORD};

/// Right-hand side of an assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue<'a> {
    /// Plain text, used verbatim
    Plain(&'a str),
    /// Base64 payload following the encrypted marker
    Encrypted(&'a str),
}

/// One parsed assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    pub name: &'a str,
    pub value: RawValue<'a>,
}

/// Parse a single line.
///
/// Returns `None` for comments, for lines without `=`, and for lines whose
/// name is empty once `export ` is removed.
pub fn parse_line(line: &str) -> Option<Line<'_>> {
    if line.starts_with('#') {
        return None;
    }

    let (name, raw) = line.split_once('=')?;
    let name = name.strip_prefix(EXPORT_KEYWORD).unwrap_or(name);
    if name.is_empty() {
        return None;
    }
    let value = unquote(raw.trim());

    let value = match value.strip_prefix(ENCRYPTED_MARKER) {
        Some(payload) => RawValue::Encrypted(payload),
        None => RawValue::Plain(value),
    };

    Some(Line { name, value })
}

/// Parse every line of `contents`, skipping lines that carry no assignment.
pub fn parse(contents: &str) -> impl Iterator<Item = Line<'_>> {
    contents.lines().filter_map(parse_line)
}

/// Strip one pair of matching surrounding quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
