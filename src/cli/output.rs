//! Shared CLI output helpers.
//!
//! Values go to stdout exactly as resolved; decorations and diagnostics are
//! styled and respect NO_COLOR.
//!
//! Color scheme:
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: paths, hints
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;
use std::io::{self, Write};

const RULE_WIDTH: usize = 56;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Write plain lines to stdout, one per line.
///
/// Used for machine-readable output, so nothing is styled.
pub fn lines<I, S>(items: I) -> io::Result<()>
where
    I: IntoIterator<Item = S>,
    S: Display,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for item in items {
        writeln!(out, "{}", item)?;
    }
    out.flush()
}

/// Print an error message to stderr (red).
///
/// Example: `✗ stdout closed`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a horizontal rule separator.
pub fn rule() {
    if colors_enabled() {
        println!("{}", style("─".repeat(RULE_WIDTH)).dim());
    } else {
        println!("{}", "─".repeat(RULE_WIDTH));
    }
}

/// Print a section header with a separator line.
pub fn section(title: &str) {
    header(title);
    rule();
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  file:  .env.staging`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {}  {}", style(label).dim(), style(value).bold());
    } else {
        println!("  {}  {}", label, value);
    }
}

/// Print a candidate line with a status mark.
///
/// Example: `  ✓ DOTENV_PRIVATE_KEY_CI  .env.ci`
pub fn candidate(ok: bool, var: &str, path: &str, note: &str) {
    let mark = if ok { "✓" } else { "✗" };
    if colors_enabled() {
        let mark = if ok {
            style(mark).green()
        } else {
            style(mark).red()
        };
        println!("  {} {}  {}  {}", mark, var, style(path).cyan(), style(note).dim());
    } else {
        println!("  {} {}  {}  {}", mark, var, path, note);
    }
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("⚠").yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ export DOTENV_PRIVATE_KEY=<hex>`
pub fn hint(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        println!("→ {}", msg);
    }
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", style(msg).dim());
    } else {
        println!("{}", msg);
    }
}
