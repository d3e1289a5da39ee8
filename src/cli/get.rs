//! Get command.

use tracing::debug;

use crate::cli::output;
use crate::core::secrets::Secrets;
use crate::error::Result;

/// Print one value. Unset variables print an empty line.
pub fn execute(secrets: &Secrets, name: &str) -> Result<()> {
    let map = secrets.map();
    if !map.contains(name) {
        debug!(name, "variable not set");
    }
    output::lines([map.get(name).unwrap_or_default()])?;
    Ok(())
}
