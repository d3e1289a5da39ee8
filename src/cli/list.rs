//! Default command: print every resolved variable.

use crate::cli::output;
use crate::core::secrets::Secrets;
use crate::error::Result;

/// Print `NAME=value` lines, or a JSON object with `json`.
pub fn execute(secrets: &Secrets, json: bool) -> Result<()> {
    if json {
        let map = secrets.map();
        output::lines([serde_json::to_string_pretty(&*map)?])?;
    } else {
        output::lines(secrets.all())?;
    }
    Ok(())
}
