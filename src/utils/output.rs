use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

/// Writes one result line: `value` as JSON when `json` is set, otherwise `text()`.
pub fn write_result<W: Write, T: Serialize>(
    out: &mut W,
    value: &T,
    json: bool,
    text: impl FnOnce() -> String,
) -> Result<()> {
    let line = if json {
        serde_json::to_string(value)?
    } else {
        text()
    };

    writeln!(out, "{}", line)?;
    Ok(())
}
