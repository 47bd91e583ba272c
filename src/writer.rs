//! JSON output.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::ExtractError;

/// Render `value` as JSON with two-space indentation.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ExtractError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write `value` as indented JSON to `path`, replacing any existing file.
///
/// Missing parent directories are created first.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ExtractError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| ExtractError::io(parent, e))?;
    }

    let json = to_json(value)?;
    fs::write(path, json).map_err(|e| ExtractError::io(path, e))
}
