//! Config-file source adapter.
//!
//! Parses an optional TOML file into a nested mapping, verbatim: values
//! are already typed by the serialization format, so no coercion applies.
//! Schema checking happens later; unknown or mistyped keys are caught by
//! the binder, not here.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::ConfigError;

/// Loads the config-file layer.
///
/// No path, or a path that points at no file, yields an empty layer. An
/// existing file that cannot be read or parsed is fatal; malformed input
/// is surfaced, never silently ignored.
///
/// # Errors
///
/// Returns [`ConfigError::FileRead`] or [`ConfigError::FileParse`] for an
/// existing file that fails to load.
pub fn load(path: Option<&Path>) -> Result<Map<String, Value>, ConfigError> {
    let Some(path) = path else {
        return Ok(Map::new());
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, layer is empty");
        return Ok(Map::new());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let value: Value = toml::from_str(&content).map_err(|e| ConfigError::FileParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    // A TOML document always deserializes to a table at the top level.
    match value {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}
