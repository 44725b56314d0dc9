//! Key paths: splitting flat dotted keys and writing into nested mappings.
//!
//! Flat string keys from the CLI and environment address arbitrarily nested
//! schema fields through a dotted key path. This module owns the two
//! operations every source adapter shares: normalizing a dotted key into
//! path segments and writing a value at that path, creating intermediate
//! tables as needed.

use serde_json::{Map, Value};

/// Separator between key-path segments in a normalized key.
pub(crate) const SEPARATOR: char = '.';

/// Splits a normalized dotted key into its path segments.
///
/// Returns `None` if any segment is empty (`""`, `"a..b"`, `".a"`, `"a."`):
/// such a key cannot address a schema field and the caller skips the write.
#[must_use]
pub fn split_key(key: &str) -> Option<Vec<String>> {
    let segments: Vec<String> = key.split(SEPARATOR).map(str::to_string).collect();

    if segments.iter().any(String::is_empty) {
        return None;
    }

    Some(segments)
}

/// Writes `value` at `segments` in `table`, creating intermediate tables.
///
/// The final segment overwrites whatever was there. A non-table value
/// occupying an intermediate position is replaced with a fresh table and
/// descent continues, since a flat default at a position one layer treats as a
/// subtree must never abort resolution.
pub fn write_path(table: &mut Map<String, Value>, segments: &[String], value: Value) {
    let Some((first, rest)) = segments.split_first() else {
        return;
    };

    if rest.is_empty() {
        table.insert(first.clone(), value);
        return;
    }

    let entry = table
        .entry(first.clone())
        .or_insert_with(|| Value::Object(Map::new()));

    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }

    if let Value::Object(child) = entry {
        write_path(child, rest, value);
    }
}
