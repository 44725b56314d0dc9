//! Deep merge of configuration layers.
//!
//! Tables merge recursively, key by key, so sibling keys contributed by
//! different layers coexist. Everything else (scalars, arrays, and
//! table-versus-scalar conflicts) is replaced outright by the
//! higher-precedence side.

use serde_json::{Map, Value};

/// Deep merges two values, with `overlay` taking precedence over `base`.
///
/// When both sides are tables, keys merge recursively; in every other
/// combination the overlay wins at that position.
#[must_use]
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

/// Merges layers in order, later layers taking precedence over earlier ones.
#[must_use]
pub fn deep_merge_all(layers: impl IntoIterator<Item = Map<String, Value>>) -> Map<String, Value> {
    let mut merged = Map::new();

    for layer in layers {
        for (key, overlay_value) in layer {
            let value = match merged.remove(&key) {
                Some(base_value) => deep_merge(base_value, overlay_value),
                None => overlay_value,
            };
            merged.insert(key, value);
        }
    }

    merged
}
