//! Layering of YAML config values.
//!
//! - Mappings merge key by key, recursively
//! - A null in the overlay removes the key
//! - Anything else in the overlay replaces the base value outright

use serde_yaml::{Mapping, Value};

/// Merge `overlay` on top of `base`.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    let (Value::Mapping(base_map), Value::Mapping(overlay_map)) = (base, overlay) else {
        return overlay.clone();
    };

    let mut merged = base_map.clone();
    for (key, value) in overlay_map {
        if value.is_null() {
            merged.remove(key);
            continue;
        }
        let combined = match merged.get(key) {
            Some(existing) => deep_merge(existing, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), combined);
    }
    Value::Mapping(merged)
}

/// Merge layers in order; the last has the highest priority.
///
/// Empty layers (a blank file parses to null) are skipped.
pub fn merge_configs(layers: &[Value]) -> Value {
    layers
        .iter()
        .filter(|layer| !layer.is_null())
        .fold(Value::Mapping(Mapping::new()), |acc, layer| {
            deep_merge(&acc, layer)
        })
}
