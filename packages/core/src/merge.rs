//! Deep merge of values.
//!
//! Conflict policy: maps merge key by key, recursively. Any other pairing is
//! resolved by replacing the base with the overlay wholesale, so arrays and
//! scalars are never combined.

use crate::value::{Document, Value};

/// Merge `overlay` into `base`. The overlay wins on conflicting leaves.
pub fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Map(base_map), Value::Map(overlay_map)) => merge_documents(base_map, overlay_map),
        (base, overlay) => *base = overlay,
    }
}

/// Merge every entry of `overlay` into `base`.
pub fn merge_documents(base: &mut Document, overlay: Document) {
    for (key, value) in overlay {
        merge_entry(base, key, value);
    }
}

/// Insert `value` under `key`, merging with an existing map at that key.
pub fn merge_entry(base: &mut Document, key: String, value: Value) {
    match base.get_mut(&key) {
        Some(existing) => deep_merge(existing, value),
        None => {
            base.insert(key, value);
        }
    }
}
