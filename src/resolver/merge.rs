//! Stateless deep merge over JSON documents.

use serde_json::Value;

/// Merge `overlay` onto `base`, returning the combined document.
///
/// Mappings merge recursively key by key; keys present only in the base
/// survive unchanged. Any non-mapping overlay value, sequences included,
/// replaces the base value wholesale — container definition arrays must
/// never be combined element-wise, or an override of one container would
/// leak fields into its siblings.
#[must_use]
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_entries), Value::Object(overlay_entries)) => {
            for (key, overlay_value) in overlay_entries {
                let merged = match base_entries.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                base_entries.insert(key, merged);
            }
            Value::Object(base_entries)
        }
        (_, overlay) => overlay,
    }
}
