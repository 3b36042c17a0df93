//! Field-level overlay merge for desired-resource documents
//!
//! A composition engine is re-invoked on every reconcile cycle against a
//! desired state that may already carry provider-populated fields (resource
//! IDs, observed conditions). Wholesale replacement would clobber those, so
//! slot writes go through an overlay: new values win, fields the patch does
//! not mention are preserved.

use serde_json::Value;

/// Overlay `patch` onto `target`.
///
/// Objects are merged recursively: every key in the patch is written into
/// the target, keys only the target has are kept. Anything that is not an
/// object on both sides (scalars, lists, nulls) is replaced wholesale by
/// the patch value.
pub fn overlay(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(&key) {
                    Some(slot) => overlay(slot, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, patch) => *target = patch,
    }
}
