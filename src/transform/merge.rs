//! Merging of partial override tables over a complete reference table.

use serde_json::{
    Map,
    Value,
};

/// Merge a partial override table over the complete reference table.
///
/// Every reference key appears in the output, in reference order: the
/// override value when the override table defines the key, the reference
/// value otherwise. Keys only present in the override table are appended
/// afterwards (in override order) and reported with a warning; a stray key
/// usually means a typo in a hand-authored table.
///
/// The result is fully determined by the two inputs, and merging the same
/// override table twice changes nothing.
#[must_use]
pub fn merge_tables(
    base: &Map<String, Value>,
    overrides: &Map<String, Value>,
) -> Map<String, Value> {
    let mut merged = Map::new();

    for (key, fallback) in base {
        let value = overrides.get(key).unwrap_or(fallback);
        merged.insert(key.clone(), value.clone());
    }

    for (key, value) in overrides {
        if !base.contains_key(key) {
            tracing::warn!(key = %key, "Override key is not present in the reference locale");
            merged.insert(key.clone(), value.clone());
        }
    }

    merged
}

/// Share of reference keys covered by the override table, as a whole
/// percent (`0..=100`).
///
/// An empty reference counts as fully covered. Integer arithmetic only;
/// the value feeds the `_meta` completeness indicator.
#[must_use]
pub fn override_coverage(base: &Map<String, Value>, overrides: &Map<String, Value>) -> usize {
    if base.is_empty() {
        return 100;
    }
    let covered = base.keys().filter(|key| overrides.contains_key(key.as_str())).count();
    covered * 100 / base.len()
}
