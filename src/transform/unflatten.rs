//! Reconstruction of nested translation trees from dot-keyed tables.

use serde_json::{
    Map,
    Value,
};

use super::TransformError;

/// Rebuild a nested translation tree from a dot-separated key table.
///
/// The inverse of [`flatten_tree`](super::flatten_tree): entries are walked
/// in table order, intermediate groups are created on demand, and the leaf
/// value is stored at the final segment. A path that is needed both as a
/// group and as a leaf (e.g. `"a"` and `"a.b"` both present) is a
/// structural conflict and is rejected rather than silently resolved.
///
/// # Examples
/// ```
/// use serde_json::{json, Map};
/// use pipbox_translation_generator::transform::unflatten_table;
///
/// let mut table = Map::new();
/// table.insert("timer.play".to_string(), json!("Play"));
/// table.insert("timer.pause".to_string(), json!("Pause"));
///
/// let tree = unflatten_table(&table, ".").unwrap();
/// assert_eq!(tree, json!({ "timer": { "play": "Play", "pause": "Pause" } }));
/// ```
pub fn unflatten_table(
    table: &Map<String, Value>,
    separator: &str,
) -> Result<Value, TransformError> {
    let mut root = Map::new();
    for (key, value) in table {
        insert_path(&mut root, key, value, separator)?;
    }
    Ok(Value::Object(root))
}

/// Insert one `(path, value)` entry, creating intermediate groups.
fn insert_path(
    root: &mut Map<String, Value>,
    key: &str,
    value: &Value,
    separator: &str,
) -> Result<(), TransformError> {
    let segments: Vec<&str> = key.split(separator).collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(TransformError::EmptySegment { key: key.to_string() });
    }
    let Some((last, parents)) = segments.split_last() else {
        return Err(TransformError::EmptySegment { key: key.to_string() });
    };

    let mut current = root;
    for (index, segment) in parents.iter().enumerate() {
        let slot = current
            .entry((*segment).to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        match slot {
            Value::Object(group) => current = group,
            _ => {
                return Err(TransformError::StructuralConflict {
                    path: joined_prefix(&segments, index, separator),
                });
            }
        }
    }

    match current.get(*last) {
        Some(Value::Object(group)) if !group.is_empty() => {
            Err(TransformError::StructuralConflict { path: key.to_string() })
        }
        _ => {
            current.insert((*last).to_string(), value.clone());
            Ok(())
        }
    }
}

/// The dot-joined path up to and including `index`, for error reporting.
fn joined_prefix(segments: &[&str], index: usize, separator: &str) -> String {
    segments.iter().take(index + 1).copied().collect::<Vec<_>>().join(separator)
}
