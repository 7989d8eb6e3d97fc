//! Flattening of nested translation trees into dot-keyed tables.

use serde_json::{
    Map,
    Value,
};

use super::TransformError;

/// Maximum nesting depth accepted by [`flatten_tree`].
///
/// The hand-authored PipBox documents are 2-3 levels deep; anything past
/// this limit is treated as cyclic or corrupt input and rejected instead of
/// recursing further.
pub(crate) const MAX_DEPTH: usize = 64;

/// Flatten a nested translation tree into a dot-separated key table.
///
/// Objects are internal nodes; every other value (strings, numbers, arrays,
/// the empty object) is recorded as a leaf under its dot-joined path. The
/// returned table is insertion-ordered and has exactly one entry per leaf.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use pipbox_translation_generator::transform::flatten_tree;
///
/// let tree = json!({
///     "timer": {
///         "play": "Play",
///         "pause": "Pause"
///     }
/// });
///
/// let table = flatten_tree(&tree, ".").unwrap();
/// assert_eq!(table.get("timer.play"), Some(&json!("Play")));
/// assert_eq!(table.get("timer.pause"), Some(&json!("Pause")));
/// ```
pub fn flatten_tree(tree: &Value, separator: &str) -> Result<Map<String, Value>, TransformError> {
    let mut table = Map::new();
    flatten_value(tree, separator, None, 0, &mut table)?;
    Ok(table)
}

/// Recursive worker for [`flatten_tree`], threading the current path prefix.
fn flatten_value(
    value: &Value,
    separator: &str,
    prefix: Option<&str>,
    depth: usize,
    table: &mut Map<String, Value>,
) -> Result<(), TransformError> {
    if depth > MAX_DEPTH {
        return Err(TransformError::DepthExceeded {
            path: prefix.unwrap_or_default().to_string(),
            limit: MAX_DEPTH,
        });
    }

    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_value(child, separator, Some(&full_key), depth + 1, table)?;
            }
            Ok(())
        }
        // Arrays and the empty object are kept whole so the transform
        // inverts exactly; the UI string tables never nest through them.
        leaf => {
            if let Some(key) = prefix {
                table.insert(key.to_string(), leaf.clone());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;

    use super::*;

    /// Number of leaves in a tree, counted independently of the flattener.
    fn count_leaves(value: &Value) -> usize {
        match value {
            Value::Object(map) if !map.is_empty() => map.values().map(count_leaves).sum(),
            _ => 1,
        }
    }

    #[googletest::test]
    fn flatten_simple() {
        let tree = json!({
            "play": "Play",
            "pause": "Pause"
        });

        let table = flatten_tree(&tree, ".").unwrap();

        expect_that!(table.get("play"), some(eq(&json!("Play"))));
        expect_that!(table.get("pause"), some(eq(&json!("Pause"))));
        expect_that!(table.len(), eq(2));
    }

    #[googletest::test]
    fn flatten_nested() {
        let tree = json!({
            "timer": {
                "play": "Play",
                "pause": "Pause"
            },
            "errors": {
                "invalidTime": "Invalid time format"
            }
        });

        let table = flatten_tree(&tree, ".").unwrap();

        expect_that!(table.get("timer.play"), some(eq(&json!("Play"))));
        expect_that!(table.get("timer.pause"), some(eq(&json!("Pause"))));
        expect_that!(table.get("errors.invalidTime"), some(eq(&json!("Invalid time format"))));
        expect_that!(table.len(), eq(3));
    }

    #[googletest::test]
    fn flatten_deep_nested() {
        let tree = json!({
            "a": {
                "b": {
                    "c": "Deep value"
                }
            }
        });

        let table = flatten_tree(&tree, ".").unwrap();

        expect_that!(table.get("a.b.c"), some(eq(&json!("Deep value"))));
        expect_that!(table.len(), eq(1));
    }

    #[googletest::test]
    fn flatten_custom_separator() {
        let tree = json!({
            "timer": {
                "play": "Play"
            }
        });

        let table = flatten_tree(&tree, "/").unwrap();

        expect_that!(table.get("timer/play"), some(eq(&json!("Play"))));
    }

    #[googletest::test]
    fn flatten_keeps_non_string_leaves() {
        let tree = json!({
            "count": 42,
            "enabled": true,
            "nothing": null
        });

        let table = flatten_tree(&tree, ".").unwrap();

        expect_that!(table.get("count"), some(eq(&json!(42))));
        expect_that!(table.get("enabled"), some(eq(&json!(true))));
        expect_that!(table.get("nothing"), some(eq(&json!(null))));
    }

    #[googletest::test]
    fn flatten_keeps_arrays_whole() {
        let tree = json!({
            "menu": {
                "items": ["File", "Edit"]
            }
        });

        let table = flatten_tree(&tree, ".").unwrap();

        expect_that!(table.get("menu.items"), some(eq(&json!(["File", "Edit"]))));
        expect_that!(table.len(), eq(1));
    }

    #[googletest::test]
    fn flatten_keeps_empty_object_as_leaf() {
        let tree = json!({
            "timer": {},
            "app": { "name": "PipBox" }
        });

        let table = flatten_tree(&tree, ".").unwrap();

        expect_that!(table.get("timer"), some(eq(&json!({}))));
        expect_that!(table.get("app.name"), some(eq(&json!("PipBox"))));
        expect_that!(table.len(), eq(2));
    }

    #[googletest::test]
    fn flatten_preserves_key_order() {
        let tree = json!({
            "b": { "one": "1", "two": "2" },
            "a": "3"
        });

        let table = flatten_tree(&tree, ".").unwrap();
        let keys: Vec<String> = table.keys().cloned().collect();

        expect_that!(keys, elements_are![eq("b.one"), eq("b.two"), eq("a")]);
    }

    #[googletest::test]
    fn flatten_entry_count_equals_leaf_count() {
        let tree = json!({
            "app": { "name": "PipBox", "tagline": "Your productivity companion" },
            "timer": {
                "play": "Play",
                "presets": { "focus": "Focus Time", "break": "Break Time" }
            },
            "version": 2
        });

        let table = flatten_tree(&tree, ".").unwrap();

        expect_that!(table.len(), eq(count_leaves(&tree)));
    }

    #[googletest::test]
    fn flatten_rejects_pathological_nesting() {
        let mut tree = Value::String("leaf".to_string());
        for _ in 0..(MAX_DEPTH * 2) {
            let mut map = Map::new();
            map.insert("n".to_string(), tree);
            tree = Value::Object(map);
        }

        let result = flatten_tree(&tree, ".");

        assert!(matches!(result, Err(TransformError::DepthExceeded { limit: MAX_DEPTH, .. })));
    }
}
