//! JSON value utilities: deep merging and dotted-path access.

use serde_json::Value;

/// Deep-merges `patch` onto `base`, returning a new value.
///
/// Two objects merge key-by-key recursively; any other pairing (arrays
/// included) resolves to the right-hand side wholesale. Keys absent from
/// `patch` keep their `base` value. Neither input is mutated.
pub fn deep_merge(base: &Value, patch: &Value) -> Value {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            let mut merged = base.clone();

            for (key, patch_value) in patch {
                match merged.get_mut(key) {
                    Some(base_value) => {
                        *base_value = deep_merge(base_value, patch_value);
                    }
                    None => {
                        merged.insert(key.clone(), patch_value.clone());
                    }
                }
            }

            Value::Object(merged)
        }
        _ => patch.clone(),
    }
}

/// Folds `patches` onto `base` in order, last write wins.
pub fn deep_merge_all<'a, I>(base: &Value, patches: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    patches
        .into_iter()
        .fold(base.clone(), |merged, patch| deep_merge(&merged, patch))
}

/// Resolves a dotted path (`"palette.primary.main"`, `"shadows.2"`) within a
/// JSON tree. Array segments accept numeric indices.
pub fn get_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(root, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(|index| items.get(index)),
        _ => None,
    })
}
