//! Utility-class generation and composition.

use indexmap::IndexMap;

/// State classes shared across components, so stylesheets can target states
/// without knowing which component produced them.
const GLOBAL_STATE_CLASSES: [&str; 7] = [
    "active",
    "checked",
    "disabled",
    "error",
    "focused",
    "focusVisible",
    "selected",
];

/// Uppercases the first character of a class-key fragment.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Generates the class name for one slot key of a component. State keys use
/// the shared `Smalto-` prefix instead of the component's own.
pub fn generate_utility_class(component: &str, slot: &str) -> String {
    if GLOBAL_STATE_CLASSES.contains(&slot) {
        format!("Smalto-{slot}")
    } else {
        format!("{component}-{slot}")
    }
}

/// Composes the final class string for each slot.
///
/// Every key in a slot's list maps through `get_utility_class`; when the
/// caller supplied an override class for that key it is appended right after,
/// so consumer classes always win the cascade.
pub fn compose_classes<F>(
    slots: &[(&str, Vec<String>)],
    get_utility_class: F,
    overrides: Option<&IndexMap<String, String>>,
) -> IndexMap<String, String>
where
    F: Fn(&str) -> String,
{
    let mut composed = IndexMap::new();

    for (slot, keys) in slots {
        let mut classes = Vec::new();

        for key in keys {
            classes.push(get_utility_class(key));
            if let Some(extra) = overrides.and_then(|map| map.get(key)) {
                classes.push(extra.clone());
            }
        }

        composed.insert((*slot).to_string(), classes.join(" "));
    }

    composed
}
