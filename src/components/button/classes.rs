//! Utility classes for the button slots.

use indexmap::IndexMap;

use crate::utils::{capitalize, compose_classes, generate_utility_class};

use super::{ButtonColor, OwnerState};

/// Component name used for class generation and theme override lookup.
pub const COMPONENT_NAME: &str = "SmaltoButton";

/// Generates the class name for one button slot key.
pub fn button_utility_class(slot: &str) -> String {
    generate_utility_class(COMPONENT_NAME, slot)
}

pub(crate) fn use_utility_classes(
    owner_state: &OwnerState,
    class_overrides: Option<&IndexMap<String, String>>,
) -> IndexMap<String, String> {
    let variant = owner_state.variant.key();
    let color = capitalize(owner_state.color.key());
    let size = capitalize(owner_state.size.key());

    let mut root = vec![
        "root".to_string(),
        variant.to_string(),
        format!("{variant}{color}"),
        format!("size{size}"),
        format!("{variant}Size{size}"),
    ];
    if owner_state.color == ButtonColor::Inherit {
        root.push("colorInherit".to_string());
    }
    if owner_state.disable_elevation {
        root.push("disableElevation".to_string());
    }
    if owner_state.full_width {
        root.push("fullWidth".to_string());
    }
    if owner_state.disabled {
        root.push("disabled".to_string());
    }

    let slots = [
        ("root", root),
        ("label", vec!["label".to_string()]),
        (
            "startIcon",
            vec!["startIcon".to_string(), format!("iconSize{size}")],
        ),
        (
            "endIcon",
            vec!["endIcon".to_string(), format!("iconSize{size}")],
        ),
    ];

    compose_classes(&slots, button_utility_class, class_overrides)
}
