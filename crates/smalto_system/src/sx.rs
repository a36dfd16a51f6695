//! Style-prop resolution.
//!
//! An `sx` object is a style object whose keys may be shorthand props
//! (`p`, `bgcolor`), breakpoint names, nested selectors, or plain CSS
//! properties. Resolution maps each entry against the theme and returns a
//! plain CSS style object; unrecognized keys pass through unchanged.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use smallvec::{SmallVec, smallvec};

use crate::{Theme, deep_merge, get_path};

/// Registry mapping style-prop names to their resolution rules.
pub type SxConfig = IndexMap<String, SxPropEntry>;

/// Resolution rule for a single style prop.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SxPropEntry {
    /// CSS properties receiving the resolved value. Empty keeps the prop's
    /// own name, or spreads the result when it resolves to an object.
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub css_properties: SmallVec<[String; 2]>,
    /// Dotted theme path that string values resolve through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_key: Option<String>,
    /// Built-in transform applied to numeric values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<SxTransform>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SxTransform {
    /// Resolve through the theme spacing scale.
    Spacing,
    /// Scale the theme border radius.
    BorderRadius,
}

fn spacing_entry(css_properties: &[&str]) -> SxPropEntry {
    SxPropEntry {
        css_properties: css_properties.iter().map(|p| p.to_string()).collect(),
        theme_key: None,
        transform: Some(SxTransform::Spacing),
    }
}

fn palette_entry(css_property: &str) -> SxPropEntry {
    SxPropEntry {
        css_properties: smallvec![css_property.to_string()],
        theme_key: Some("palette".to_string()),
        transform: None,
    }
}

/// The built-in resolution registry.
pub fn default_sx_config() -> SxConfig {
    let mut config = SxConfig::new();

    let spacing_props: [(&str, &[&str]); 19] = [
        ("p", &["padding"]),
        ("pt", &["paddingTop"]),
        ("pr", &["paddingRight"]),
        ("pb", &["paddingBottom"]),
        ("pl", &["paddingLeft"]),
        ("px", &["paddingLeft", "paddingRight"]),
        ("py", &["paddingTop", "paddingBottom"]),
        ("padding", &["padding"]),
        ("m", &["margin"]),
        ("mt", &["marginTop"]),
        ("mr", &["marginRight"]),
        ("mb", &["marginBottom"]),
        ("ml", &["marginLeft"]),
        ("mx", &["marginLeft", "marginRight"]),
        ("my", &["marginTop", "marginBottom"]),
        ("margin", &["margin"]),
        ("gap", &["gap"]),
        ("rowGap", &["rowGap"]),
        ("columnGap", &["columnGap"]),
    ];
    for (prop, css_properties) in spacing_props {
        config.insert(prop.to_string(), spacing_entry(css_properties));
    }

    config.insert("color".to_string(), palette_entry("color"));
    config.insert("bgcolor".to_string(), palette_entry("backgroundColor"));
    config.insert("backgroundColor".to_string(), palette_entry("backgroundColor"));
    config.insert("borderColor".to_string(), palette_entry("borderColor"));

    config.insert(
        "borderRadius".to_string(),
        SxPropEntry {
            css_properties: smallvec!["borderRadius".to_string()],
            theme_key: None,
            transform: Some(SxTransform::BorderRadius),
        },
    );

    config.insert(
        "typography".to_string(),
        SxPropEntry {
            css_properties: SmallVec::new(),
            theme_key: Some("typography".to_string()),
            transform: None,
        },
    );

    config
}

/// Resolves a style-props object against a theme.
///
/// Pure: neither the theme nor the input is mutated, and non-object inputs
/// come back unchanged.
pub fn style_function_sx(theme: &Theme, props: &Value) -> Value {
    let Value::Object(props) = props else {
        return props.clone();
    };

    let mut resolved = Map::new();

    for (key, value) in props {
        // Breakpoint names scope their body under the matching media query.
        if theme.breakpoints.values().contains_key(key) {
            let query = theme.breakpoints.up(key.as_str());
            let body = style_function_sx(theme, value);
            let merged = match resolved.get(&query) {
                Some(existing) => deep_merge(existing, &body),
                None => body,
            };
            resolved.insert(query, merged);
            continue;
        }

        match theme.sx_config().get(key) {
            Some(entry) => resolve_prop(theme, key, entry, value, &mut resolved),
            None if value.is_object() => {
                resolved.insert(key.clone(), style_function_sx(theme, value));
            }
            None => {
                resolved.insert(key.clone(), value.clone());
            }
        }
    }

    Value::Object(resolved)
}

fn resolve_prop(
    theme: &Theme,
    key: &str,
    entry: &SxPropEntry,
    raw: &Value,
    out: &mut Map<String, Value>,
) {
    let resolved = match (entry.transform, entry.theme_key.as_deref()) {
        (Some(SxTransform::Spacing), _) => match raw.as_f64() {
            Some(step) => json!(theme.spacing.css(step)),
            None => raw.clone(),
        },
        (Some(SxTransform::BorderRadius), _) => match raw.as_f64() {
            Some(scale) => json!(format!("{}px", theme.shape.border_radius * scale)),
            None => raw.clone(),
        },
        (None, Some(theme_key)) => match raw.as_str() {
            Some(path) => get_path(theme.tokens(), &format!("{theme_key}.{path}"))
                .cloned()
                .unwrap_or_else(|| raw.clone()),
            None => raw.clone(),
        },
        (None, None) => raw.clone(),
    };

    if entry.css_properties.is_empty() {
        match resolved {
            Value::Object(object) => out.extend(object),
            other => {
                out.insert(key.to_string(), other);
            }
        }
        return;
    }

    for property in &entry.css_properties {
        out.insert(property.clone(), resolved.clone());
    }
}
