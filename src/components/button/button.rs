use enum_assoc::Assoc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use smalto_system::{Theme, deep_merge};

use super::{COMPONENT_NAME, styles, use_utility_classes};
use crate::utils::capitalize;

/// Visual style of a [`Button`].
#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[func(pub fn key(&self) -> &'static str)]
pub enum ButtonVariant {
    /// No surface until interaction.
    #[default]
    #[assoc(key = "text")]
    Text,
    /// Outlined with the current color.
    #[assoc(key = "outlined")]
    Outlined,
    /// Filled and elevated.
    #[assoc(key = "contained")]
    Contained,
}

/// Palette scale a [`Button`] draws its colors from. `Inherit` defers to the
/// surrounding content instead.
#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[func(pub fn key(&self) -> &'static str)]
pub enum ButtonColor {
    #[assoc(key = "inherit")]
    Inherit,
    #[default]
    #[assoc(key = "primary")]
    Primary,
    #[assoc(key = "secondary")]
    Secondary,
    #[assoc(key = "success")]
    Success,
    #[assoc(key = "error")]
    Error,
    #[assoc(key = "info")]
    Info,
    #[assoc(key = "warning")]
    Warning,
}

/// Size variants with their icon font sizes.
#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[func(pub fn key(&self) -> &'static str)]
#[func(pub fn icon_font_size(&self) -> f64)]
pub enum ButtonSize {
    #[assoc(key = "small")]
    #[assoc(icon_font_size = 18.0)]
    Small,
    #[default]
    #[assoc(key = "medium")]
    #[assoc(icon_font_size = 20.0)]
    Medium,
    #[assoc(key = "large")]
    #[assoc(icon_font_size = 22.0)]
    Large,
}

/// Resolved prop snapshot for one render.
///
/// Created fresh by every [`Button::resolve`] call and used only to select
/// conditional style fragments and utility classes; it carries no identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OwnerState {
    pub variant: ButtonVariant,
    pub color: ButtonColor,
    pub size: ButtonSize,
    pub disabled: bool,
    pub disable_elevation: bool,
    pub full_width: bool,
}

/// Class name plus style object for one rendered slot.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledSlot {
    pub class_name: String,
    pub style: Value,
}

/// Output of [`Button::resolve`]: everything a styling backend needs to
/// render the button without touching the theme again.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonRendition {
    pub owner_state: OwnerState,
    pub root: StyledSlot,
    pub label: StyledSlot,
    pub start_icon: Option<StyledSlot>,
    pub end_icon: Option<StyledSlot>,
}

/// Material-style button.
///
/// Props left unset fall back to the theme's component defaults
/// (`components.SmaltoButton.defaultProps`), then to the built-in defaults.
#[derive(Debug, Default)]
pub struct Button {
    variant: Option<ButtonVariant>,
    color: Option<ButtonColor>,
    size: Option<ButtonSize>,
    disabled: Option<bool>,
    disable_elevation: Option<bool>,
    full_width: Option<bool>,
    start_icon: Option<String>,
    end_icon: Option<String>,
    classes: Option<IndexMap<String, String>>,
    sx: Option<Value>,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn color(mut self, color: ButtonColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Removes the elevation shadows of the contained variant.
    pub fn disable_elevation(mut self, disable_elevation: bool) -> Self {
        self.disable_elevation = Some(disable_elevation);
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = Some(full_width);
        self
    }

    pub fn start_icon(mut self, icon: impl Into<String>) -> Self {
        self.start_icon = Some(icon.into());
        self
    }

    pub fn end_icon(mut self, icon: impl Into<String>) -> Self {
        self.end_icon = Some(icon.into());
        self
    }

    /// Appends a consumer class after the generated class of `key`.
    pub fn class_override(mut self, key: impl Into<String>, class: impl Into<String>) -> Self {
        self.classes
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), class.into());
        self
    }

    /// Trailing style object, resolved through the theme and merged last.
    pub fn sx(mut self, sx: Value) -> Self {
        self.sx = Some(sx);
        self
    }

    /// Resolves the button against a theme.
    ///
    /// Prop precedence is explicit props, then the theme's component
    /// defaults, then built-in defaults. Styles stack base fragments, theme
    /// style overrides, and the `sx` prop, deep-merged in that order.
    pub fn resolve(&self, theme: &Theme) -> ButtonRendition {
        let defaults = theme
            .component(COMPONENT_NAME)
            .and_then(|entry| entry.get("defaultProps"));

        let owner_state = OwnerState {
            variant: self
                .variant
                .or_else(|| default_prop(defaults, "variant"))
                .unwrap_or_default(),
            color: self
                .color
                .or_else(|| default_prop(defaults, "color"))
                .unwrap_or_default(),
            size: self
                .size
                .or_else(|| default_prop(defaults, "size"))
                .unwrap_or_default(),
            disabled: self
                .disabled
                .or_else(|| default_prop(defaults, "disabled"))
                .unwrap_or(false),
            disable_elevation: self
                .disable_elevation
                .or_else(|| default_prop(defaults, "disableElevation"))
                .unwrap_or(false),
            full_width: self
                .full_width
                .or_else(|| default_prop(defaults, "fullWidth"))
                .unwrap_or(false),
        };

        let classes = use_utility_classes(&owner_state, self.classes.as_ref());

        let mut root_style = styles::root_styles(&owner_state, theme);

        if let Some(overrides) = theme
            .component(COMPONENT_NAME)
            .and_then(|entry| entry.get("styleOverrides"))
        {
            for key in overrides_resolver_keys(&owner_state) {
                if let Some(fragment) = overrides.get(key.as_str()) {
                    root_style = deep_merge(&root_style, fragment);
                }
            }
        }

        if let Some(sx) = &self.sx {
            root_style = deep_merge(&root_style, &theme.sx(sx));
        }

        let slot = |name: &str, style: Value| StyledSlot {
            class_name: classes.get(name).cloned().unwrap_or_default(),
            style,
        };

        ButtonRendition {
            root: slot("root", root_style),
            label: slot("label", styles::label_styles()),
            start_icon: self
                .start_icon
                .as_deref()
                .map(|_| slot("startIcon", styles::start_icon_styles(&owner_state))),
            end_icon: self
                .end_icon
                .as_deref()
                .map(|_| slot("endIcon", styles::end_icon_styles(&owner_state))),
            owner_state,
        }
    }
}

/// Style-override slots applicable to an owner state, in application order.
fn overrides_resolver_keys(owner_state: &OwnerState) -> Vec<String> {
    let variant = owner_state.variant.key();
    let color = capitalize(owner_state.color.key());
    let size = capitalize(owner_state.size.key());

    let mut keys = vec![
        "root".to_string(),
        variant.to_string(),
        format!("{variant}{color}"),
        format!("size{size}"),
        format!("{variant}Size{size}"),
    ];
    if owner_state.color == ButtonColor::Inherit {
        keys.push("colorInherit".to_string());
    }
    if owner_state.disable_elevation {
        keys.push("disableElevation".to_string());
    }
    if owner_state.full_width {
        keys.push("fullWidth".to_string());
    }

    keys
}

fn default_prop<T>(defaults: Option<&Value>, key: &str) -> Option<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(defaults?.get(key)?.clone()).ok()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::theme::{ThemeOptions, create_theme};

    use super::*;

    fn default_theme() -> Theme {
        create_theme(ThemeOptions::default())
    }

    #[test]
    fn test_defaults_are_text_primary_medium() {
        let rendition = Button::new().resolve(&default_theme());

        assert_eq!(rendition.owner_state.variant, ButtonVariant::Text);
        assert_eq!(rendition.owner_state.color, ButtonColor::Primary);
        assert_eq!(rendition.owner_state.size, ButtonSize::Medium);
        assert!(rendition.root.class_name.contains("SmaltoButton-textPrimary"));
        assert_eq!(rendition.start_icon, None);
        assert_eq!(rendition.end_icon, None);
    }

    #[test]
    fn test_contained_secondary_large_classes() {
        let rendition = Button::new()
            .variant(ButtonVariant::Contained)
            .color(ButtonColor::Secondary)
            .size(ButtonSize::Large)
            .resolve(&default_theme());

        let root = &rendition.root.class_name;
        assert!(root.contains("SmaltoButton-contained"));
        assert!(root.contains("SmaltoButton-containedSecondary"));
        assert!(root.contains("SmaltoButton-sizeLarge"));
        assert!(root.contains("SmaltoButton-containedSizeLarge"));
    }

    #[test]
    fn test_theme_default_props_fill_unset_props() {
        let theme = create_theme(ThemeOptions {
            components: Some(
                json!({
                    "SmaltoButton": {
                        "defaultProps": { "variant": "outlined", "disableElevation": true },
                    }
                })
                .as_object()
                .cloned()
                .unwrap(),
            ),
            ..Default::default()
        });

        let rendition = Button::new().resolve(&theme);
        assert_eq!(rendition.owner_state.variant, ButtonVariant::Outlined);
        assert!(rendition.owner_state.disable_elevation);

        let explicit = Button::new()
            .variant(ButtonVariant::Contained)
            .resolve(&theme);
        assert_eq!(
            explicit.owner_state.variant,
            ButtonVariant::Contained,
            "explicit props should beat theme defaults"
        );
    }

    #[test]
    fn test_style_overrides_merge_in_resolver_order() {
        let theme = create_theme(ThemeOptions {
            components: Some(
                json!({
                    "SmaltoButton": {
                        "styleOverrides": {
                            "root": { "textTransform": "none", "letterSpacing": "0" },
                            "contained": { "textTransform": "lowercase" },
                        }
                    }
                })
                .as_object()
                .cloned()
                .unwrap(),
            ),
            ..Default::default()
        });

        let text = Button::new().resolve(&theme);
        assert_eq!(text.root.style["textTransform"], json!("none"));
        assert_eq!(text.root.style["letterSpacing"], json!("0"));

        let contained = Button::new()
            .variant(ButtonVariant::Contained)
            .resolve(&theme);
        assert_eq!(
            contained.root.style["textTransform"],
            json!("lowercase"),
            "variant overrides should land after root"
        );
    }

    #[test]
    fn test_sx_resolves_against_the_theme_and_wins() {
        let rendition = Button::new()
            .sx(json!({ "m": 2, "bgcolor": "secondary.main" }))
            .resolve(&default_theme());

        assert_eq!(rendition.root.style["margin"], json!("16px"));
        assert_eq!(rendition.root.style["backgroundColor"], json!("#9c27b0"));
    }

    #[test]
    fn test_disabled_adds_the_state_class() {
        let rendition = Button::new().disabled(true).resolve(&default_theme());

        assert!(rendition.owner_state.disabled);
        assert!(rendition.root.class_name.contains("Smalto-disabled"));
    }

    #[test]
    fn test_icon_slots_appear_with_icons() {
        let rendition = Button::new()
            .start_icon("save")
            .size(ButtonSize::Small)
            .resolve(&default_theme());

        let start_icon = rendition.start_icon.expect("start icon slot should exist");
        assert!(start_icon.class_name.contains("SmaltoButton-iconSizeSmall"));
        assert_eq!(start_icon.style["marginLeft"], json!(-2));
        assert_eq!(rendition.end_icon, None);
    }

    #[test]
    fn test_full_width_stretches_the_root() {
        let rendition = Button::new().full_width(true).resolve(&default_theme());

        assert!(rendition.root.class_name.contains("SmaltoButton-fullWidth"));
        assert_eq!(rendition.root.style["width"], json!("100%"));
    }

    #[test]
    fn test_class_override_appends_consumer_class() {
        let rendition = Button::new()
            .class_override("root", "app-cta")
            .resolve(&default_theme());

        assert!(rendition.root.class_name.contains("SmaltoButton-root app-cta"));
    }
}
