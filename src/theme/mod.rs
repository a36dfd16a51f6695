//! Builtin themes and theme construction on top of the default tokens.
//!
//! The default design tokens live in `themes/default.json` and are bundled
//! into the binary. [`create_theme`] folds caller options onto them, so a
//! partial palette or typography override keeps every untouched default.

use std::{ops::Deref, sync::LazyLock};

use serde_json::{Map, Value};
use thiserror::Error;

pub use smalto_system::{
    Breakpoint, BreakpointQuery, Breakpoints, BreakpointsOptions, Direction, Palette,
    PaletteColor, PaletteMode, Shape, Spacing, SpacingOptions, SxConfig, SxPropEntry,
    SxTransform, Theme, ThemeBuilder, ThemeOptions, deep_merge, style_function_sx,
};

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ $(,)? ) => {
        $(
            pub static $name: LazyLockTheme =
                LazyLockTheme::new(|| theme_from_json_str(include_str!($path)).unwrap());
        )+
    };
}

/// Lazily-constructed builtin theme, dereferencing to [`Theme`].
pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

generate_builtin_themes!(["../../themes/default.json", DEFAULT]);

static DEFAULT_OPTIONS: LazyLock<Value> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../themes/default.json")).unwrap()
});

/// Errors produced when loading a theme definition from JSON text.
#[derive(Debug, Error)]
pub enum ThemeParseError {
    #[error("invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("a theme definition must be a JSON object")]
    NotAnObject,
}

/// Builds a [`Theme`] from a JSON definition in [`ThemeOptions`] shape.
///
/// The definition stands alone; it is not merged with the default tokens.
pub fn theme_from_json_str(source: &str) -> Result<Theme, ThemeParseError> {
    let value: Value = serde_json::from_str(source)?;
    if !value.is_object() {
        return Err(ThemeParseError::NotAnObject);
    }

    let options: ThemeOptions = serde_json::from_value(value)?;
    Ok(Theme::builder().options(options).build())
}

/// Builds a theme by folding `options` onto the builtin default tokens.
pub fn create_theme(options: ThemeOptions) -> Theme {
    create_theme_with(options, [])
}

/// [`create_theme`] plus trailing override objects, merged in order after
/// the options, last write wins.
pub fn create_theme_with<I>(options: ThemeOptions, overrides: I) -> Theme
where
    I: IntoIterator<Item = Value>,
{
    let caller =
        serde_json::to_value(&options).unwrap_or_else(|_| Value::Object(Map::new()));
    let merged = deep_merge(&DEFAULT_OPTIONS, &caller);
    let options: ThemeOptions = serde_json::from_value(merged).unwrap_or_default();

    let mut builder = Theme::builder().options(options);
    for patch in overrides {
        builder = builder.merge(patch);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_builtin_default_theme_has_material_tokens() {
        assert_eq!(DEFAULT.palette.mode(), PaletteMode::Light);
        assert_eq!(DEFAULT.palette.string("primary.main"), Some("#1976d2"));
        assert_eq!(DEFAULT.palette.number("action.hoverOpacity"), Some(0.04));
        assert_eq!(DEFAULT.get("shadows.0"), Some(&json!("none")));
        assert_eq!(
            DEFAULT.get("typography.button.textTransform"),
            Some(&json!("uppercase"))
        );
    }

    #[test]
    fn test_dark_mode_keeps_default_palette_entries() {
        let mut palette = Map::new();
        palette.insert("mode".to_string(), json!("dark"));

        let theme = create_theme(ThemeOptions {
            palette: Some(palette),
            ..Default::default()
        });

        assert_eq!(theme.palette.mode(), PaletteMode::Dark);
        assert_eq!(
            theme.palette.string("primary.main"),
            Some("#1976d2"),
            "default palette entries should survive a mode switch"
        );
    }

    #[test]
    fn test_caller_options_override_defaults_field_by_field() {
        let mut palette = Map::new();
        palette.insert("primary".to_string(), json!({ "main": "#ff5722" }));

        let theme = create_theme(ThemeOptions {
            palette: Some(palette),
            ..Default::default()
        });

        assert_eq!(theme.palette.string("primary.main"), Some("#ff5722"));
        assert_eq!(
            theme.palette.string("primary.dark"),
            Some("#1565c0"),
            "untouched scale entries should keep their defaults"
        );
    }

    #[test]
    fn test_trailing_overrides_beat_options() {
        let theme = create_theme_with(
            ThemeOptions::default(),
            [json!({ "palette": { "primary": { "main": "#000" } } })],
        );

        assert_eq!(theme.palette.string("primary.main"), Some("#000"));
    }

    #[test]
    fn test_theme_from_json_str_rejects_non_objects() {
        assert!(matches!(
            theme_from_json_str("[1, 2]"),
            Err(ThemeParseError::NotAnObject)
        ));
        assert!(matches!(
            theme_from_json_str("not json"),
            Err(ThemeParseError::Json(_))
        ));
    }

    #[test]
    fn test_breakpoints_survive_the_default_fold() {
        let theme = create_theme(ThemeOptions::default());
        assert_eq!(theme.breakpoints.up(Breakpoint::Md), "@media (min-width:900px)");
    }
}
