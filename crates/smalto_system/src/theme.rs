//! Theme construction.
//!
//! A [`Theme`] is built once by folding caller options and override objects
//! onto framework defaults, last write wins. The result is treated as a
//! read-only value: render passes may share it freely, and nothing here
//! mutates it after [`ThemeBuilder::build`] returns.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::{
    Breakpoints, BreakpointsOptions, Shape, Spacing, SpacingOptions, SxConfig, deep_merge,
    deep_merge_all, default_sx_config, get_path, style_function_sx,
};

/// Layout direction used by style resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// Light or dark color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteMode {
    #[default]
    Light,
    Dark,
}

/// One named color scale from the palette.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteColor {
    pub main: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast_text: Option<String>,
}

/// Color tokens: a mode discriminant over an open map, so caller-defined
/// scales pass through untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    mode: PaletteMode,
    tokens: Map<String, Value>,
}

impl Default for Palette {
    fn default() -> Self {
        let mut tokens = Map::new();
        tokens.insert("mode".to_string(), json!("light"));
        Self::from_map(tokens)
    }
}

impl Palette {
    pub fn from_map(tokens: Map<String, Value>) -> Self {
        let mode = match tokens.get("mode").and_then(Value::as_str) {
            Some("dark") => PaletteMode::Dark,
            _ => PaletteMode::Light,
        };

        Self { mode, tokens }
    }

    pub fn mode(&self) -> PaletteMode {
        self.mode
    }

    /// Dotted-path lookup into the palette tokens.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };

        let node = self.tokens.get(head)?;
        match rest {
            Some(rest) => get_path(node, rest),
            None => Some(node),
        }
    }

    pub fn string(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    pub fn number(&self, path: &str) -> Option<f64> {
        self.get(path).and_then(Value::as_f64)
    }

    /// The named color scale, when present and well-formed.
    pub fn color(&self, name: &str) -> Option<PaletteColor> {
        serde_json::from_value(self.tokens.get(name)?.clone()).ok()
    }

    pub fn tokens(&self) -> &Map<String, Value> {
        &self.tokens
    }
}

impl Serialize for Palette {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.tokens.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tokens = Map::deserialize(deserializer)?;
        Ok(Self::from_map(tokens))
    }
}

/// Partial theme configuration.
///
/// Every field is optional; missing parts are filled from defaults, and
/// unknown top-level keys are preserved verbatim in the built theme.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakpoints: Option<BreakpointsOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingOptions>,
    /// Per-component default props and style overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transitions: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadows: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sx_config: Option<SxConfig>,
    /// Unrecognized top-level entries, passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A fully-constructed theme.
///
/// Typed fields cover the parts this crate interprets; the complete merged
/// token tree (including caller extensions) stays available through
/// [`Theme::get`]. The value is immutable by convention: construction is the
/// only write, and concurrent readers need no coordination.
#[derive(Clone, Debug)]
pub struct Theme {
    pub breakpoints: Breakpoints,
    pub direction: Direction,
    pub palette: Palette,
    pub spacing: Spacing,
    pub shape: Shape,
    sx_config: SxConfig,
    tokens: Value,
}

impl Theme {
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::new()
    }

    /// Dotted-path lookup into the merged token tree.
    pub fn get(&self, path: &str) -> Option<&Value> {
        get_path(&self.tokens, path)
    }

    /// The override entry registered for one component, if any.
    pub fn component(&self, name: &str) -> Option<&Value> {
        self.tokens.get("components")?.get(name)
    }

    /// The full merged token tree.
    pub fn tokens(&self) -> &Value {
        &self.tokens
    }

    pub fn sx_config(&self) -> &SxConfig {
        &self.sx_config
    }

    /// Resolves a style-props object against this theme.
    pub fn sx(&self, props: &Value) -> Value {
        style_function_sx(self, props)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PartialEq for Theme {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Serialize for Theme {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.tokens.serialize(serializer)
    }
}

/// Builds a [`Theme`] from defaults, an options object, and any number of
/// trailing override objects.
#[derive(Clone, Debug, Default)]
pub struct ThemeBuilder {
    options: ThemeOptions,
    overrides: Vec<Value>,
}

impl ThemeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole options object.
    pub fn options(mut self, options: ThemeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn breakpoints(mut self, options: BreakpointsOptions) -> Self {
        self.options.breakpoints = Some(options);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.options.direction = Some(direction);
        self
    }

    pub fn palette(mut self, palette: Map<String, Value>) -> Self {
        self.options.palette = Some(palette);
        self
    }

    pub fn spacing(mut self, options: SpacingOptions) -> Self {
        self.options.spacing = Some(options);
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.options.shape = Some(shape);
        self
    }

    /// Registers default props and style overrides for one component.
    pub fn component(mut self, name: impl Into<String>, overrides: Value) -> Self {
        self.options
            .components
            .get_or_insert_with(Map::new)
            .insert(name.into(), overrides);
        self
    }

    /// Sets an arbitrary top-level entry, preserved verbatim in the theme.
    pub fn set(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.extra.insert(key.into(), value);
        self
    }

    /// Appends a trailing override object. Later overrides take precedence
    /// over earlier ones and over the options object.
    pub fn merge(mut self, overrides: Value) -> Self {
        self.overrides.push(overrides);
        self
    }

    /// Constructs the theme. Total over any input: missing parts come from
    /// defaults, and a typed field whose merged value is malformed keeps its
    /// default while the raw value stays readable in the token tree.
    pub fn build(self) -> Theme {
        let ThemeBuilder { options, overrides } = self;

        let breakpoints = Breakpoints::new(options.breakpoints.clone().unwrap_or_default());
        let spacing = Spacing::new(options.spacing.clone().unwrap_or_default());
        let fallback_shape = options.shape.unwrap_or_default();
        let fallback_direction = options.direction.unwrap_or_default();

        let mut palette = Map::new();
        palette.insert("mode".to_string(), json!("light"));
        if let Some(input) = &options.palette {
            for (key, value) in input {
                palette.insert(key.clone(), value.clone());
            }
        }

        let skeleton = json!({
            "breakpoints": &breakpoints,
            "direction": Direction::Ltr,
            "components": {},
            "palette": &palette,
            "spacing": &spacing,
            "shape": Shape::default(),
        });

        let options_value =
            serde_json::to_value(&options).unwrap_or_else(|_| Value::Object(Map::new()));
        let merged = deep_merge(&skeleton, &options_value);
        let tokens = deep_merge_all(&merged, &overrides);

        let mut sx_config = default_sx_config();
        if let Some(config) = options.sx_config {
            sx_config.extend(config);
        }

        Theme {
            breakpoints: typed_field(&tokens, "breakpoints").unwrap_or(breakpoints),
            direction: typed_field(&tokens, "direction").unwrap_or(fallback_direction),
            palette: typed_field(&tokens, "palette").unwrap_or_else(|| Palette::from_map(palette)),
            spacing: typed_field(&tokens, "spacing").unwrap_or(spacing),
            shape: typed_field(&tokens, "shape").unwrap_or(fallback_shape),
            sx_config,
            tokens,
        }
    }
}

fn typed_field<T>(tokens: &Value, key: &str) -> Option<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(tokens.get(key)?.clone()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_skeleton() {
        let theme = Theme::default();

        assert_eq!(theme.direction, Direction::Ltr);
        assert_eq!(theme.palette.mode(), PaletteMode::Light);
        assert_eq!(theme.shape, Shape::default());

        let keys: Vec<&str> = theme.breakpoints.keys().collect();
        assert_eq!(keys, ["xs", "sm", "md", "lg", "xl"]);

        assert_eq!(
            theme.get("components"),
            Some(&json!({})),
            "skeleton should carry an empty component map"
        );
    }

    #[test]
    fn test_dark_palette_mode() {
        let mut palette = Map::new();
        palette.insert("mode".to_string(), json!("dark"));

        let theme = Theme::builder().palette(palette).build();
        assert_eq!(theme.palette.mode(), PaletteMode::Dark);
        assert_eq!(theme.get("palette.mode"), Some(&json!("dark")));
    }

    #[test]
    fn test_palette_entries_survive_next_to_mode() {
        let mut palette = Map::new();
        palette.insert("primary".to_string(), json!({ "main": "#1976d2" }));

        let theme = Theme::builder().palette(palette).build();
        assert_eq!(theme.palette.mode(), PaletteMode::Light);
        assert_eq!(theme.palette.string("primary.main"), Some("#1976d2"));

        let color = theme.palette.color("primary").expect("primary should parse");
        assert_eq!(color.main, "#1976d2");
        assert_eq!(color.dark, None);
    }

    #[test]
    fn test_unknown_top_level_keys_pass_through() {
        let theme = Theme::builder()
            .set("brand", json!({ "logo": "wordmark" }))
            .build();

        assert_eq!(theme.get("brand.logo"), Some(&json!("wordmark")));
    }

    #[test]
    fn test_trailing_overrides_take_precedence() {
        let theme = Theme::builder()
            .direction(Direction::Rtl)
            .set("brand", json!("first"))
            .merge(json!({ "brand": "second" }))
            .merge(json!({ "brand": "third", "direction": "ltr" }))
            .build();

        assert_eq!(theme.get("brand"), Some(&json!("third")));
        assert_eq!(theme.direction, Direction::Ltr);
    }

    #[test]
    fn test_overrides_merge_nested_fields() {
        let theme = Theme::builder()
            .merge(json!({ "breakpoints": { "values": { "sm": 700.0 } } }))
            .build();

        assert_eq!(theme.breakpoints.up("sm"), "@media (min-width:700px)");
    }

    #[test]
    fn test_merging_empty_object_is_identity() {
        let base = Theme::builder()
            .set("brand", json!({ "logo": "wordmark" }))
            .build();
        let merged = Theme::builder()
            .set("brand", json!({ "logo": "wordmark" }))
            .merge(json!({}))
            .build();

        assert_eq!(base, merged, "an empty override should change nothing");
    }

    #[test]
    fn test_malformed_typed_field_keeps_default_but_stays_readable() {
        let theme = Theme::builder().merge(json!({ "shape": "round" })).build();

        assert_eq!(theme.shape, Shape::default());
        assert_eq!(theme.get("shape"), Some(&json!("round")));
    }

    #[test]
    fn test_custom_breakpoint_set_flows_through() {
        let theme = Theme::builder()
            .breakpoints(BreakpointsOptions {
                values: Some(indexmap::IndexMap::from([
                    ("compact".to_string(), 0.0),
                    ("wide".to_string(), 840.0),
                ])),
                ..Default::default()
            })
            .build();

        let keys: Vec<&str> = theme.breakpoints.keys().collect();
        assert_eq!(keys, ["compact", "wide"]);
        assert_eq!(theme.breakpoints.only("wide"), "@media (min-width:840px)");
    }

    #[test]
    fn test_options_object_beats_skeleton() {
        let options: ThemeOptions = serde_json::from_value(json!({
            "direction": "rtl",
            "shape": { "borderRadius": 0 },
        }))
        .expect("options should deserialize");

        let theme = Theme::builder().options(options).build();
        assert_eq!(theme.direction, Direction::Rtl);
        assert_eq!(theme.shape.border_radius, 0.0);
    }
}
