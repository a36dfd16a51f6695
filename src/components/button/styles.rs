//! Conditional style fragments for the button slots.
//!
//! Fragments follow the same precedence as the class list: base styles
//! first, then variant, color, size, and flag refinements, each deep-merged
//! so later fragments win per property.

use serde_json::{Map, Value, json};
use smalto_system::{PaletteColor, PaletteMode, Theme, deep_merge, soft_warn};

use crate::utils::{alpha, px_to_rem};

use super::button_utility_class;
use super::{ButtonColor, ButtonSize, ButtonVariant, OwnerState};

fn extend(style: &mut Value, fragment: Value) {
    *style = deep_merge(style, &fragment);
}

fn create_transition(theme: &Theme, properties: &[&str]) -> String {
    let duration = theme
        .get("transitions.duration.short")
        .and_then(Value::as_f64)
        .unwrap_or(250.0);
    let easing = theme
        .get("transitions.easing.easeInOut")
        .and_then(Value::as_str)
        .unwrap_or("cubic-bezier(0.4, 0, 0.2, 1)");

    properties
        .iter()
        .map(|property| format!("{property} {duration}ms {easing} 0ms"))
        .collect::<Vec<_>>()
        .join(",")
}

fn shadow(theme: &Theme, elevation: usize) -> Value {
    theme
        .get(&format!("shadows.{elevation}"))
        .cloned()
        .unwrap_or_else(|| json!("none"))
}

fn palette_str(theme: &Theme, path: &str, fallback: &str) -> String {
    theme
        .palette
        .string(path)
        .unwrap_or(fallback)
        .to_string()
}

/// The color scale selected by the owner state, when it resolves. `Inherit`
/// never resolves; a named color missing from the palette resolves to
/// nothing with a debug warning.
fn color_scale(theme: &Theme, color: ButtonColor) -> Option<PaletteColor> {
    if color == ButtonColor::Inherit {
        return None;
    }

    let scale = theme.palette.color(color.key());
    if scale.is_none() {
        soft_warn!("palette has no `{}` color scale", color.key());
    }
    scale
}

pub(crate) fn root_styles(owner_state: &OwnerState, theme: &Theme) -> Value {
    let OwnerState {
        variant,
        color,
        size,
        disable_elevation,
        full_width,
        ..
    } = *owner_state;

    let scale = color_scale(theme, color);
    let mode = theme.palette.mode();

    let text_primary = palette_str(theme, "text.primary", "rgba(0, 0, 0, 0.87)");
    let hover_opacity = theme.palette.number("action.hoverOpacity").unwrap_or(0.04) as f32;

    // The inherit-colored contained button sits on a grey surface whose
    // tone depends on the palette mode.
    let (contained_bg, contained_hover_bg) = match mode {
        PaletteMode::Light => (
            palette_str(theme, "grey.300", "#e0e0e0"),
            palette_str(theme, "grey.A100", "#f5f5f5"),
        ),
        PaletteMode::Dark => (
            palette_str(theme, "grey.800", "#424242"),
            palette_str(theme, "grey.700", "#616161"),
        ),
    };

    let disabled_selector = format!("&.{}", button_utility_class("disabled"));
    let focus_visible_selector = format!("&.{}", button_utility_class("focusVisible"));

    let mut style = match theme.get("typography.button") {
        Some(Value::Object(typography)) => Value::Object(typography.clone()),
        _ => Value::Object(Map::new()),
    };

    extend(
        &mut style,
        json!({
            "minWidth": 64,
            "padding": "6px 16px",
            "borderRadius": theme.shape.border_radius,
            "transition": create_transition(
                theme,
                &["background-color", "box-shadow", "border-color", "color"],
            ),
        }),
    );

    let mut hover = json!({
        "textDecoration": "none",
        "backgroundColor": alpha(&text_primary, hover_opacity),
        // Touch devices never hold a hover state; the overlay resets there.
        "@media (hover: none)": { "backgroundColor": "transparent" },
    });

    if let Some(scale) = &scale {
        match variant {
            ButtonVariant::Text => extend(
                &mut hover,
                json!({
                    "backgroundColor": alpha(&scale.main, hover_opacity),
                    "@media (hover: none)": { "backgroundColor": "transparent" },
                }),
            ),
            ButtonVariant::Outlined => extend(
                &mut hover,
                json!({
                    "border": format!("1px solid {}", scale.main),
                    "backgroundColor": alpha(&scale.main, hover_opacity),
                    "@media (hover: none)": { "backgroundColor": "transparent" },
                }),
            ),
            ButtonVariant::Contained => {}
        }
    }

    if variant == ButtonVariant::Contained {
        extend(
            &mut hover,
            json!({
                "backgroundColor": contained_hover_bg,
                "boxShadow": shadow(theme, 4),
                "@media (hover: none)": {
                    "boxShadow": shadow(theme, 2),
                    "backgroundColor": contained_bg,
                },
            }),
        );

        if let Some(scale) = &scale {
            extend(
                &mut hover,
                json!({
                    "backgroundColor": scale.dark.clone().unwrap_or_else(|| scale.main.clone()),
                    "@media (hover: none)": { "backgroundColor": scale.main },
                }),
            );
        }
    }

    extend(&mut style, json!({ "&:hover": hover }));

    if variant == ButtonVariant::Contained {
        extend(
            &mut style,
            json!({
                "&:active": { "boxShadow": shadow(theme, 8) },
                focus_visible_selector.clone(): { "boxShadow": shadow(theme, 6) },
            }),
        );
    }

    let mut disabled_block = json!({
        "color": palette_str(theme, "action.disabled", "rgba(0, 0, 0, 0.26)"),
    });
    match variant {
        ButtonVariant::Outlined => extend(
            &mut disabled_block,
            json!({
                "border": format!(
                    "1px solid {}",
                    palette_str(theme, "action.disabledBackground", "rgba(0, 0, 0, 0.12)"),
                ),
            }),
        ),
        ButtonVariant::Contained => extend(
            &mut disabled_block,
            json!({
                "color": palette_str(theme, "action.disabled", "rgba(0, 0, 0, 0.26)"),
                "boxShadow": shadow(theme, 0),
                "backgroundColor": palette_str(
                    theme,
                    "action.disabledBackground",
                    "rgba(0, 0, 0, 0.12)",
                ),
            }),
        ),
        ButtonVariant::Text => {}
    }
    extend(&mut style, json!({ disabled_selector.clone(): disabled_block }));

    match variant {
        ButtonVariant::Text => {
            extend(&mut style, json!({ "padding": "6px 8px" }));
            if let Some(scale) = &scale {
                extend(&mut style, json!({ "color": scale.main }));
            }
        }
        ButtonVariant::Outlined => {
            extend(
                &mut style,
                json!({ "padding": "5px 15px", "border": "1px solid currentColor" }),
            );
            if let Some(scale) = &scale {
                extend(
                    &mut style,
                    json!({
                        "color": scale.main,
                        "border": format!("1px solid {}", alpha(&scale.main, 0.5)),
                    }),
                );
            }
        }
        ButtonVariant::Contained => {
            extend(
                &mut style,
                json!({
                    "color": text_primary,
                    "backgroundColor": contained_bg,
                    "boxShadow": shadow(theme, 2),
                }),
            );
            if let Some(scale) = &scale {
                extend(
                    &mut style,
                    json!({
                        "color": scale
                            .contrast_text
                            .clone()
                            .unwrap_or_else(|| text_primary.clone()),
                        "backgroundColor": scale.main,
                    }),
                );
            }
        }
    }

    if color == ButtonColor::Inherit {
        extend(
            &mut style,
            json!({ "color": "inherit", "borderColor": "currentColor" }),
        );
    }

    let size_fragment = match (size, variant) {
        (ButtonSize::Small, ButtonVariant::Text) => {
            Some(json!({ "padding": "4px 5px", "fontSize": px_to_rem(13.0) }))
        }
        (ButtonSize::Large, ButtonVariant::Text) => {
            Some(json!({ "padding": "8px 11px", "fontSize": px_to_rem(15.0) }))
        }
        (ButtonSize::Small, ButtonVariant::Outlined) => {
            Some(json!({ "padding": "3px 9px", "fontSize": px_to_rem(13.0) }))
        }
        (ButtonSize::Large, ButtonVariant::Outlined) => {
            Some(json!({ "padding": "7px 21px", "fontSize": px_to_rem(15.0) }))
        }
        (ButtonSize::Small, ButtonVariant::Contained) => {
            Some(json!({ "padding": "4px 10px", "fontSize": px_to_rem(13.0) }))
        }
        (ButtonSize::Large, ButtonVariant::Contained) => {
            Some(json!({ "padding": "8px 22px", "fontSize": px_to_rem(15.0) }))
        }
        (ButtonSize::Medium, _) => None,
    };
    if let Some(fragment) = size_fragment {
        extend(&mut style, fragment);
    }

    if full_width {
        extend(&mut style, json!({ "width": "100%" }));
    }

    if disable_elevation {
        extend(
            &mut style,
            json!({
                "boxShadow": "none",
                "&:hover": { "boxShadow": "none" },
                focus_visible_selector: { "boxShadow": "none" },
                "&:active": { "boxShadow": "none" },
                disabled_selector: { "boxShadow": "none" },
            }),
        );
    }

    style
}

pub(crate) fn label_styles() -> Value {
    json!({
        "width": "100%",
        "display": "inherit",
        "alignItems": "inherit",
        "justifyContent": "inherit",
    })
}

fn icon_size_styles(size: ButtonSize) -> Value {
    json!({
        "& > *:nth-of-type(1)": { "fontSize": size.icon_font_size() },
    })
}

pub(crate) fn start_icon_styles(owner_state: &OwnerState) -> Value {
    let mut style = json!({
        "display": "inherit",
        "marginRight": 8,
        "marginLeft": -4,
    });

    if owner_state.size == ButtonSize::Small {
        extend(&mut style, json!({ "marginLeft": -2 }));
    }

    extend(&mut style, icon_size_styles(owner_state.size));
    style
}

pub(crate) fn end_icon_styles(owner_state: &OwnerState) -> Value {
    let mut style = json!({
        "display": "inherit",
        "marginRight": -4,
        "marginLeft": 8,
    });

    if owner_state.size == ButtonSize::Small {
        extend(&mut style, json!({ "marginRight": -2 }));
    }

    extend(&mut style, icon_size_styles(owner_state.size));
    style
}
