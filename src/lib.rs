//! Material-style themeable UI components.
//!
//! Components resolve their props against a shared [`theme::Theme`] into
//! per-slot class names and CSS style objects; an external styling backend
//! turns those into actual stylesheets. Appearance is customized through
//! theme options, per-component theme overrides, consumer classes, and
//! trailing `sx` style objects, never by forking a component.

pub mod components;

pub mod theme;

mod utils;
pub use utils::{Rgba, alpha, capitalize, compose_classes, generate_utility_class, px_to_rem};
