//! Corner shape defaults.

use serde::{Deserialize, Serialize};

/// Border-radius design tokens.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Shape {
    pub border_radius: f64,
}

impl Default for Shape {
    fn default() -> Self {
        Self { border_radius: 4.0 }
    }
}
