//! Length unit helpers.

const HTML_FONT_SIZE: f64 = 16.0;

/// Converts a pixel size to a rem string against the 16px root font size.
pub fn px_to_rem(px: f64) -> String {
    format!("{}rem", px / HTML_FONT_SIZE)
}
