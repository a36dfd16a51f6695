//! Color parsing and manipulation for style computation.

/// An RGBA color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    /// Parses `#rgb`, `#rrggbb`, `#rrggbbaa`, and `rgb()`/`rgba()` notation.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();

        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        let body = input
            .strip_prefix("rgba")
            .or_else(|| input.strip_prefix("rgb"))?;
        let body = body.trim().strip_prefix('(')?.strip_suffix(')')?;

        let mut channels = body.split(',').map(str::trim);
        let r = parse_channel(channels.next()?)?;
        let g = parse_channel(channels.next()?)?;
        let b = parse_channel(channels.next()?)?;
        let a = match channels.next() {
            Some(alpha) => alpha.parse::<f32>().ok()?,
            None => 1.0,
        };

        Some(Self { r, g, b, a })
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        match hex.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, digit) in channels.iter_mut().zip(hex.chars()) {
                    let value = digit.to_digit(16)? as u8;
                    *slot = value * 16 + value;
                }
                let [r, g, b] = channels;
                Some(Self { r, g, b, a: 1.0 })
            }
            6 | 8 => {
                let mut channels = [255u8; 4];
                for (index, slot) in channels.iter_mut().take(hex.len() / 2).enumerate() {
                    *slot = u8::from_str_radix(hex.get(index * 2..index * 2 + 2)?, 16).ok()?;
                }
                let [r, g, b, a] = channels;
                Some(Self { r, g, b, a: a as f32 / 255.0 })
            }
            _ => None,
        }
    }

    /// Returns the color with the given alpha component.
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// CSS `rgba()` notation.
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

fn parse_channel(value: &str) -> Option<u8> {
    let value = value.parse::<f32>().ok()?;
    if !(0.0..=255.0).contains(&value) {
        return None;
    }
    Some(value.round() as u8)
}

/// Applies `alpha` to a CSS color literal, producing `rgba()` notation.
/// Unparseable input comes back unchanged.
pub fn alpha(color: &str, alpha: f32) -> String {
    match Rgba::parse(color) {
        Some(rgba) => rgba.alpha(alpha).to_css(),
        None => color.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_hex_notation() {
        assert_eq!(
            Rgba::parse("#1976d2"),
            Some(Rgba { r: 25, g: 118, b: 210, a: 1.0 })
        );
        assert_eq!(
            Rgba::parse("#fff"),
            Some(Rgba { r: 255, g: 255, b: 255, a: 1.0 })
        );
        assert_eq!(
            Rgba::parse("#00000080").map(|rgba| (rgba.r, rgba.g, rgba.b)),
            Some((0, 0, 0))
        );
    }

    #[test]
    fn test_parses_rgba_notation() {
        assert_eq!(
            Rgba::parse("rgba(0, 0, 0, 0.87)"),
            Some(Rgba { r: 0, g: 0, b: 0, a: 0.87 })
        );
        assert_eq!(
            Rgba::parse("rgb(255, 0, 128)"),
            Some(Rgba { r: 255, g: 0, b: 128, a: 1.0 })
        );
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert_eq!(Rgba::parse("#12"), None);
        assert_eq!(Rgba::parse("rgba(1, 2)"), None);
        assert_eq!(Rgba::parse("currentColor"), None);
    }

    #[test]
    fn test_alpha_produces_rgba_css() {
        assert_eq!(alpha("#1976d2", 0.04), "rgba(25, 118, 210, 0.04)");
        assert_eq!(alpha("rgba(0, 0, 0, 0.87)", 0.5), "rgba(0, 0, 0, 0.5)");
    }

    #[test]
    fn test_alpha_passes_unparseable_input_through() {
        assert_eq!(alpha("currentColor", 0.5), "currentColor");
    }
}
