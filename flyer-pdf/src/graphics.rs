/// RGB color for PDF graphics operations.
///
/// Each component is in the range 0.0 (none) to 1.0 (full intensity).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };

    /// Create a color from RGB components (each 0.0–1.0).
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color { r, g, b }
    }

    /// Create a grayscale color (r = g = b = level).
    pub fn gray(level: f64) -> Self {
        Color {
            r: level,
            g: level,
            b: level,
        }
    }

    /// Parse `#RRGGBB` (the `#` is optional). Returns None for any
    /// other shape.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let h = hex.trim().trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&h[i..i + 2], 16).ok();
        Some(Color::rgb(
            channel(0)? as f64 / 255.0,
            channel(2)? as f64 / 255.0,
            channel(4)? as f64 / 255.0,
        ))
    }

    /// Scale every component by `factor`, never going below zero.
    pub fn darken(&self, factor: f64) -> Self {
        Color::rgb(
            (self.r * factor).max(0.0),
            (self.g * factor).max(0.0),
            (self.b * factor).max(0.0),
        )
    }
}

/// An axis-aligned rectangle in PDF coordinates: (x, y) is the
/// bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect { x, y, width, height }
    }

    /// Square of side `size` with its bottom-left corner at (x, y).
    pub fn square(x: f64, y: f64, size: f64) -> Self {
        Rect::new(x, y, size, size)
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Bezier control distance for approximating a quarter circle.
pub(crate) const KAPPA: f64 = 0.552_284_749_8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        let c = Color::from_hex("#FF8000").unwrap();
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-9);
        assert_eq!(c.b, 0.0);
        assert_eq!(Color::from_hex("ff8000"), Some(c));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Color::from_hex("#FFF"), None);
        assert_eq!(Color::from_hex("#GG0000"), None);
        assert_eq!(Color::from_hex(""), None);
    }

    #[test]
    fn darken_scales_components() {
        let c = Color::rgb(1.0, 0.5, 0.0).darken(0.5);
        assert_eq!(c, Color::rgb(0.5, 0.25, 0.0));
    }
}
