//! Hue gradient the replacement color is picked from

use image::{Rgb, RgbImage};

/// Replacement color, in the channel order of `RgbImage`
pub type Color = Rgb<u8>;

/// Hue steps in an 8-bit HSV image (two degrees per step)
pub const HUE_STEPS: u32 = 180;
/// Width of every hue row
pub const GRADIENT_COLUMNS: u32 = 100;

/// Convert an 8-bit HSV triple to RGB.
///
/// `hue` is in half degrees (0..180); saturation and value span 0..=255.
/// Channels are rounded to nearest.
pub fn hsv_to_rgb(hue: u8, saturation: u8, value: u8) -> Color {
    let h = (hue as f32 * 6.0 / HUE_STEPS as f32).rem_euclid(6.0);
    let s = saturation as f32 / 255.0;
    let v = value as f32 / 255.0;

    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as u32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    let to_u8 = |c: f32| (c * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb([to_u8(r), to_u8(g), to_u8(b)])
}

/// Parse `#rrggbb` (leading `#` optional) into a color.
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

/// `#rrggbb` form of a color, as HTML color inputs expect
pub fn to_hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color[0], color[1], color[2])
}

/// Fully saturated hue strip: one row per hue, repeated across the columns
#[derive(Clone, Debug, PartialEq)]
pub struct HueGradient {
    image: RgbImage,
}

impl HueGradient {
    pub fn new() -> Self {
        let image =
            RgbImage::from_fn(GRADIENT_COLUMNS, HUE_STEPS, |_, y| hsv_to_rgb(y as u8, 255, 255));
        Self { image }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The color displayed at gradient pixel `(x, y)`, if it is on the strip.
    pub fn color_at(&self, x: u32, y: u32) -> Option<Color> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// The color of a hue row.
    pub fn hue_color(&self, hue: u8) -> Option<Color> {
        self.color_at(0, hue as u32)
    }
}

impl Default for HueGradient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hsv_to_rgb(0, 255, 255), Rgb([255, 0, 0]));
        assert_eq!(hsv_to_rgb(30, 255, 255), Rgb([255, 255, 0]));
        assert_eq!(hsv_to_rgb(60, 255, 255), Rgb([0, 255, 0]));
        assert_eq!(hsv_to_rgb(90, 255, 255), Rgb([0, 255, 255]));
        assert_eq!(hsv_to_rgb(120, 255, 255), Rgb([0, 0, 255]));
        assert_eq!(hsv_to_rgb(150, 255, 255), Rgb([255, 0, 255]));
    }

    #[test]
    fn test_intermediate_hue_rounds() {
        // 15 steps = 30 degrees: halfway from red to yellow
        assert_eq!(hsv_to_rgb(15, 255, 255), Rgb([255, 128, 0]));
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        assert_eq!(hsv_to_rgb(77, 0, 90), Rgb([90, 90, 90]));
    }

    #[test]
    fn test_gradient_shape() {
        let gradient = HueGradient::new();
        assert_eq!((gradient.width(), gradient.height()), (100, 180));
    }

    #[test]
    fn test_rows_are_uniform() {
        let gradient = HueGradient::new();
        for hue in [0u32, 45, 119, 179] {
            let first = gradient.color_at(0, hue);
            assert_eq!(first, gradient.color_at(99, hue));
            assert_eq!(first, gradient.color_at(50, hue));
        }
    }

    #[test]
    fn test_pick_returns_stored_pixel() {
        let gradient = HueGradient::new();
        assert_eq!(gradient.color_at(0, 0), Some(Rgb([255, 0, 0])));
        assert_eq!(gradient.color_at(42, 60), Some(hsv_to_rgb(60, 255, 255)));
        assert_eq!(gradient.color_at(100, 0), None);
        assert_eq!(gradient.color_at(0, 180), None);
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_hex_color("#00ff7F"), Some(Rgb([0, 255, 127])));
        assert_eq!(parse_hex_color(" 102030 "), Some(Rgb([16, 32, 48])));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
        assert_eq!(parse_hex_color(""), None);
        assert_eq!(to_hex(Rgb([0, 255, 127])), "#00ff7f");
    }
}
