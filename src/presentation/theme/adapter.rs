use coolor::{Hsl, Rgb};
use ratatui::style::Color;

use crate::domain::HexColor;

/// Converts palette colours for ratatui.
pub struct ColorConverter;

impl ColorConverter {
    /// Exact RGB colour.
    #[must_use]
    pub const fn to_ratatui(color: HexColor) -> Color {
        Color::Rgb(color.r, color.g, color.b)
    }

    /// HSL form of `color`.
    #[must_use]
    pub fn to_hsl(color: HexColor) -> Hsl {
        Rgb::new(color.r, color.g, color.b).to_hsl()
    }

    /// RGB colour of `hsl`.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Color {
        let rgb: Rgb = hsl.to_rgb();
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }

    /// Moves `color` towards `target` in saturation and lightness, keeping its hue.
    ///
    /// `amount` is clamped to `0.0..=1.0`; zero returns `color` unchanged.
    #[must_use]
    pub fn fade(color: HexColor, target: HexColor, amount: f32) -> Color {
        let amount = amount.clamp(0.0, 1.0);
        if amount <= 0.0 {
            return Self::to_ratatui(color);
        }
        let mut hsl = Self::to_hsl(color);
        let toward = Self::to_hsl(target);
        hsl.s += (toward.s - hsl.s) * amount;
        hsl.l += (toward.l - hsl.l) * amount;
        Self::from_hsl(hsl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels(color: Color) -> (u8, u8, u8) {
        match color {
            Color::Rgb(r, g, b) => (r, g, b),
            other => panic!("Expected RGB color, got {other:?}"),
        }
    }

    #[test]
    fn test_hex_to_ratatui() {
        let color = ColorConverter::to_ratatui(HexColor::new(0x4c, 0xaf, 0x50));
        assert_eq!(color, Color::Rgb(0x4c, 0xaf, 0x50));
    }

    #[test]
    fn test_conversion_round_trip() {
        let hsl = ColorConverter::to_hsl(HexColor::new(100, 150, 200));
        let (r, g, b) = channels(ColorConverter::from_hsl(hsl));

        assert!((i16::from(r) - 100).abs() <= 1);
        assert!((i16::from(g) - 150).abs() <= 1);
        assert!((i16::from(b) - 200).abs() <= 1);
    }

    #[test]
    fn test_fade_endpoints() {
        let white = HexColor::new(255, 255, 255);
        let black = HexColor::new(0, 0, 0);

        assert_eq!(
            ColorConverter::fade(white, black, 0.0),
            Color::Rgb(255, 255, 255)
        );

        let (r, g, b) = channels(ColorConverter::fade(white, black, 1.0));
        assert!(r <= 1 && g <= 1 && b <= 1);
    }

    #[test]
    fn test_zero_fade_keeps_exact_channels() {
        let green = HexColor::new(0x4c, 0xaf, 0x50);
        let grey = HexColor::new(0xe8, 0xf5, 0xe9);

        assert_eq!(ColorConverter::fade(green, grey, 0.0), Color::Rgb(0x4c, 0xaf, 0x50));
        assert_eq!(ColorConverter::fade(green, grey, -1.0), Color::Rgb(0x4c, 0xaf, 0x50));
    }

    #[test]
    fn test_fade_halfway_darkens() {
        let white = HexColor::new(255, 255, 255);
        let black = HexColor::new(0, 0, 0);
        let (r, g, b) = channels(ColorConverter::fade(white, black, 0.5));

        assert!((i16::from(r) - 128).abs() <= 2);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn test_fade_clamps_amount() {
        let red = HexColor::new(200, 0, 0);
        let grey = HexColor::new(128, 128, 128);
        assert_eq!(
            ColorConverter::fade(red, grey, 3.0),
            ColorConverter::fade(red, grey, 1.0)
        );
    }
}
