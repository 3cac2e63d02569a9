//! Colour palettes for notifications.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::notification::NotificationKind;

/// Light/dark palette selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// For light backgrounds.
    #[default]
    Light,
    /// For dark backgrounds.
    Dark,
}

impl ColorMode {
    /// Returns the opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ColorMode {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ColorParseError::UnknownMode(s.to_string())),
        }
    }
}

/// Rejected colour or mode text.
#[derive(Debug, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ColorParseError {
    #[error("invalid hex colour: {0}")]
    InvalidHex(String),

    #[error("unknown colour mode: {0}")]
    UnknownMode(String),
}

/// An sRGB colour written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl HexColor {
    /// Colour from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    const fn rgb(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorParseError::InvalidHex(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;

        if !hex.is_ascii() {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());

        match hex.len() {
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => Ok(Self::new(
                channel(hex[0..1].repeat(2).as_str())?,
                channel(hex[1..2].repeat(2).as_str())?,
                channel(hex[2..3].repeat(2).as_str())?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl Serialize for HexColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Border, background and font colour of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationTheme {
    /// Border colour.
    pub border_color: HexColor,
    /// Fill colour.
    pub background_color: HexColor,
    /// Message and icon colour.
    pub font_color: HexColor,
}

impl NotificationTheme {
    const fn from_hex(border: u32, background: u32, font: u32) -> Self {
        Self {
            border_color: HexColor::rgb(border),
            background_color: HexColor::rgb(background),
            font_color: HexColor::rgb(font),
        }
    }
}

/// One theme per notification kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemePalette {
    /// Success notifications.
    pub success: NotificationTheme,
    /// Error notifications.
    pub error: NotificationTheme,
    /// Info notifications.
    pub info: NotificationTheme,
    /// Alert notifications.
    pub alert: NotificationTheme,
    /// Used for plain notifications and the neutral parts of coloured ones.
    pub none: NotificationTheme,
}

impl ThemePalette {
    /// Default palette for light backgrounds.
    pub const LIGHT: Self = Self {
        success: NotificationTheme::from_hex(0x4caf50, 0xe8f5e9, 0x2e7d32),
        error: NotificationTheme::from_hex(0xf44336, 0xffebee, 0xc62828),
        info: NotificationTheme::from_hex(0x2196f3, 0xe3f2fd, 0x1565c0),
        alert: NotificationTheme::from_hex(0xff9800, 0xfff3e0, 0xef6c00),
        none: NotificationTheme::from_hex(0xbdbdbd, 0xf7f7f7, 0x181818),
    };

    /// Default palette for dark backgrounds.
    pub const DARK: Self = Self {
        success: NotificationTheme::from_hex(0x81c784, 0x3e5f40, 0xe8f5e9),
        error: NotificationTheme::from_hex(0xe57373, 0x5f3030, 0xffebee),
        info: NotificationTheme::from_hex(0x64b5f6, 0x213c52, 0xe3f2fd),
        alert: NotificationTheme::from_hex(0xffb74d, 0x5c421c, 0xfff3e0),
        none: NotificationTheme::from_hex(0xbdbdbd, 0x424242, 0xe0e0e0),
    };

    /// Returns the theme for `kind`.
    #[must_use]
    pub const fn get(&self, kind: NotificationKind) -> &NotificationTheme {
        match kind {
            NotificationKind::Success => &self.success,
            NotificationKind::Error => &self.error,
            NotificationKind::Info => &self.info,
            NotificationKind::Alert => &self.alert,
            NotificationKind::Neutral => &self.none,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!("#ff0000".parse(), Ok(HexColor::new(255, 0, 0)));
        assert_eq!("#0f0".parse(), Ok(HexColor::new(0, 255, 0)));
        assert!("ff0000".parse::<HexColor>().is_err());
        assert!("#ff00".parse::<HexColor>().is_err());
        assert!("#gg0000".parse::<HexColor>().is_err());
    }

    #[test]
    fn test_hex_color_display() {
        assert_eq!(ThemePalette::LIGHT.success.border_color.to_string(), "#4caf50");
        assert_eq!(ThemePalette::DARK.none.background_color.to_string(), "#424242");
    }

    #[test]
    fn test_palette_lookup_by_kind() {
        let palette = ThemePalette::LIGHT;
        for kind in NotificationKind::ALL {
            let expected = match kind {
                NotificationKind::Success => palette.success,
                NotificationKind::Error => palette.error,
                NotificationKind::Info => palette.info,
                NotificationKind::Alert => palette.alert,
                NotificationKind::Neutral => palette.none,
            };
            assert_eq!(*palette.get(kind), expected);
        }
    }

    #[test]
    fn test_theme_deserializes_from_hex_strings() {
        let theme: NotificationTheme = toml::from_str(
            r##"
                border_color = "#111111"
                background_color = "#222"
                font_color = "#abcdef"
            "##,
        )
        .unwrap();

        assert_eq!(theme.border_color, HexColor::new(0x11, 0x11, 0x11));
        assert_eq!(theme.background_color, HexColor::new(0x22, 0x22, 0x22));
        assert_eq!(theme.font_color, HexColor::new(0xab, 0xcd, 0xef));
    }

    #[test]
    fn test_color_mode_toggle_and_parse() {
        assert_eq!(ColorMode::Light.toggled(), ColorMode::Dark);
        assert_eq!(ColorMode::Dark.toggled(), ColorMode::Light);
        assert_eq!(" Dark ".parse(), Ok(ColorMode::Dark));
        assert!("sepia".parse::<ColorMode>().is_err());
    }
}
