//! Notification defaults applied to every request.

use serde::{Deserialize, Serialize};

use super::notification::{Align, ColoredMode, DisplayDuration};
use super::theme::{ColorMode, ThemePalette};

/// Default number of toasts shown per corner.
pub const DEFAULT_MAX_VISIBLE: usize = 4;

/// Defaults filled into every notification request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Colour mode used when nothing else decides it.
    pub default_mode: ColorMode,
    /// How much of the toast takes the kind colour.
    pub colored: ColoredMode,
    /// Show the kind icon.
    pub has_icon: bool,
    /// Milliseconds before auto-exit, `-1` for never.
    pub duration: DisplayDuration,
    /// Show the close button.
    pub can_close: bool,
    /// Toasts rendered per corner; the rest stay in the store unseen.
    pub max_visible: usize,
    /// Corner new notifications go to.
    pub align: Align,
    /// Palette used in light mode.
    pub light_theme: ThemePalette,
    /// Palette used in dark mode.
    pub dark_theme: ThemePalette,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            default_mode: ColorMode::Light,
            light_theme: ThemePalette::LIGHT,
            dark_theme: ThemePalette::DARK,
            colored: ColoredMode::Full,
            has_icon: true,
            duration: DisplayDuration::default(),
            align: Align::default(),
            can_close: true,
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

impl NotifyConfig {
    /// Overwrites every field set in `partial`.
    pub fn merge(&mut self, partial: PartialConfig) {
        if let Some(mode) = partial.default_mode {
            self.default_mode = mode;
        }
        if let Some(theme) = partial.light_theme {
            self.light_theme = theme;
        }
        if let Some(theme) = partial.dark_theme {
            self.dark_theme = theme;
        }
        if let Some(colored) = partial.colored {
            self.colored = colored;
        }
        if let Some(has_icon) = partial.has_icon {
            self.has_icon = has_icon;
        }
        if let Some(duration) = partial.duration {
            self.duration = duration;
        }
        if let Some(align) = partial.align {
            self.align = align;
        }
        if let Some(can_close) = partial.can_close {
            self.can_close = can_close;
        }
        if let Some(max_visible) = partial.max_visible {
            self.max_visible = max_visible;
        }
    }

    /// Returns the configured palette for `mode`.
    #[must_use]
    pub const fn palette(&self, mode: ColorMode) -> &ThemePalette {
        match mode {
            ColorMode::Light => &self.light_theme,
            ColorMode::Dark => &self.dark_theme,
        }
    }
}

/// A configuration update; unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct PartialConfig {
    pub default_mode: Option<ColorMode>,
    pub light_theme: Option<ThemePalette>,
    pub dark_theme: Option<ThemePalette>,
    pub colored: Option<ColoredMode>,
    pub has_icon: Option<bool>,
    pub duration: Option<DisplayDuration>,
    pub align: Option<Align>,
    pub can_close: Option<bool>,
    pub max_visible: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::{HorizontalAlign, VerticalAlign};

    #[test]
    fn test_merge_overwrites_only_set_fields() {
        let mut config = NotifyConfig::default();
        config.merge(PartialConfig {
            has_icon: Some(false),
            duration: Some(DisplayDuration::Never),
            ..PartialConfig::default()
        });

        assert!(!config.has_icon);
        assert_eq!(config.duration, DisplayDuration::Never);
        assert!(config.can_close);
        assert_eq!(config.colored, ColoredMode::Full);
        assert_eq!(config.max_visible, DEFAULT_MAX_VISIBLE);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: NotifyConfig = toml::from_str(
            r#"
                duration = -1
                colored = "border"
                max_visible = 7

                [align]
                vertical = "bottom"
                horizontal = "right"
            "#,
        )
        .expect("Failed to parse config");

        assert_eq!(config.duration, DisplayDuration::Never);
        assert_eq!(config.colored, ColoredMode::Border);
        assert_eq!(config.max_visible, 7);
        assert_eq!(
            config.align,
            Align::new(VerticalAlign::Bottom, HorizontalAlign::Right)
        );
        assert_eq!(config.light_theme, ThemePalette::LIGHT);
    }

    #[test]
    fn test_palette_follows_mode() {
        let config = NotifyConfig::default();
        assert_eq!(*config.palette(ColorMode::Dark), ThemePalette::DARK);
        assert_eq!(*config.palette(ColorMode::Light), ThemePalette::LIGHT);
    }
}
