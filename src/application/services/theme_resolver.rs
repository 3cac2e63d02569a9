use crate::domain::{ColoredMode, HexColor, NotificationKind, NotificationTheme, ThemePalette};

/// Colours a toast is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedColors {
    /// Toast fill.
    pub background: HexColor,
    /// Border colour.
    pub border: HexColor,
    /// Message and icon colour.
    pub font: HexColor,
}

/// Picks the colours for a notification.
///
/// `user_theme` replaces the kind's palette entry; the `none` entry of the
/// palette supplies the neutral parts for [`ColoredMode::Border`] and
/// [`ColoredMode::Plain`].
#[must_use]
pub fn resolve_colors(
    colored: ColoredMode,
    kind: NotificationKind,
    user_theme: Option<&NotificationTheme>,
    palette: &ThemePalette,
) -> ResolvedColors {
    let base = user_theme.unwrap_or_else(|| palette.get(kind));
    let neutral = &palette.none;

    match colored {
        ColoredMode::Full => ResolvedColors {
            background: base.background_color,
            border: base.border_color,
            font: base.font_color,
        },
        ColoredMode::Border => ResolvedColors {
            background: neutral.background_color,
            border: base.border_color,
            font: base.font_color,
        },
        ColoredMode::Plain => ResolvedColors {
            background: neutral.background_color,
            border: neutral.border_color,
            font: neutral.font_color,
        },
    }
}
