//! Domain layer with notification entities, themes and port definitions.

/// Notification defaults.
pub mod config;
/// Error types.
pub mod errors;
/// Notification entities and requests.
pub mod notification;
/// Port definitions.
pub mod ports;
/// Colour palettes.
pub mod theme;

pub use config::{DEFAULT_MAX_VISIBLE, NotifyConfig, PartialConfig};
pub use errors::{NotifyError, PreferenceError};
pub use notification::{
    Align, ClickHandler, ColoredMode, DisplayDuration, HorizontalAlign, Notification,
    NotificationId, NotificationKind, NotificationRequest, ParseValueError, VerticalAlign,
};
pub use ports::{AppearancePort, ThemePreferencePort};
pub use theme::{ColorMode, HexColor, NotificationTheme, ThemePalette};
