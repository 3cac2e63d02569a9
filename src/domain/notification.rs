use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::config::NotifyConfig;
use super::theme::NotificationTheme;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(Uuid);

impl NotificationId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Severity of a notification. Drives the default theme and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Operation completed successfully.
    Success,
    /// Something failed.
    Error,
    /// Informational message.
    #[default]
    Info,
    /// Warning that needs attention.
    Alert,
    /// Neutral message without severity styling.
    #[serde(rename = "none")]
    Neutral,
}

impl NotificationKind {
    /// All kinds, in palette order.
    pub const ALL: [Self; 5] = [
        Self::Success,
        Self::Error,
        Self::Info,
        Self::Alert,
        Self::Neutral,
    ];

    /// Returns whether the kind has a built-in icon.
    #[must_use]
    pub const fn has_builtin_icon(self) -> bool {
        !matches!(self, Self::Neutral)
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
            Self::Info => write!(f, "info"),
            Self::Alert => write!(f, "alert"),
            Self::Neutral => write!(f, "none"),
        }
    }
}

/// Screen edge a notification is anchored to vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    /// Top edge.
    #[default]
    Top,
    /// Bottom edge.
    Bottom,
}

/// Horizontal anchor of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    /// Left edge.
    Left,
    /// Centred.
    #[default]
    Middle,
    /// Right edge.
    Right,
}

/// One of the six screen corners/edges a notification can be placed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Align {
    /// Top or bottom.
    pub vertical: VerticalAlign,
    /// Left, middle or right.
    pub horizontal: HorizontalAlign,
}

impl Align {
    /// The six positions in rendering order.
    pub const ORDER: [Self; 6] = [
        Self::new(VerticalAlign::Top, HorizontalAlign::Left),
        Self::new(VerticalAlign::Top, HorizontalAlign::Middle),
        Self::new(VerticalAlign::Top, HorizontalAlign::Right),
        Self::new(VerticalAlign::Bottom, HorizontalAlign::Left),
        Self::new(VerticalAlign::Bottom, HorizontalAlign::Middle),
        Self::new(VerticalAlign::Bottom, HorizontalAlign::Right),
    ];

    /// Position at `vertical` and `horizontal`.
    #[must_use]
    pub const fn new(vertical: VerticalAlign, horizontal: HorizontalAlign) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// Returns the next position in [`Align::ORDER`], wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let pos = Self::ORDER.iter().position(|a| *a == self).unwrap_or(0);
        Self::ORDER[(pos + 1) % Self::ORDER.len()]
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = match self.vertical {
            VerticalAlign::Top => "top",
            VerticalAlign::Bottom => "bottom",
        };
        let h = match self.horizontal {
            HorizontalAlign::Left => "left",
            HorizontalAlign::Middle => "middle",
            HorizontalAlign::Right => "right",
        };
        write!(f, "{v}-{h}")
    }
}

/// A textual option value that could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid {field}: {value}")]
pub struct ParseValueError {
    field: &'static str,
    value: String,
}

impl ParseValueError {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

impl FromStr for Align {
    type Err = ParseValueError;

    /// Parses `vertical-horizontal`, e.g. `bottom-right`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ORDER
            .into_iter()
            .find(|align| align.to_string() == normalized)
            .ok_or_else(|| ParseValueError::new("alignment", s))
    }
}

/// How strongly the kind's colours are applied to the notification chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColoredMode {
    /// Background, border and font from the kind's palette entry.
    #[default]
    Full,
    /// Neutral background with the kind's border and font colour.
    Border,
    /// Neutral styling regardless of kind.
    #[serde(rename = "none", alias = "plain")]
    Plain,
}

impl FromStr for ColoredMode {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "border" => Ok(Self::Border),
            "none" | "plain" => Ok(Self::Plain),
            _ => Err(ParseValueError::new("colored mode", s)),
        }
    }
}

/// How long a notification stays before it starts exiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayDuration {
    /// Auto-exit after the given delay.
    After(Duration),
    /// Stay until closed manually.
    Never,
}

impl DisplayDuration {
    /// Millisecond value that means "never auto-exit".
    pub const NEVER_MS: i64 = -1;

    /// Interprets a millisecond value, `-1` being [`DisplayDuration::Never`].
    ///
    /// Any other negative value is malformed and yields `None`.
    #[must_use]
    pub fn from_millis(ms: i64) -> Option<Self> {
        if ms == Self::NEVER_MS {
            Some(Self::Never)
        } else {
            u64::try_from(ms)
                .ok()
                .map(|ms| Self::After(Duration::from_millis(ms)))
        }
    }

    /// Returns the millisecond representation.
    #[must_use]
    pub fn as_millis(self) -> i64 {
        match self {
            Self::After(d) => i64::try_from(d.as_millis()).unwrap_or(i64::MAX),
            Self::Never => Self::NEVER_MS,
        }
    }

    /// Returns the auto-exit delay, if any.
    #[must_use]
    pub const fn delay(self) -> Option<Duration> {
        match self {
            Self::After(d) => Some(d),
            Self::Never => None,
        }
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self::After(Duration::from_millis(5000))
    }
}

impl Serialize for DisplayDuration {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_millis())
    }
}

impl<'de> Deserialize<'de> for DisplayDuration {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ms = i64::deserialize(deserializer)?;
        Self::from_millis(ms).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid duration {ms}: expected milliseconds or {}",
                Self::NEVER_MS
            ))
        })
    }
}

/// Callback invoked when the notification body is clicked.
#[derive(Clone)]
pub struct ClickHandler(Arc<dyn Fn() + Send + Sync>);

impl ClickHandler {
    /// Wraps `f`.
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Runs the callback.
    pub fn call(&self) {
        (self.0)();
    }
}

impl fmt::Debug for ClickHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClickHandler(..)")
    }
}

/// A request to show a notification.
///
/// Every optional field left unset is filled from [`NotifyConfig`] when the
/// notification is created.
#[derive(Debug, Clone, Default)]
pub struct NotificationRequest {
    /// Main line.
    pub message: String,
    /// Second, dimmer line.
    pub sub_message: Option<String>,
    /// Picks the colours and the icon.
    pub kind: NotificationKind,
    /// `None` uses the configured duration.
    pub duration: Option<DisplayDuration>,
    /// Overrides the kind colours.
    pub theme: Option<NotificationTheme>,
    /// `None` uses the configured corner.
    pub align: Option<Align>,
    /// `None` uses the configured icon setting.
    pub has_icon: Option<bool>,
    /// `None` uses the configured close setting.
    pub can_close: Option<bool>,
    /// `None` uses the configured colouring.
    pub colored: Option<ColoredMode>,
    /// Glyph shown instead of the kind icon.
    pub custom_icon: Option<String>,
    /// Runs when the toast body is clicked.
    pub on_click: Option<ClickHandler>,
}

impl NotificationRequest {
    /// Request of `kind` with `message`.
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            ..Self::default()
        }
    }

    /// Success request.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    /// Error request.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    /// Info request.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    /// Alert request.
    pub fn alert(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Alert, message)
    }

    /// Request without a kind colour.
    pub fn neutral(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Neutral, message)
    }

    /// Adds a second, dimmer line.
    #[must_use]
    pub fn with_sub_message(mut self, sub_message: impl Into<String>) -> Self {
        self.sub_message = Some(sub_message.into());
        self
    }

    /// Auto-exits after `duration`.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(DisplayDuration::After(duration));
        self
    }

    /// Sets the duration in milliseconds, `-1` meaning never.
    ///
    /// Malformed values leave the duration unset so the configured default applies.
    #[must_use]
    pub fn with_duration_ms(mut self, ms: i64) -> Self {
        self.duration = DisplayDuration::from_millis(ms);
        self
    }

    /// Keeps the notification until it is closed manually.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.duration = Some(DisplayDuration::Never);
        self
    }

    /// Uses `theme` instead of the kind colours.
    #[must_use]
    pub fn with_theme(mut self, theme: NotificationTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Places the toast at the given corner.
    #[must_use]
    pub fn with_align(mut self, vertical: VerticalAlign, horizontal: HorizontalAlign) -> Self {
        self.align = Some(Align::new(vertical, horizontal));
        self
    }

    /// Shows or hides the kind icon.
    #[must_use]
    pub fn with_icon(mut self, has_icon: bool) -> Self {
        self.has_icon = Some(has_icon);
        self
    }

    /// Shows or hides the close button.
    #[must_use]
    pub fn closable(mut self, can_close: bool) -> Self {
        self.can_close = Some(can_close);
        self
    }

    /// Sets how much of the toast takes the kind colour.
    #[must_use]
    pub fn with_colored(mut self, colored: ColoredMode) -> Self {
        self.colored = Some(colored);
        self
    }

    /// Shows `icon` instead of the kind icon.
    #[must_use]
    pub fn with_custom_icon(mut self, icon: impl Into<String>) -> Self {
        self.custom_icon = Some(icon.into());
        self
    }

    /// Runs `f` when the toast body is clicked.
    #[must_use]
    pub fn on_click(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_click = Some(ClickHandler::new(f));
        self
    }
}

/// A fully resolved notification as kept by the store.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique for the life of the process.
    pub id: NotificationId,
    /// Main line.
    pub message: String,
    /// Second, dimmer line.
    pub sub_message: Option<String>,
    /// Picks the colours and the icon.
    pub kind: NotificationKind,
    /// When the toast exits on its own.
    pub duration: DisplayDuration,
    /// Caller supplied colours, if any.
    pub theme: Option<NotificationTheme>,
    /// Corner the toast is stacked in.
    pub align: Align,
    /// Show the icon.
    pub has_icon: bool,
    /// Show the close button.
    pub can_close: bool,
    /// How much of the toast takes the kind colour.
    pub colored: ColoredMode,
    /// Glyph shown instead of the kind icon.
    pub custom_icon: Option<String>,
    /// Runs when the toast body is clicked.
    pub on_click: Option<ClickHandler>,
    /// Set once the exit animation starts; never cleared.
    pub is_exiting: bool,
}

impl Notification {
    /// Resolves a request against the configuration, field by field.
    #[must_use]
    pub fn resolve(id: NotificationId, request: NotificationRequest, config: &NotifyConfig) -> Self {
        Self {
            id,
            message: request.message,
            sub_message: request.sub_message,
            kind: request.kind,
            duration: request.duration.unwrap_or(config.duration),
            theme: request.theme,
            align: request.align.unwrap_or(config.align),
            has_icon: request.has_icon.unwrap_or(config.has_icon),
            can_close: request.can_close.unwrap_or(config.can_close),
            colored: request.colored.unwrap_or(config.colored),
            custom_icon: request.custom_icon,
            on_click: request.on_click,
            is_exiting: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let a = NotificationId::new();
        let b = NotificationId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn duration_sentinel_parses_as_never() {
        assert_eq!(DisplayDuration::from_millis(-1), Some(DisplayDuration::Never));
        assert_eq!(
            DisplayDuration::from_millis(5000),
            Some(DisplayDuration::After(Duration::from_secs(5)))
        );
        assert_eq!(DisplayDuration::from_millis(-20), None);
        assert_eq!(DisplayDuration::Never.delay(), None);
    }

    #[test]
    fn resolve_prefers_request_over_config() {
        let config = NotifyConfig::default();
        let request = NotificationRequest::error("boom")
            .with_align(VerticalAlign::Bottom, HorizontalAlign::Right)
            .with_icon(false)
            .persistent();

        let n = Notification::resolve(NotificationId::new(), request, &config);

        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.duration, DisplayDuration::Never);
        assert_eq!(
            n.align,
            Align::new(VerticalAlign::Bottom, HorizontalAlign::Right)
        );
        assert!(!n.has_icon);
        assert_eq!(n.can_close, config.can_close);
        assert_eq!(n.colored, config.colored);
        assert!(!n.is_exiting);
    }

    #[test]
    fn malformed_duration_falls_back_to_config() {
        let config = NotifyConfig::default();
        let request = NotificationRequest::info("hi").with_duration_ms(-7);
        let n = Notification::resolve(NotificationId::new(), request, &config);
        assert_eq!(n.duration, config.duration);
    }

    #[test]
    fn align_cycles_through_all_positions() {
        let mut align = Align::ORDER[0];
        for expected in Align::ORDER.iter().skip(1) {
            align = align.next();
            assert_eq!(align, *expected);
        }
        assert_eq!(align.next(), Align::ORDER[0]);
        assert_eq!(Align::ORDER[4].to_string(), "bottom-middle");
    }

    #[test]
    fn align_and_colored_parse_from_text() {
        assert_eq!(
            "Bottom-Right".parse(),
            Ok(Align::new(VerticalAlign::Bottom, HorizontalAlign::Right))
        );
        assert!("middle-top".parse::<Align>().is_err());
        assert_eq!("plain".parse(), Ok(ColoredMode::Plain));
        assert_eq!("border".parse(), Ok(ColoredMode::Border));
        assert!("loud".parse::<ColoredMode>().is_err());
    }

    #[test]
    fn kind_serializes_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            kind: NotificationKind,
            colored: ColoredMode,
        }

        let w: Wrapper = toml::from_str("kind = \"none\"\ncolored = \"plain\"").unwrap();
        assert_eq!(w.kind, NotificationKind::Neutral);
        assert_eq!(w.colored, ColoredMode::Plain);
    }
}
