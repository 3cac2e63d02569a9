//! Infrastructure layer with external service adapters.

/// Terminal appearance detection.
pub mod appearance;
/// Application configuration.
pub mod config;
/// Theme preference persistence.
pub mod theme_preference;

pub use appearance::TerminalAppearance;
pub use config::{AppConfig, CliArgs, LogLevel, SettingsStore, ThemeMode};
pub use theme_preference::{FileThemePreference, MemoryThemePreference};
