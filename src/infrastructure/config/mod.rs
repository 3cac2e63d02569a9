//! Application configuration.

/// `config.toml` contents.
pub mod app_config;
/// Command line arguments.
pub mod args;
/// `state.toml` contents.
pub mod state_config;
/// Reading and writing the settings files.
pub mod storage;

pub use app_config::{AppConfig, LogLevel, ThemeConfig, ThemeMode};
pub use args::CliArgs;
pub use state_config::StateConfig;
pub use storage::{SettingsStore, StorageError};
