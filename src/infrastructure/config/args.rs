use super::app_config::{LogLevel, ThemeMode};
use crate::domain::{Align, ColoredMode};
use clap::Parser;
use std::path::PathBuf;

/// Command line overrides for the configuration file.
#[derive(Debug, Parser)]
#[command(
    name = "notiflow",
    version,
    about = "Stacked toast notifications for the terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable mouse support.
    #[arg(long)]
    pub mouse: Option<bool>,

    /// Default display duration in milliseconds, -1 keeps toasts until closed.
    #[arg(long, value_name = "MS", allow_hyphen_values = true)]
    pub duration: Option<i64>,

    /// Default corner, e.g. `bottom-right` or `top-middle`.
    #[arg(long, value_name = "CORNER")]
    pub align: Option<Align>,

    /// Default colouring: full, border or none.
    #[arg(long, value_name = "MODE")]
    pub colored: Option<ColoredMode>,

    /// Show built-in icons by default.
    #[arg(long)]
    pub has_icon: Option<bool>,

    /// Show the close button by default.
    #[arg(long)]
    pub can_close: Option<bool>,

    /// Toasts shown per corner before the rest are hidden.
    #[arg(long, value_name = "N")]
    pub max_visible: Option<usize>,

    /// Colour mode.
    #[arg(long, value_enum)]
    pub theme: Option<ThemeMode>,
}
