use std::sync::Arc;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use notiflow::application::{NotificationsProvider, ProviderOptions};
use notiflow::infrastructure::{
    AppConfig, CliArgs, FileThemePreference, SettingsStore, TerminalAppearance,
};
use notiflow::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config(storage: &SettingsStore) -> Result<AppConfig> {
    let args = CliArgs::parse();
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn create_app() -> Result<(App, bool)> {
    let storage = SettingsStore::for_user()?;
    let config = load_config(&storage)?;

    init_logging(&config)?;

    info!(version = notiflow::VERSION, "Starting {}", notiflow::NAME);

    let mut options = ProviderOptions::default()
        .with_preference(Arc::new(FileThemePreference::new(storage)))
        .with_appearance(Arc::new(TerminalAppearance::default()));
    if let Some(mode) = config.theme.mode.pinned() {
        options = options.with_default_mode(mode);
    }

    let provider = NotificationsProvider::new(config.notifications, options)?;

    Ok((App::new(provider, config.mouse), config.mouse))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let (app, mouse) = create_app()?;

    let mut terminal = ratatui::init();
    if mouse && let Err(e) = crossterm::execute!(std::io::stdout(), EnableMouseCapture) {
        warn!(error = %e, "Failed to enable mouse capture");
    }

    let result = app.run(&mut terminal).await;

    if mouse && let Err(e) = crossterm::execute!(std::io::stdout(), DisableMouseCapture) {
        warn!(error = %e, "Failed to disable mouse capture");
    }
    ratatui::restore();

    result
}
