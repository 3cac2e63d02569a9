//! On-disk settings: `config.toml` for what the user writes, `state.toml` for
//! what the app remembers.

use super::app_config::AppConfig;
use super::state_config::StateConfig;
use crate::domain::ColorMode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const CONFIG_FILE: &str = "config.toml";
const STATE_FILE: &str = "state.toml";

/// Failure to reach or write the settings files.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No per-user configuration directory exists on this platform.
    #[error("no per-user configuration directory for notiflow")]
    NoSettingsDir,
    /// Reading or writing a settings file failed.
    #[error("{path}: {source}")]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// A value could not be encoded as TOML.
    #[error("cannot encode settings: {0}")]
    Encode(#[from] toml::ser::Error),
}

impl StorageError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Reads and writes the files under notiflow's settings directory.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    /// Opens the store in the per-user configuration directory.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NoSettingsDir`] when the platform has no home
    /// directory.
    pub fn for_user() -> Result<Self, StorageError> {
        AppConfig::default_config_dir()
            .map(Self::in_dir)
            .ok_or(StorageError::NoSettingsDir)
    }

    /// Opens the store in `dir`.
    #[must_use]
    pub const fn in_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Directory holding the settings files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn state_path(&self) -> PathBuf {
        self.dir.join(STATE_FILE)
    }

    /// Loads `config.toml`, or the file at `path_override`.
    ///
    /// A missing file is written out with defaults so users have something to
    /// edit. A file that does not parse is left alone and defaults are used.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the file cannot be read or the default
    /// cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, StorageError> {
        let path = path_override.map_or_else(|| self.dir.join(CONFIG_FILE), Path::to_path_buf);

        match Self::read_toml::<AppConfig>(&path)? {
            Some(config) => Ok(config),
            None if path.exists() => Ok(AppConfig::default()),
            None => {
                let config = AppConfig::default();
                info!(path = %path.display(), "Writing default notification settings");
                Self::write_atomic(&path, &config)?;
                Ok(config)
            }
        }
    }

    /// Loads `state.toml`. Missing or unreadable state starts fresh.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the file exists but cannot be read.
    pub fn load_state(&self) -> Result<StateConfig, StorageError> {
        Ok(Self::read_toml(&self.state_path())?.unwrap_or_default())
    }

    /// Replaces `state.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the state cannot be written.
    pub fn save_state(&self, state: &StateConfig) -> Result<(), StorageError> {
        Self::write_atomic(&self.state_path(), state)
    }

    /// Colour mode the user last picked, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the state file cannot be read.
    pub fn load_preference(&self) -> Result<Option<ColorMode>, StorageError> {
        self.load_state().map(|state| state.theme)
    }

    /// Records `mode` as the user's pick, keeping the rest of the state.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the state file cannot be read or written.
    pub fn store_preference(&self, mode: ColorMode) -> Result<(), StorageError> {
        let mut state = self.load_state()?;
        if state.theme == Some(mode) {
            return Ok(());
        }
        state.theme = Some(mode);
        self.save_state(&state)?;
        debug!(%mode, "Remembered colour mode");
        Ok(())
    }

    /// `Ok(None)` for a missing or malformed file.
    fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::io(path, e)),
        };
        match toml::from_str(&content) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unreadable settings file");
                Ok(None)
            }
        }
    }

    /// Writes through a sibling temp file so readers never see half a file.
    fn write_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
        let content = toml::to_string_pretty(value)?;
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).map_err(|e| StorageError::io(dir, e))?;

        let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| StorageError::io(dir, e))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| StorageError::io(temp.path(), e))?;
        temp.persist(path).map_err(|e| StorageError::io(path, e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DisplayDuration;
    use crate::domain::ports::THEME_PREFERENCE_KEY;
    use tempfile::tempdir;

    fn store_in(dir: &Path) -> SettingsStore {
        SettingsStore::in_dir(dir.to_path_buf())
    }

    #[test]
    fn test_missing_config_is_written_with_defaults() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("notiflow");
        let store = store_in(&nested);

        let config = store.load_config(None).unwrap();
        assert!(config.mouse);
        assert_eq!(config.notifications.duration, DisplayDuration::default());
        assert!(nested.join(CONFIG_FILE).exists());

        let reloaded = store.load_config(None).unwrap();
        assert_eq!(reloaded.notifications, config.notifications);
    }

    #[test]
    fn test_config_override_path_is_used() {
        let dir = tempdir().unwrap();
        let custom = dir.path().join("custom.toml");
        fs::write(&custom, "[notifications]\nmax_visible = 2\n").unwrap();

        let config = store_in(dir.path()).load_config(Some(&custom)).unwrap();
        assert_eq!(config.notifications.max_visible, 2);
        assert!(!dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_malformed_config_falls_back_and_is_kept() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "invalid_toml = [").unwrap();

        let config = store_in(dir.path()).load_config(None).unwrap();
        assert!(config.mouse);
        assert_eq!(fs::read_to_string(&path).unwrap(), "invalid_toml = [");
    }

    #[test]
    fn test_preference_is_written_under_its_key() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        assert_eq!(store.load_preference().unwrap(), None);

        store.store_preference(ColorMode::Dark).unwrap();

        let content = fs::read_to_string(dir.path().join(STATE_FILE)).unwrap();
        assert!(content.contains(&format!("{THEME_PREFERENCE_KEY} = \"dark\"")));
        assert_eq!(store.load_preference().unwrap(), Some(ColorMode::Dark));
    }

    #[test]
    fn test_unknown_preference_value_starts_fresh() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(STATE_FILE), "notiflow-theme = \"sepia\"").unwrap();

        let store = store_in(dir.path());
        assert_eq!(store.load_state().unwrap(), StateConfig::default());
        assert_eq!(store.load_preference().unwrap(), None);

        store.store_preference(ColorMode::Light).unwrap();
        assert_eq!(store.load_preference().unwrap(), Some(ColorMode::Light));
    }

    #[test]
    fn test_store_preference_reports_blocked_dir() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocked");
        fs::write(&blocker, "not a directory").unwrap();

        let err = store_in(&blocker).store_preference(ColorMode::Dark).unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
    }

    #[test]
    fn test_write_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        store.store_preference(ColorMode::Dark).unwrap();
        store.store_preference(ColorMode::Light).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from(STATE_FILE)]);
    }
}
