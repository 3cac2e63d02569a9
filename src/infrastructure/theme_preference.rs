//! Theme preference adapters.

use parking_lot::Mutex;

use crate::domain::errors::PreferenceError;
use crate::domain::ports::ThemePreferencePort;
use crate::domain::theme::ColorMode;

use super::config::SettingsStore;

/// Keeps the explicit colour mode choice in the state file.
pub struct FileThemePreference {
    store: SettingsStore,
}

impl FileThemePreference {
    /// Wraps the settings store the preference lives in.
    #[must_use]
    pub const fn new(store: SettingsStore) -> Self {
        Self { store }
    }
}

impl ThemePreferencePort for FileThemePreference {
    fn load(&self) -> Result<Option<ColorMode>, PreferenceError> {
        self.store
            .load_preference()
            .map_err(|e| PreferenceError::ReadFailed(e.to_string()))
    }

    fn store(&self, mode: ColorMode) -> Result<(), PreferenceError> {
        self.store
            .store_preference(mode)
            .map_err(|e| PreferenceError::WriteFailed(e.to_string()))
    }
}

/// Preference that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryThemePreference {
    mode: Mutex<Option<ColorMode>>,
}

impl MemoryThemePreference {
    /// Starts with no stored mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `mode` stored.
    #[must_use]
    pub fn with_mode(mode: ColorMode) -> Self {
        Self {
            mode: Mutex::new(Some(mode)),
        }
    }
}

impl ThemePreferencePort for MemoryThemePreference {
    fn load(&self) -> Result<Option<ColorMode>, PreferenceError> {
        Ok(*self.mode.lock())
    }

    fn store(&self, mode: ColorMode) -> Result<(), PreferenceError> {
        *self.mode.lock() = Some(mode);
        Ok(())
    }
}
