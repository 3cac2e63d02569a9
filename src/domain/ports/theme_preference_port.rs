//! Theme preference port definition.

use crate::domain::errors::PreferenceError;
use crate::domain::theme::ColorMode;

/// Key the explicit colour mode choice is stored under.
pub const THEME_PREFERENCE_KEY: &str = "notiflow-theme";

/// Port for persisting the user's explicit colour mode choice.
#[cfg_attr(test, mockall::automock)]
pub trait ThemePreferencePort: Send + Sync {
    /// Loads the stored choice, if the user ever made one.
    fn load(&self) -> Result<Option<ColorMode>, PreferenceError>;

    /// Stores the choice.
    fn store(&self, mode: ColorMode) -> Result<(), PreferenceError>;
}
