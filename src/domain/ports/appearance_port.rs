//! System appearance port definition.

use crate::domain::theme::ColorMode;

/// Port for querying the host's light/dark preference.
#[cfg_attr(test, mockall::automock)]
pub trait AppearancePort: Send + Sync {
    /// Returns the system colour mode, or `None` when it cannot be determined.
    fn detect(&self) -> Option<ColorMode>;
}
