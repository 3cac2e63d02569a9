//! Theme preference persistence error types.

use thiserror::Error;

/// Preference storage error variants.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// The stored preference could not be read.
    #[error("failed to read theme preference: {0}")]
    ReadFailed(String),

    /// The preference could not be written.
    #[error("failed to store theme preference: {0}")]
    WriteFailed(String),
}
