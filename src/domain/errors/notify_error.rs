//! Notification API error types.

use thiserror::Error;

/// Usage errors raised by the notification API.
///
/// Stale ids and malformed optional fields are never reported here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum NotifyError {
    #[error("notifications provider is not available: {reason}")]
    ProviderUnavailable { reason: String },

    #[error("notifications provider requires a running tokio runtime")]
    NoRuntime,
}

impl NotifyError {
    /// Creates provider unavailable error.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            reason: reason.into(),
        }
    }
}
