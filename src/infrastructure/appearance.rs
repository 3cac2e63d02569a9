//! Terminal background detection.

use std::time::Duration;

use tracing::debug;

use crate::domain::ports::AppearancePort;
use crate::domain::theme::ColorMode;

/// How long to wait for the terminal to answer the background query.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_millis(100);

/// Reads light or dark from the terminal's background colour.
///
/// Must be queried before the terminal enters raw mode and the alternate screen.
#[derive(Debug, Clone, Copy)]
pub struct TerminalAppearance {
    timeout: Duration,
}

impl TerminalAppearance {
    /// Waits at most `timeout` for the terminal to answer.
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for TerminalAppearance {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY_TIMEOUT)
    }
}

impl AppearancePort for TerminalAppearance {
    fn detect(&self) -> Option<ColorMode> {
        match termbg::theme(self.timeout) {
            Ok(termbg::Theme::Light) => Some(ColorMode::Light),
            Ok(termbg::Theme::Dark) => Some(ColorMode::Dark),
            Err(e) => {
                debug!(error = %e, "Terminal background detection failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_appearance_default_timeout() {
        let appearance = TerminalAppearance::default();
        assert_eq!(appearance.timeout, DEFAULT_QUERY_TIMEOUT);
    }
}
