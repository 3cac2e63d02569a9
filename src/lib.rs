//! Notiflow - stacked toast notifications for terminal UIs.
//!
//! A provider owns the notification list, schedules auto-exit and removal
//! timers, groups toasts per screen corner and resolves their colours for the
//! current light or dark mode.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the provider and its services.
pub mod application;
/// Domain layer containing notification types, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and persistence adapters.
pub mod infrastructure;
/// Presentation layer containing widgets and the demo screen.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "notiflow";
