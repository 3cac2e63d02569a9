//! Application layer: notification lifecycle, grouping and theming services.

/// Notification provider and handles.
pub mod provider;
/// Store, scheduler, grouping and colour services.
pub mod services;

pub use provider::{NotificationsHandle, NotificationsProvider, ProviderOptions};
pub use services::{CornerStack, NotificationList, ToastIcon, ToastView};
