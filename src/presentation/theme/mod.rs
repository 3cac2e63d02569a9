//! Terminal colours for toasts.

mod adapter;
mod service;

pub use adapter::ColorConverter;
pub use service::ToastStyle;
