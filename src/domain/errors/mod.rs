//! Domain error types.

mod notify_error;
mod preference_error;

pub use notify_error::NotifyError;
pub use preference_error::PreferenceError;
