mod appearance_port;
mod theme_preference_port;

pub use appearance_port::AppearancePort;
pub use theme_preference_port::{THEME_PREFERENCE_KEY, ThemePreferencePort};
