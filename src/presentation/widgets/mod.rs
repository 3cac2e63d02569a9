mod toast;

pub use toast::{MAX_TOAST_WIDTH, MIN_TOAST_WIDTH, Toast, icon_glyph};
