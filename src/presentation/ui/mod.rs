//! UI screens.

mod app;
mod toast_layer;

pub use app::App;
pub use toast_layer::{
    EDGE_MARGIN, NotificationLayer, OFFSET_UNITS_PER_ROW, ToastArea, ToastHit, hit_test,
    toast_areas,
};
