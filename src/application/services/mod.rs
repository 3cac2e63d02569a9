/// Corner stacks and their geometry.
pub mod grouping;
/// Auto-exit and removal timers.
pub mod lifecycle_scheduler;
/// The shared notification list.
pub mod notification_store;
/// Colour selection per colouring mode.
pub mod theme_resolver;
/// Render model for toasts.
pub mod toast_view;

pub use grouping::{CornerGroup, StackEntry, group_by_corner, stack_offset, stack_scale};
pub use lifecycle_scheduler::{EXIT_ANIMATION, LifecycleScheduler, Transition};
pub use notification_store::{NotificationList, NotificationStore};
pub use theme_resolver::{ResolvedColors, resolve_colors};
pub use toast_view::{CornerStack, ToastIcon, ToastView, present};
