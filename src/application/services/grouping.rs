//! Corner grouping and stacking layout.
//!
//! Notifications are partitioned into six buckets, one per [`Align`], in
//! [`Align::ORDER`]. Each bucket keeps store order (newest first) and is capped;
//! the position inside the capped bucket is the stack index, which drives the
//! z-order, the offset from the anchored edge and the depth scale.

use crate::domain::{Align, Notification};

/// Smallest increment between two stacked toasts, in pixels.
pub const MIN_STEP: u32 = 4;
/// Increment between the first and second toast, in pixels.
pub const BASE_STEP: u32 = 16;
/// How much each further increment shrinks, in pixels.
pub const STEP_DECAY: u32 = 2;
/// Scale lost per stack level.
pub const SCALE_DECAY: f32 = 0.02;
/// Z-index of the frontmost toast.
pub const BASE_Z_INDEX: u32 = 9999;

/// Distance added between stack level `k` and `k + 1`.
#[must_use]
pub fn step(k: usize) -> u32 {
    let decay = u32::try_from(k)
        .unwrap_or(u32::MAX)
        .saturating_mul(STEP_DECAY);
    BASE_STEP.saturating_sub(decay).max(MIN_STEP)
}

/// Offset from the anchored edge of the toast at `index`, in pixels.
#[must_use]
pub fn stack_offset(index: usize) -> u32 {
    (0..index).map(step).sum()
}

/// Depth scale of the toast at `index`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn stack_scale(index: usize) -> f32 {
    (1.0 - index as f32 * SCALE_DECAY).max(0.0)
}

/// Z-index of the toast at `index`; higher renders in front.
#[must_use]
pub fn z_index(index: usize) -> u32 {
    BASE_Z_INDEX.saturating_sub(u32::try_from(index).unwrap_or(u32::MAX))
}

/// A notification placed in its corner stack.
#[derive(Debug, Clone, Copy)]
pub struct StackEntry<'a> {
    /// Position in the stack, 0 at the front.
    pub index: usize,
    /// The notification itself.
    pub notification: &'a Notification,
}

impl StackEntry<'_> {
    /// Distance pushed back from the front toast.
    #[must_use]
    pub fn offset(&self) -> u32 {
        stack_offset(self.index)
    }

    /// Size relative to the front toast.
    #[must_use]
    pub fn scale(&self) -> f32 {
        stack_scale(self.index)
    }

    /// Paint order; higher is drawn later.
    #[must_use]
    pub fn z_index(&self) -> u32 {
        z_index(self.index)
    }
}

/// The visible stack of one corner.
#[derive(Debug, Clone)]
pub struct CornerGroup<'a> {
    /// Corner this stack belongs to.
    pub corner: Align,
    /// Front first.
    pub visible: Vec<StackEntry<'a>>,
    /// Notifications in this corner beyond the cap.
    pub hidden: usize,
}

impl CornerGroup<'_> {
    /// Whether the corner shows nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Partitions `notifications` into the six corner stacks.
///
/// Always returns six groups in [`Align::ORDER`]; empty corners have no entries.
#[must_use]
pub fn group_by_corner(notifications: &[Notification], max_visible: usize) -> Vec<CornerGroup<'_>> {
    Align::ORDER
        .iter()
        .map(|&corner| {
            let mut group = CornerGroup {
                corner,
                visible: Vec::new(),
                hidden: 0,
            };
            for notification in notifications.iter().filter(|n| n.align == corner) {
                if group.visible.len() < max_visible {
                    group.visible.push(StackEntry {
                        index: group.visible.len(),
                        notification,
                    });
                } else {
                    group.hidden += 1;
                }
            }
            group
        })
        .collect()
}
