//! Places toast stacks in the six corners of the screen.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::application::{CornerStack, ToastView};
use crate::domain::{Align, HorizontalAlign, NotificationId, VerticalAlign};
use crate::presentation::widgets::Toast;

/// Cells kept free between a stack and the screen edge.
pub const EDGE_MARGIN: u16 = 1;
/// Stack offset units per terminal row.
pub const OFFSET_UNITS_PER_ROW: u32 = 8;

/// Part of a toast under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastHit {
    /// The toast body.
    Body,
    /// The close button.
    Close,
}

/// Where one toast ends up on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastArea {
    /// Notification shown.
    pub id: NotificationId,
    /// Where the toast is painted.
    pub area: Rect,
    /// Close button cell, if drawn.
    pub close: Option<Rect>,
    /// Paint order; higher is drawn later.
    pub z_index: u32,
    /// Whether the toast is fading out.
    pub is_exiting: bool,
}

fn rows_for(offset: u32) -> u16 {
    u16::try_from(offset / OFFSET_UNITS_PER_ROW).unwrap_or(u16::MAX)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled(width: u16, scale: f32) -> u16 {
    ((f32::from(width) * scale).floor() as u16).max(1)
}

/// Rectangle of the front toast of a corner.
fn anchor(corner: Align, width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width.saturating_sub(EDGE_MARGIN * 2));
    let height = height.min(bounds.height.saturating_sub(EDGE_MARGIN * 2));

    let x = match corner.horizontal {
        HorizontalAlign::Left => bounds.x + EDGE_MARGIN,
        HorizontalAlign::Middle => bounds.x + bounds.width.saturating_sub(width) / 2,
        HorizontalAlign::Right => {
            bounds.right().saturating_sub(width).saturating_sub(EDGE_MARGIN)
        }
    };
    let y = match corner.vertical {
        VerticalAlign::Top => bounds.y + EDGE_MARGIN,
        VerticalAlign::Bottom => bounds
            .bottom()
            .saturating_sub(height)
            .saturating_sub(EDGE_MARGIN),
    };

    Rect::new(x, y, width, height)
}

/// Rectangle of `toast` once pushed back by its stack position.
fn place(corner: Align, front: Rect, toast: &ToastView, bounds: Rect) -> Rect {
    let width = scaled(front.width, toast.scale).min(front.width);
    let height = Toast::height(toast).min(front.height.max(1));
    let x = front.x + (front.width - width) / 2;
    let shift = rows_for(toast.offset);

    let y = match corner.vertical {
        VerticalAlign::Top => front.y.saturating_add(shift),
        VerticalAlign::Bottom => front
            .bottom()
            .saturating_sub(height)
            .saturating_sub(shift)
            .max(bounds.y),
    };

    Rect::new(x, y, width, height).intersection(bounds)
}

/// Screen rectangles of every visible toast, front toasts first.
#[must_use]
pub fn toast_areas(stacks: &[CornerStack], bounds: Rect) -> Vec<ToastArea> {
    let mut areas = Vec::new();
    for stack in stacks {
        let Some(front) = stack.toasts.first() else {
            continue;
        };
        let width = stack
            .toasts
            .iter()
            .map(Toast::natural_width)
            .max()
            .unwrap_or_default();
        let front_area = anchor(stack.corner, width, Toast::height(front), bounds);

        for toast in &stack.toasts {
            let area = if toast.index == 0 {
                front_area
            } else {
                place(stack.corner, front_area, toast, bounds)
            };
            areas.push(ToastArea {
                id: toast.id,
                area,
                close: Toast::close_area(toast, area),
                z_index: toast.z_index,
                is_exiting: toast.is_exiting,
            });
        }
    }
    areas
}

/// Finds the topmost toast under a cell.
///
/// A fading toast still covers what is painted below it, so a click on it
/// hits nothing.
#[must_use]
pub fn hit_test(
    stacks: &[CornerStack],
    bounds: Rect,
    column: u16,
    row: u16,
) -> Option<(NotificationId, ToastHit)> {
    let point = ratatui::layout::Position::new(column, row);
    toast_areas(stacks, bounds)
        .into_iter()
        .filter(|toast| toast.area.contains(point))
        .max_by_key(|toast| toast.z_index)
        .filter(|toast| !toast.is_exiting)
        .map(|toast| {
            let hit = if toast.close.is_some_and(|close| close.contains(point)) {
                ToastHit::Close
            } else {
                ToastHit::Body
            };
            (toast.id, hit)
        })
}

/// Draws every corner stack over whatever is already in the buffer.
pub struct NotificationLayer<'a> {
    stacks: &'a [CornerStack],
}

impl<'a> NotificationLayer<'a> {
    /// Layer drawing `stacks`.
    #[must_use]
    pub const fn new(stacks: &'a [CornerStack]) -> Self {
        Self { stacks }
    }
}

impl Widget for NotificationLayer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut placed: Vec<(ToastArea, &ToastView)> = toast_areas(self.stacks, area)
            .into_iter()
            .zip(self.stacks.iter().flat_map(|stack| stack.toasts.iter()))
            .collect();
        placed.sort_by_key(|(toast, _)| toast.z_index);

        for (toast, view) in placed {
            if toast.area.is_empty() {
                continue;
            }
            Toast::new(view).render(toast.area, buf);
        }
    }
}
