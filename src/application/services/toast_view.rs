//! Render model handed to the presentation layer.

use crate::domain::{Align, ClickHandler, Notification, NotificationId, NotificationKind, ThemePalette};

use super::grouping::{StackEntry, group_by_corner};
use super::theme_resolver::{ResolvedColors, resolve_colors};

/// Icon shown in front of the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastIcon {
    /// The built-in glyph for the kind.
    Builtin(NotificationKind),
    /// A caller supplied glyph.
    Custom(String),
}

/// Everything needed to draw one toast.
#[derive(Debug, Clone)]
pub struct ToastView {
    /// Notification this toast shows.
    pub id: NotificationId,
    /// Main line.
    pub message: String,
    /// Second, dimmer line.
    pub sub_message: Option<String>,
    /// Colours after applying the colouring mode.
    pub colors: ResolvedColors,
    /// `None` when the icon is turned off.
    pub icon: Option<ToastIcon>,
    /// Runs when the body is clicked.
    pub on_click: Option<ClickHandler>,
    /// Whether the close button is drawn.
    pub closable: bool,
    /// Set while the exit animation runs.
    pub is_exiting: bool,
    /// Position in the stack, 0 at the front.
    pub index: usize,
    /// Distance pushed back from the front toast.
    pub offset: u32,
    /// Size relative to the front toast.
    pub scale: f32,
    /// Paint order; higher is drawn later.
    pub z_index: u32,
}

impl ToastView {
    /// Builds the view of a stacked notification.
    #[must_use]
    pub fn new(entry: &StackEntry<'_>, palette: &ThemePalette) -> Self {
        let n = entry.notification;
        Self {
            id: n.id,
            message: n.message.clone(),
            sub_message: n.sub_message.clone(),
            colors: resolve_colors(n.colored, n.kind, n.theme.as_ref(), palette),
            icon: icon_for(n),
            on_click: n.on_click.clone(),
            closable: n.can_close,
            is_exiting: n.is_exiting,
            index: entry.index,
            offset: entry.offset(),
            scale: entry.scale(),
            z_index: entry.z_index(),
        }
    }

    /// Whether the body reacts to clicks.
    #[must_use]
    pub fn is_clickable(&self) -> bool {
        self.on_click.is_some()
    }
}

fn icon_for(n: &Notification) -> Option<ToastIcon> {
    if let Some(custom) = &n.custom_icon {
        return Some(ToastIcon::Custom(custom.clone()));
    }
    (n.has_icon && n.kind.has_builtin_icon()).then_some(ToastIcon::Builtin(n.kind))
}

/// Visible toasts of one corner, front first.
#[derive(Debug, Clone)]
pub struct CornerStack {
    /// Corner this stack belongs to.
    pub corner: Align,
    /// Front first.
    pub toasts: Vec<ToastView>,
    /// Notifications beyond the cap.
    pub hidden: usize,
}

/// Builds the per-corner render model; corners without toasts are skipped.
#[must_use]
pub fn present(
    notifications: &[Notification],
    max_visible: usize,
    palette: &ThemePalette,
) -> Vec<CornerStack> {
    group_by_corner(notifications, max_visible)
        .into_iter()
        .filter(|group| !group.is_empty())
        .map(|group| CornerStack {
            corner: group.corner,
            toasts: group
                .visible
                .iter()
                .map(|entry| ToastView::new(entry, palette))
                .collect(),
            hidden: group.hidden,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ColoredMode, HorizontalAlign, NotificationRequest, NotifyConfig, VerticalAlign,
    };

    fn resolve(request: NotificationRequest) -> Notification {
        Notification::resolve(NotificationId::new(), request, &NotifyConfig::default())
    }

    #[test]
    fn test_custom_icon_wins_over_flags() {
        let n = resolve(
            NotificationRequest::neutral("hi")
                .with_icon(false)
                .with_custom_icon("*"),
        );
        assert_eq!(icon_for(&n), Some(ToastIcon::Custom("*".to_string())));
    }

    #[test]
    fn test_builtin_icon_follows_kind_and_flag() {
        let with_icon = resolve(NotificationRequest::alert("careful"));
        assert_eq!(
            icon_for(&with_icon),
            Some(ToastIcon::Builtin(NotificationKind::Alert))
        );

        let without = resolve(NotificationRequest::alert("careful").with_icon(false));
        assert_eq!(icon_for(&without), None);

        let neutral = resolve(NotificationRequest::neutral("plain"));
        assert_eq!(icon_for(&neutral), None);
    }

    #[test]
    fn test_present_resolves_affordances_and_layout() {
        let list = vec![
            resolve(
                NotificationRequest::success("newest")
                    .with_align(VerticalAlign::Bottom, HorizontalAlign::Left)
                    .on_click(|| {}),
            ),
            resolve(
                NotificationRequest::error("older")
                    .with_align(VerticalAlign::Bottom, HorizontalAlign::Left)
                    .closable(false)
                    .with_colored(ColoredMode::Plain),
            ),
        ];

        let stacks = present(&list, 4, &ThemePalette::DARK);
        assert_eq!(stacks.len(), 1);

        let stack = &stacks[0];
        assert_eq!(stack.corner.to_string(), "bottom-left");
        assert_eq!(stack.hidden, 0);

        let front = &stack.toasts[0];
        assert_eq!(front.message, "newest");
        assert!(front.is_clickable());
        assert!(front.closable);
        assert_eq!(front.offset, 0);
        assert_eq!(front.colors.border, ThemePalette::DARK.success.border_color);

        let back = &stack.toasts[1];
        assert!(!back.is_clickable());
        assert!(!back.closable);
        assert_eq!(back.index, 1);
        assert_eq!(back.offset, 16);
        assert_eq!(back.z_index, 9998);
        assert_eq!(back.colors.border, ThemePalette::DARK.none.border_color);
    }
}
