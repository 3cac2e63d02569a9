//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::application::CornerStack;
use crate::domain::{NotificationId, NotificationKind};
use crate::presentation::ui::{ToastHit, hit_test};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed.
    Consumed,
}

/// Keyboard commands of the demo screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Show a notification of the kind.
    Notify(NotificationKind),
    /// Show a notification that never times out.
    NotifyPersistent,
    /// Move new notifications to the next corner.
    CycleAlign,
    /// Flip light and dark.
    ToggleMode,
    /// Dismiss the most recent notification.
    CloseNewest,
}

/// Pointer interaction with a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastAction {
    /// Body clicked.
    Activate(NotificationId),
    /// Close button clicked.
    Close(NotificationId),
}

/// Terminal event handler.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key is a quit event.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
                ..
            } | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } | KeyEvent {
                code: KeyCode::Esc,
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }

    /// Maps a key press to a demo command.
    #[must_use]
    pub fn key_action(key: &KeyEvent) -> Option<KeyAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('1') => Some(KeyAction::Notify(NotificationKind::Success)),
            KeyCode::Char('2') => Some(KeyAction::Notify(NotificationKind::Error)),
            KeyCode::Char('3') => Some(KeyAction::Notify(NotificationKind::Info)),
            KeyCode::Char('4') => Some(KeyAction::Notify(NotificationKind::Alert)),
            KeyCode::Char('5') => Some(KeyAction::Notify(NotificationKind::Neutral)),
            KeyCode::Char('n') => Some(KeyAction::NotifyPersistent),
            KeyCode::Char('p') => Some(KeyAction::CycleAlign),
            KeyCode::Char('t') => Some(KeyAction::ToggleMode),
            KeyCode::Char('x') | KeyCode::Backspace => Some(KeyAction::CloseNewest),
            _ => None,
        }
    }

    /// Resolves a left click against the toasts on screen.
    #[must_use]
    pub fn toast_action(
        mouse: &MouseEvent,
        stacks: &[CornerStack],
        bounds: Rect,
    ) -> Option<ToastAction> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        hit_test(stacks, bounds, mouse.column, mouse.row).map(|(id, hit)| match hit {
            ToastHit::Body => ToastAction::Activate(id),
            ToastHit::Close => ToastAction::Close(id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::present;
    use crate::domain::{Notification, NotificationRequest, NotifyConfig, ThemePalette};
    use crate::presentation::ui::toast_areas;
    use test_case::test_case;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_quit_events() {
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Esc,
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('1'),
            KeyModifiers::NONE
        )));
    }

    #[test_case('1', NotificationKind::Success ; "success")]
    #[test_case('2', NotificationKind::Error ; "error")]
    #[test_case('3', NotificationKind::Info ; "info")]
    #[test_case('4', NotificationKind::Alert ; "alert")]
    #[test_case('5', NotificationKind::Neutral ; "neutral")]
    fn test_digit_keys_notify(c: char, kind: NotificationKind) {
        assert_eq!(
            EventHandler::key_action(&make_key_event(KeyCode::Char(c), KeyModifiers::NONE)),
            Some(KeyAction::Notify(kind))
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release =
            KeyEvent::new_with_kind(KeyCode::Char('t'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(EventHandler::key_action(&release), None);
    }

    #[test]
    fn test_clicks_map_to_toast_actions() {
        let bounds = Rect::new(0, 0, 80, 24);
        let n = Notification::resolve(
            NotificationId::new(),
            NotificationRequest::success("saved"),
            &NotifyConfig::default(),
        );
        let stacks = present(std::slice::from_ref(&n), 4, &ThemePalette::LIGHT);
        let placed = toast_areas(&stacks, bounds)[0];
        let close = placed.close.unwrap();

        assert_eq!(
            EventHandler::toast_action(&click(placed.area.x + 2, placed.area.y + 1), &stacks, bounds),
            Some(ToastAction::Activate(n.id))
        );
        assert_eq!(
            EventHandler::toast_action(&click(close.x, close.y), &stacks, bounds),
            Some(ToastAction::Close(n.id))
        );
        assert_eq!(EventHandler::toast_action(&click(0, 0), &stacks, bounds), None);

        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            ..click(close.x, close.y)
        };
        assert_eq!(EventHandler::toast_action(&moved, &stacks, bounds), None);
    }
}
