//! Single toast widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::application::{ToastIcon, ToastView};
use crate::domain::NotificationKind;
use crate::presentation::theme::ToastStyle;

/// Narrowest toast, borders included.
pub const MIN_TOAST_WIDTH: u16 = 20;
/// Widest toast, borders included.
pub const MAX_TOAST_WIDTH: u16 = 48;

const CLOSE_GLYPH: &str = "✕";

/// Glyph drawn for an icon.
#[must_use]
pub fn icon_glyph(icon: &ToastIcon) -> &str {
    match icon {
        ToastIcon::Custom(glyph) => glyph,
        ToastIcon::Builtin(kind) => match kind {
            NotificationKind::Success => "✔",
            NotificationKind::Error => "✖",
            NotificationKind::Info => "ℹ",
            NotificationKind::Alert => "⚠",
            NotificationKind::Neutral => "",
        },
    }
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Draws one notification inside a rounded box.
///
/// ```text
/// ╭────────────────────╮
/// │ ✔ Saved          ✕ │
/// │   all files written│
/// ╰────────────────────╯
/// ```
pub struct Toast<'a> {
    view: &'a ToastView,
}

impl<'a> Toast<'a> {
    /// Widget drawing `view`.
    #[must_use]
    pub const fn new(view: &'a ToastView) -> Self {
        Self { view }
    }

    fn icon_width(view: &ToastView) -> u16 {
        view.icon
            .as_ref()
            .map(icon_glyph)
            .filter(|glyph| !glyph.is_empty())
            .map_or(0, |glyph| text_width(glyph).saturating_add(1))
    }

    /// Width the toast asks for before stack scaling.
    #[must_use]
    pub fn natural_width(view: &ToastView) -> u16 {
        let icon = Self::icon_width(view);
        let close = if view.closable { 2 } else { 0 };
        let message = text_width(&view.message);
        let sub = view.sub_message.as_deref().map_or(0, text_width);

        message
            .max(sub)
            .saturating_add(icon)
            .saturating_add(close)
            .saturating_add(4)
            .clamp(MIN_TOAST_WIDTH, MAX_TOAST_WIDTH)
    }

    /// Rows the toast occupies.
    #[must_use]
    pub const fn height(view: &ToastView) -> u16 {
        if view.sub_message.is_some() { 4 } else { 3 }
    }

    /// Cell holding the close button when the toast is drawn into `area`.
    #[must_use]
    pub fn close_area(view: &ToastView, area: Rect) -> Option<Rect> {
        if !view.closable || area.width < 4 || area.height < 3 {
            return None;
        }
        Some(Rect::new(area.right().saturating_sub(3), area.y + 1, 1, 1))
    }
}

impl Widget for Toast<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.width < 3 || area.height < 3 {
            return;
        }

        let view = self.view;
        let style = ToastStyle::new(&view.colors, view.is_exiting);

        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style.border)
            .style(style.base);
        let inner = block.inner(area);
        block.render(area, buf);

        let close = Self::close_area(view, area);
        let text_area = Rect {
            x: inner.x.saturating_add(1),
            width: inner
                .width
                .saturating_sub(1)
                .saturating_sub(if close.is_some() { 2 } else { 0 }),
            ..inner
        };

        let glyph = view.icon.as_ref().map(icon_glyph).unwrap_or_default();
        let indent = " ".repeat(usize::from(Self::icon_width(view)));

        let mut first = Vec::with_capacity(2);
        if !glyph.is_empty() {
            first.push(Span::styled(format!("{glyph} "), style.message));
        }
        first.push(Span::styled(view.message.as_str(), style.message));

        let mut lines = vec![Line::from(first)];
        if let Some(sub) = view.sub_message.as_deref() {
            lines.push(Line::from(vec![
                Span::raw(indent),
                Span::styled(sub, style.sub_message),
            ]));
        }

        Paragraph::new(lines).style(style.base).render(text_area, buf);

        if let Some(close) = close {
            buf.set_string(close.x, close.y, CLOSE_GLYPH, style.close);
        }
    }
}
