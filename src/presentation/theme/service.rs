use ratatui::style::{Modifier, Style};

use super::adapter::ColorConverter;
use crate::application::services::ResolvedColors;

/// How far text moves towards the background for secondary lines.
const DIM_AMOUNT: f32 = 0.35;
/// How far everything moves towards the background while a toast exits.
const EXIT_FADE: f32 = 0.6;

/// Styles a single toast is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastStyle {
    /// Fill of the whole toast.
    pub base: Style,
    /// Rounded border.
    pub border: Style,
    /// Bold message line.
    pub message: Style,
    /// Dimmed second line.
    pub sub_message: Style,
    /// The `✕` cell.
    pub close: Style,
}

impl ToastStyle {
    /// Styles for `colors`, faded towards the background while `exiting`.
    #[must_use]
    pub fn new(colors: &ResolvedColors, exiting: bool) -> Self {
        let fade = if exiting { EXIT_FADE } else { 0.0 };
        let background = ColorConverter::to_ratatui(colors.background);
        let font = ColorConverter::fade(colors.font, colors.background, fade);
        let border = ColorConverter::fade(colors.border, colors.background, fade);
        let dimmed = ColorConverter::fade(
            colors.font,
            colors.background,
            DIM_AMOUNT + (1.0 - DIM_AMOUNT) * fade * 0.5,
        );

        let base = Style::default().bg(background).fg(font);
        let mut message = base.add_modifier(Modifier::BOLD);
        if exiting {
            message = message.add_modifier(Modifier::DIM);
        }

        Self {
            base,
            border: base.fg(border),
            message,
            sub_message: base.fg(dimmed),
            close: base.fg(dimmed),
        }
    }
}
