//! Interactive playground driving the notification provider.

use crossterm::event::{Event, EventStream, KeyEvent, MouseEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use tracing::{debug, info};

use crate::application::{NotificationsHandle, NotificationsProvider};
use crate::domain::{Align, NotificationKind, NotificationRequest};
use crate::presentation::events::{EventHandler, EventResult, KeyAction, ToastAction};
use crate::presentation::theme::ColorConverter;
use crate::presentation::ui::NotificationLayer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

const HELP: [(&str, &str); 8] = [
    ("1-5", "success, error, info, alert, plain"),
    ("n", "notification that stays until closed"),
    ("p", "next corner"),
    ("t", "toggle light/dark"),
    ("x", "close newest"),
    ("click", "open toast"),
    ("✕", "close toast"),
    ("q", "quit"),
];

fn sample(kind: NotificationKind) -> (&'static str, &'static str) {
    match kind {
        NotificationKind::Success => ("Changes saved", "Everything is on disk"),
        NotificationKind::Error => ("Upload failed", "The server closed the connection"),
        NotificationKind::Info => ("New version available", "Click to read the changelog"),
        NotificationKind::Alert => ("Battery low", "12% remaining"),
        NotificationKind::Neutral => ("Heads up", "Nothing to worry about"),
    }
}

/// Main application orchestrator.
pub struct App {
    provider: NotificationsProvider,
    state: AppState,
    align: Align,
    mouse: bool,
    bounds: Rect,
    sent: u64,
}

impl App {
    /// Playground over `provider`; `mouse` enables click handling.
    #[must_use]
    pub fn new(provider: NotificationsProvider, mouse: bool) -> Self {
        let align = provider.config().align;
        Self {
            provider,
            state: AppState::Running,
            align,
            mouse,
            bounds: Rect::default(),
            sent: 0,
        }
    }

    /// Runs until the user quits, then cancels every pending timer.
    ///
    /// # Errors
    /// Returns an error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut notifications = self.provider.subscribe();
        let mut mode = self.provider.subscribe_mode();

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                Some(event) = terminal_events.next() => {
                    if self.handle_terminal_event(event?) == EventResult::Exit {
                        self.state = AppState::Exiting;
                        continue;
                    }
                }
                Ok(()) = notifications.changed() => {}
                Ok(()) = mode.changed() => {
                    let current = *mode.borrow_and_update();
                    debug!(mode = %current, "Colour mode changed");
                }
                else => break,
            }
            terminal.draw(|frame| self.render(frame))?;
        }

        self.provider.shutdown();
        info!("Application exiting normally");
        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) if self.mouse => self.handle_mouse(&mouse),
            Event::Resize(width, height) => {
                self.bounds = Rect::new(0, 0, width, height);
                EventResult::Consumed
            }
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }
        let Some(action) = EventHandler::key_action(&key) else {
            return EventResult::Continue;
        };

        match action {
            KeyAction::Notify(kind) => self.send(kind, false),
            KeyAction::NotifyPersistent => self.send(NotificationKind::Info, true),
            KeyAction::CycleAlign => {
                self.align = self.align.next();
                self.provider.notify(
                    NotificationRequest::neutral(format!("Now showing at {}", self.align))
                        .with_align(self.align.vertical, self.align.horizontal),
                );
            }
            KeyAction::ToggleMode => {
                self.provider.toggle_mode();
            }
            KeyAction::CloseNewest => {
                let newest = self
                    .provider
                    .notifications()
                    .iter()
                    .find(|n| !n.is_exiting)
                    .map(|n| n.id);
                if let Some(id) = newest {
                    self.provider.exit_notification(id);
                }
            }
        }
        EventResult::Consumed
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> EventResult {
        let stacks = self.provider.present();
        match EventHandler::toast_action(mouse, &stacks, self.bounds) {
            Some(ToastAction::Activate(id)) => {
                let handler = stacks
                    .iter()
                    .flat_map(|stack| stack.toasts.iter())
                    .find(|toast| toast.id == id)
                    .and_then(|toast| toast.on_click.clone());
                if let Some(handler) = handler {
                    debug!(%id, "Toast clicked");
                    handler.call();
                }
                EventResult::Consumed
            }
            Some(ToastAction::Close(id)) => {
                self.provider.exit_notification(id);
                EventResult::Consumed
            }
            None => EventResult::Continue,
        }
    }

    fn send(&mut self, kind: NotificationKind, persistent: bool) {
        self.sent += 1;
        let (message, sub_message) = sample(kind);
        let mut request = NotificationRequest::new(kind, message)
            .with_sub_message(format!("#{} · {sub_message}", self.sent))
            .with_align(self.align.vertical, self.align.horizontal);

        if persistent {
            request = request.persistent();
        }
        if kind == NotificationKind::Info {
            let handle: NotificationsHandle = self.provider.handle();
            request = request.on_click(move || {
                if let Err(e) = handle.notify(NotificationRequest::success("Opened the changelog")) {
                    debug!(error = %e, "Toast clicked after the provider shut down");
                }
            });
        }

        self.provider.notify(request);
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.bounds = area;

        let palette = self.provider.palette();
        let screen = Style::default()
            .bg(ColorConverter::to_ratatui(palette.none.background_color))
            .fg(ColorConverter::to_ratatui(palette.none.font_color));
        let accent = Style::default()
            .fg(ColorConverter::to_ratatui(palette.info.border_color))
            .add_modifier(Modifier::BOLD);

        Block::default().style(screen).render(area, frame.buffer_mut());

        let [_, body, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(13),
            Constraint::Fill(1),
        ])
        .areas(area);

        let mut lines = vec![
            Line::from(Span::styled("notiflow", accent)),
            Line::from(format!(
                "mode {} · corner {} · {} live",
                self.provider.mode(),
                self.align,
                self.provider.notifications().len()
            )),
            Line::default(),
        ];
        lines.extend(HELP.iter().map(|(key, text)| {
            Line::from(vec![
                Span::styled(format!("{key:>6}  "), accent),
                Span::raw(*text),
            ])
        }));

        Paragraph::new(lines)
            .centered()
            .style(screen)
            .render(body, frame.buffer_mut());

        let stacks = self.provider.present();
        NotificationLayer::new(&stacks).render(area, frame.buffer_mut());
    }
}
