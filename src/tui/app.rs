use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{Action, AppEvent, Notification, NotificationLevel};
use super::theme;
use super::widgets::custom_voice_input::{CustomVoiceInput, CustomVoiceProps};
use crate::config::AppConfig;
use crate::core::voice::elevenlabs::{is_custom_voice, voice_name};
use crate::core::voice::VoiceProviderType;

/// Maximum notifications shown at once.
const MAX_NOTIFICATIONS: usize = 3;
/// Ticks before a notification auto-dismisses.
const NOTIFICATION_TTL: u32 = 100;

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Active synthesis provider.
    pub provider: VoiceProviderType,
    /// Active voice ID. Only changed through `Action::SetVoice`.
    pub voice_id: String,
    /// Custom voice ID picker.
    voice_picker: CustomVoiceInput,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Whether the help modal is open.
    pub show_help: bool,
    /// Receiver for events raised from within the app.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Sender handed to widget callbacks.
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            running: true,
            provider: config.voice.provider,
            voice_id: config.voice.voice_id.clone(),
            voice_picker: CustomVoiceInput::new(),
            notifications: Vec::new(),
            show_help: false,
            event_rx,
            event_tx,
        }
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.handle_event(AppEvent::Tick);
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => {
                // Priority 1: Help modal
                if self.show_help {
                    if let Some(action) = self.map_help_input(&crossterm_event) {
                        self.handle_action(action);
                    }
                    return;
                }

                // Priority 2: Voice picker
                let tx = &self.event_tx;
                let props = CustomVoiceProps {
                    current_voice_id: &self.voice_id,
                    provider: self.provider,
                };
                let consumed = self.voice_picker.handle_input(&crossterm_event, props, |id| {
                    if tx.send(AppEvent::Action(Action::SetVoice(id))).is_err() {
                        log::error!("Event channel closed, voice change dropped");
                    }
                });
                if consumed {
                    return;
                }

                // Priority 3: Global keybindings
                if let Some(action) = self.map_input_to_action(&crossterm_event) {
                    self.handle_action(action);
                }
            }
            AppEvent::Action(action) => self.handle_action(action),
            AppEvent::Tick => self.on_tick(),
        }
    }

    // ── Input mapping ───────────────────────────────────────────────────

    /// Map help modal input to action.
    fn map_help_input(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };
        match code {
            KeyCode::Esc | KeyCode::Char('?') => Some(Action::CloseHelp),
            _ => None,
        }
    }

    fn map_input_to_action(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match (*modifiers, *code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            (KeyModifiers::CONTROL, KeyCode::Char('p')) => Some(Action::CycleProvider),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('q')) => Some(Action::Quit),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                Some(Action::ShowHelp)
            }
            _ => None,
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
            Action::CycleProvider => {
                self.provider = self.provider.next();
                tracing::info!(provider = %self.provider, "voice provider changed");
                self.push_notification(
                    format!("Provider: {}", self.provider.display_name()),
                    NotificationLevel::Info,
                );
            }
            Action::SetVoice(voice_id) => {
                tracing::info!(
                    provider = %self.provider,
                    voice_id = %voice_id,
                    custom = is_custom_voice(&voice_id),
                    "voice changed"
                );
                let (message, level) = match voice_name(&voice_id) {
                    Some(name) => (format!("Voice set to {name}"), NotificationLevel::Success),
                    None => (
                        format!("Using custom voice {voice_id}"),
                        NotificationLevel::Warning,
                    ),
                };
                self.voice_id = voice_id;
                self.push_notification(message, level);
            }
        }
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }

        self.notifications.push(Notification {
            message,
            level,
            ttl_ticks: NOTIFICATION_TTL,
        });

        while self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs, dismiss expired.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

        self.render_voice_panel(frame, chunks[0]);
        self.render_status_bar(frame, chunks[1]);

        self.render_notifications(frame, area);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_voice_panel(&self, frame: &mut Frame, area: Rect) {
        let block = theme::block_focused("Voice Settings");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let props = CustomVoiceProps {
            current_voice_id: &self.voice_id,
            provider: self.provider,
        };

        let rows = Layout::vertical([
            Constraint::Length(1), // Provider
            Constraint::Length(1), // Voice
            Constraint::Length(1), // Spacer
            Constraint::Length(self.voice_picker.height(props)),
            Constraint::Min(0),
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" Provider: ", theme::muted()),
                Span::styled(self.provider.display_name(), theme::heading()),
                Span::styled("  (Ctrl+P to change)", theme::key_hint()),
            ])),
            rows[0],
        );

        let voice_label = match voice_name(&self.voice_id) {
            _ if self.voice_id.is_empty() => Span::styled("(none)", theme::dim()),
            Some(name) => Span::styled(format!("({name})"), theme::muted()),
            None => Span::styled("(custom)", theme::warning()),
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" Voice:    ", theme::muted()),
                Span::styled(self.voice_id.clone(), theme::value()),
                Span::raw(" "),
                voice_label,
            ])),
            rows[1],
        );

        if self.provider.supports_custom_voice_ids() {
            self.voice_picker.render(frame, rows[3], props);
        } else {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!(
                        " Custom voice IDs are not available for {}",
                        self.provider.display_name()
                    ),
                    theme::dim(),
                )),
                rows[4],
            );
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mode_indicator = if self.voice_picker.is_editing() {
            Span::styled(
                " EDITING ",
                Style::default()
                    .fg(theme::BG_BASE)
                    .bg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw("")
        };

        let status = Line::from(vec![
            Span::styled(" VOICEPICK ", theme::brand_badge()),
            Span::raw(" "),
            mode_indicator,
            Span::raw(" "),
            Span::styled("Tab", theme::key_hint()),
            Span::raw(":focus "),
            Span::styled("Ctrl+P", theme::key_hint()),
            Span::raw(":provider "),
            Span::styled("?", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("q", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 50u16.min(area.width.saturating_sub(2));
        let height = (self.notifications.len() as u16).min(area.height);
        let x = area.width.saturating_sub(max_width + 1);
        let y = 1u16.min(area.height.saturating_sub(height));
        let notification_area = Rect::new(x, y, max_width, height);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                    NotificationLevel::Warning => ("⚠", theme::WARNING),
                };
                Line::from(vec![
                    Span::styled(format!(" {prefix} "), Style::default().fg(color).bold()),
                    Span::raw(n.message.as_str()),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(Paragraph::new(lines), notification_area);
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 70, area);

        let keybindings = [
            ("Global:", ""),
            ("q / Ctrl+C", "Quit"),
            ("?", "Toggle this help"),
            ("Ctrl+P", "Next voice provider"),
            ("", ""),
            ("Voice picker:", ""),
            ("Enter / Space", "Activate focused control"),
            ("c", "Use custom voice ID"),
            ("r", "Reset custom voice to default"),
            ("Tab / Shift+Tab", "Move focus"),
            ("", ""),
            ("While typing:", ""),
            ("Enter", "Apply voice ID"),
            ("Esc", "Cancel"),
        ];

        let lines: Vec<Line> = keybindings
            .iter()
            .map(|(key, desc)| {
                if desc.is_empty() {
                    Line::from(Span::styled(*key, theme::heading()))
                } else {
                    Line::from(vec![
                        Span::styled(format!("  {key:<18}"), Style::default().fg(theme::ACCENT)),
                        Span::styled(*desc, Style::default().fg(theme::TEXT)),
                    ])
                }
            })
            .collect();

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::BG_BASE));

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

/// Calculate a centered rect using percentage of parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
