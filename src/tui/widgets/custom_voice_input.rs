//! Custom voice ID picker.
//!
//! Lets the user keep a premade voice or type a custom ElevenLabs voice ID.
//! The widget owns only its open/closed toggle and draft text. The current
//! voice ID belongs to the parent and changes are requested through the
//! `on_voice_change` callback passed to [`CustomVoiceInput::handle_input`].
//!
//! Layout when open:
//!
//! ```text
//!  ⚿ Enter ElevenLabs Voice ID
//! ┌──────────────────────────┐┌───┐┌───┐
//! │e.g., 21m00Tcm4TlvDq8ikWAM││ ✓ ││ ✗ │
//! └──────────────────────────┘└───┘└───┘
//! ╭─────────────────────────────────────╮
//! │⚠ Note: Custom voices from your ...  │
//! ╰─────────────────────────────────────╯
//! ```
//!
//! Renders nothing for providers without custom voice ID support.

use std::cell::Cell;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::voice::elevenlabs::{is_custom_voice, FALLBACK_VOICE_ID};
use crate::core::voice::VoiceProviderType;
use crate::tui::theme;
use crate::tui::widgets::voice_id_field::VoiceIdField;

const TRIGGER_LABEL: &str = "+ Use Custom Voice ID";
const FORM_HEADER: &str = "⚿ Enter ElevenLabs Voice ID";
const FIELD_PLACEHOLDER: &str = "e.g., 21m00Tcm4TlvDq8ikWAM";
const COMPAT_NOTE: &str = "Note: Custom voices from your ElevenLabs account may not work \
    with the shared API key. Only public/shared voices are guaranteed to work.";
const BANNER_WARNING: &str = "May not work with the shared API key";
const RESET_LABEL: &str = "[Reset to default]";

const TRIGGER_HEIGHT: u16 = 3;
const FORM_HEIGHT: u16 = 8;
const BANNER_HEIGHT: u16 = 5;
const ICON_BUTTON_WIDTH: u16 = 5;

/// Values owned by the parent.
#[derive(Debug, Clone, Copy)]
pub struct CustomVoiceProps<'a> {
    pub current_voice_id: &'a str,
    pub provider: VoiceProviderType,
}

impl CustomVoiceProps<'_> {
    fn is_visible(&self) -> bool {
        self.provider.supports_custom_voice_ids()
    }

    fn shows_banner(&self) -> bool {
        is_custom_voice(self.current_voice_id)
    }
}

/// Focusable controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Trigger,
    Reset,
    Field,
    Confirm,
    Cancel,
}

/// Screen areas from the last render, for mouse hit testing.
#[derive(Debug, Default, Clone, Copy)]
struct HitAreas {
    trigger: Option<Rect>,
    reset: Option<Rect>,
    field: Option<Rect>,
    confirm: Option<Rect>,
    cancel: Option<Rect>,
}

impl HitAreas {
    fn control_at(&self, pos: Position) -> Option<Control> {
        [
            (self.trigger, Control::Trigger),
            (self.reset, Control::Reset),
            (self.field, Control::Field),
            (self.confirm, Control::Confirm),
            (self.cancel, Control::Cancel),
        ]
        .into_iter()
        .find_map(|(rect, control)| rect.filter(|r| r.contains(pos)).map(|_| control))
    }
}

pub struct CustomVoiceInput {
    editing: bool,
    draft: VoiceIdField,
    focus: Control,
    hits: Cell<HitAreas>,
}

impl Default for CustomVoiceInput {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomVoiceInput {
    pub fn new() -> Self {
        Self {
            editing: false,
            draft: VoiceIdField::new(),
            focus: Control::Trigger,
            hits: Cell::new(HitAreas::default()),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn draft(&self) -> &str {
        self.draft.text()
    }

    pub fn focus(&self) -> Control {
        self.focus
    }

    /// Confirm is inert while the draft is blank.
    pub fn confirm_enabled(&self) -> bool {
        self.draft.has_value()
    }

    /// Rows this widget wants from the parent layout.
    pub fn height(&self, props: CustomVoiceProps<'_>) -> u16 {
        if !props.is_visible() {
            return 0;
        }
        let primary = if self.editing { FORM_HEIGHT } else { TRIGGER_HEIGHT };
        let banner = if props.shows_banner() { BANNER_HEIGHT } else { 0 };
        primary + banner
    }

    // ── Operations ──────────────────────────────────────────────────────

    pub fn open_form(&mut self) {
        self.editing = true;
        self.focus = Control::Field;
    }

    pub fn cancel_form(&mut self) {
        self.close_form();
    }

    /// Submit the trimmed draft. Returns `false` (and leaves the form open)
    /// when the draft is blank.
    pub fn commit_form(&mut self, mut on_voice_change: impl FnMut(String)) -> bool {
        if !self.draft.has_value() {
            return false;
        }
        let voice_id = self.draft.trimmed().to_string();
        log::debug!("Custom voice ID committed: {voice_id}");
        on_voice_change(voice_id);
        self.close_form();
        true
    }

    pub fn reset_to_default(&mut self, mut on_voice_change: impl FnMut(String)) {
        log::debug!("Voice reset to default {FALLBACK_VOICE_ID}");
        on_voice_change(FALLBACK_VOICE_ID.to_string());
    }

    fn close_form(&mut self) {
        self.editing = false;
        self.draft.clear();
        self.focus = Control::Trigger;
    }

    /// Focus, corrected for controls that are no longer shown.
    fn effective_focus(&self, props: CustomVoiceProps<'_>) -> Control {
        match self.focus {
            Control::Reset if !props.shows_banner() => Control::Trigger,
            Control::Confirm if !self.confirm_enabled() => Control::Field,
            other => other,
        }
    }

    fn focus_next(&mut self, props: CustomVoiceProps<'_>, forward: bool) {
        let ring: &[Control] = match (self.editing, self.confirm_enabled()) {
            (true, true) => &[Control::Field, Control::Confirm, Control::Cancel],
            (true, false) => &[Control::Field, Control::Cancel],
            (false, _) if props.shows_banner() => &[Control::Trigger, Control::Reset],
            (false, _) => &[Control::Trigger],
        };
        let current = self.effective_focus(props);
        let idx = ring.iter().position(|&c| c == current).unwrap_or(0);
        let next = if forward {
            (idx + 1) % ring.len()
        } else {
            (idx + ring.len() - 1) % ring.len()
        };
        self.focus = ring[next];
    }

    fn activate(&mut self, control: Control, on_voice_change: impl FnMut(String)) {
        match control {
            Control::Trigger => self.open_form(),
            Control::Reset => self.reset_to_default(on_voice_change),
            Control::Field => self.focus = Control::Field,
            Control::Confirm => {
                self.commit_form(on_voice_change);
            }
            Control::Cancel => self.cancel_form(),
        }
    }

    // ── Input ───────────────────────────────────────────────────────────

    /// Handle input events. Returns `true` if the event was consumed.
    pub fn handle_input(
        &mut self,
        event: &Event,
        props: CustomVoiceProps<'_>,
        on_voice_change: impl FnMut(String),
    ) -> bool {
        if !props.is_visible() {
            return false;
        }

        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => {
                if self.editing {
                    self.handle_form_key(*code, *modifiers, props, on_voice_change)
                } else {
                    self.handle_idle_key(*code, *modifiers, props, on_voice_change)
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => self.handle_click(Position::new(*column, *row), props, on_voice_change),
            _ => false,
        }
    }

    fn handle_idle_key(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        props: CustomVoiceProps<'_>,
        on_voice_change: impl FnMut(String),
    ) -> bool {
        // Chords belong to the host (Ctrl+C quits)
        if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }

        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                let control = self.effective_focus(props);
                self.activate(control, on_voice_change);
                true
            }
            KeyCode::Char('c') => {
                self.open_form();
                true
            }
            KeyCode::Char('r') if props.shows_banner() => {
                self.reset_to_default(on_voice_change);
                true
            }
            KeyCode::Tab if props.shows_banner() => {
                self.focus_next(props, true);
                true
            }
            KeyCode::BackTab if props.shows_banner() => {
                self.focus_next(props, false);
                true
            }
            _ => false,
        }
    }

    fn handle_form_key(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        props: CustomVoiceProps<'_>,
        on_voice_change: impl FnMut(String),
    ) -> bool {
        if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }

        match code {
            KeyCode::Tab => {
                self.focus_next(props, true);
                return true;
            }
            KeyCode::BackTab => {
                self.focus_next(props, false);
                return true;
            }
            _ => {}
        }

        match self.effective_focus(props) {
            Control::Field => match code {
                KeyCode::Enter => {
                    self.commit_form(on_voice_change);
                    true
                }
                KeyCode::Esc => {
                    self.cancel_form();
                    true
                }
                KeyCode::Char(c) => {
                    self.draft.insert_char(c);
                    true
                }
                KeyCode::Backspace => {
                    self.draft.backspace();
                    true
                }
                KeyCode::Delete => {
                    self.draft.delete();
                    true
                }
                KeyCode::Left => {
                    self.draft.move_left();
                    true
                }
                KeyCode::Right => {
                    self.draft.move_right();
                    true
                }
                KeyCode::Home => {
                    self.draft.move_home();
                    true
                }
                KeyCode::End => {
                    self.draft.move_end();
                    true
                }
                _ => false,
            },
            control => match code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.activate(control, on_voice_change);
                    true
                }
                // Typing on a button goes back to the field
                KeyCode::Char(c) => {
                    self.focus = Control::Field;
                    self.draft.insert_char(c);
                    true
                }
                _ => false,
            },
        }
    }

    fn handle_click(
        &mut self,
        pos: Position,
        props: CustomVoiceProps<'_>,
        on_voice_change: impl FnMut(String),
    ) -> bool {
        let Some(control) = self.hits.get().control_at(pos) else {
            return false;
        };
        match control {
            Control::Reset if !props.shows_banner() => return false,
            Control::Trigger if self.editing => return false,
            Control::Field | Control::Confirm | Control::Cancel if !self.editing => return false,
            _ => {}
        }
        self.activate(control, on_voice_change);
        true
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect, props: CustomVoiceProps<'_>) {
        let mut hits = HitAreas::default();
        if !props.is_visible() {
            self.hits.set(hits);
            return;
        }

        let primary_height = if self.editing { FORM_HEIGHT } else { TRIGGER_HEIGHT };
        let banner_height = if props.shows_banner() { BANNER_HEIGHT } else { 0 };
        let chunks = Layout::vertical([
            Constraint::Length(primary_height),
            Constraint::Length(banner_height),
            Constraint::Min(0),
        ])
        .split(area);

        let focus = self.effective_focus(props);
        if self.editing {
            self.render_form(frame, chunks[0], focus, &mut hits);
        } else {
            self.render_trigger(frame, chunks[0], focus, &mut hits);
        }

        if props.shows_banner() {
            self.render_banner(frame, chunks[1], props, focus, &mut hits);
        }

        self.hits.set(hits);
    }

    fn render_trigger(&self, frame: &mut Frame, area: Rect, focus: Control, hits: &mut HitAreas) {
        let focused = focus == Control::Trigger;
        let block = theme::trigger_block(focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Span::styled(TRIGGER_LABEL, theme::button(focused, true)))
                .alignment(Alignment::Center),
            inner,
        );
        hits.trigger = Some(area);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect, focus: Control, hits: &mut HitAreas) {
        let rows = Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Field + buttons
            Constraint::Length(4), // Compatibility note
        ])
        .split(area);

        frame.render_widget(Paragraph::new(Span::styled(FORM_HEADER, theme::muted())), rows[0]);

        let cols = Layout::horizontal([
            Constraint::Min(1),
            Constraint::Length(ICON_BUTTON_WIDTH),
            Constraint::Length(ICON_BUTTON_WIDTH),
        ])
        .split(rows[1]);

        self.draft
            .render(frame, cols[0], focus == Control::Field, FIELD_PLACEHOLDER);
        hits.field = Some(cols[0]);

        let enabled = self.confirm_enabled();
        render_icon_button(frame, cols[1], "✓", focus == Control::Confirm, enabled);
        hits.confirm = Some(cols[1]);

        render_icon_button(frame, cols[2], "✗", focus == Control::Cancel, true);
        hits.cancel = Some(cols[2]);

        let note = Paragraph::new(Line::from(vec![
            Span::styled("⚠ ", theme::warning()),
            Span::styled(COMPAT_NOTE, theme::warning()),
        ]))
        .wrap(Wrap { trim: true })
        .block(theme::warning_block());
        frame.render_widget(note, rows[2]);
    }

    fn render_banner(
        &self,
        frame: &mut Frame,
        area: Rect,
        props: CustomVoiceProps<'_>,
        focus: Control,
        hits: &mut HitAreas,
    ) {
        // One blank row separates the banner from the primary view
        let area = Rect {
            y: area.y.saturating_add(1),
            height: area.height.saturating_sub(1),
            ..area
        };
        let block = theme::warning_block();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);

        let top = Layout::horizontal([Constraint::Min(1), Constraint::Length(7)]).split(lines[0]);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("⚿ ", theme::warning()),
                Span::styled(props.current_voice_id.to_string(), theme::value()),
            ])),
            top[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled("Custom", theme::warning())).alignment(Alignment::Right),
            top[1],
        );

        let bottom = Layout::horizontal([
            Constraint::Min(1),
            Constraint::Length(RESET_LABEL.len() as u16),
        ])
        .split(lines[1]);
        frame.render_widget(
            Paragraph::new(Span::styled(BANNER_WARNING, theme::muted())),
            bottom[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                RESET_LABEL,
                theme::button(focus == Control::Reset, true),
            )),
            bottom[1],
        );
        hits.reset = Some(bottom[1]);
    }
}

fn render_icon_button(frame: &mut Frame, area: Rect, icon: &str, focused: bool, enabled: bool) {
    let border_style = match (enabled, focused) {
        (false, _) => theme::dim(),
        (true, true) => theme::border_focused(),
        (true, false) => Style::default().fg(theme::PRIMARY_LIGHT),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(
        Paragraph::new(Span::styled(icon.to_string(), theme::button(focused, enabled)))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
