//! Rendering and mouse tests for the custom voice ID picker.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use rstest::rstest;

use crate::core::voice::elevenlabs::FALLBACK_VOICE_ID;
use crate::core::voice::VoiceProviderType;
use crate::tui::widgets::custom_voice_input::{Control, CustomVoiceInput, CustomVoiceProps};

const WIDTH: u16 = 60;
const HEIGHT: u16 = 16;

fn props(voice_id: &str) -> CustomVoiceProps<'_> {
    CustomVoiceProps {
        current_voice_id: voice_id,
        provider: VoiceProviderType::ElevenLabs,
    }
}

/// Render into a test terminal and return the screen rows.
fn render(widget: &CustomVoiceInput, props: CustomVoiceProps<'_>) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            widget.render(frame, area, props);
        })
        .unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(WIDTH as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn screen_contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[rstest]
#[case(VoiceProviderType::OpenAI)]
#[case(VoiceProviderType::Piper)]
#[case(VoiceProviderType::Disabled)]
fn unsupported_provider_renders_nothing(#[case] provider: VoiceProviderType) {
    let mut widget = CustomVoiceInput::new();
    let custom = CustomVoiceProps {
        current_voice_id: "myCustomVoice42",
        provider,
    };
    assert!(render(&widget, custom).iter().all(|row| row.trim().is_empty()));

    // Even with the form open from an earlier provider
    widget.open_form();
    assert!(render(&widget, custom).iter().all(|row| row.trim().is_empty()));
}

#[test]
fn initial_render_shows_trigger_only_for_default_voice() {
    let widget = CustomVoiceInput::new();
    let rows = render(&widget, props(FALLBACK_VOICE_ID));
    assert!(screen_contains(&rows, "Use Custom Voice ID"));
    assert!(!screen_contains(&rows, "Reset to default"));
    assert!(!screen_contains(&rows, FALLBACK_VOICE_ID));
}

#[test]
fn empty_voice_shows_no_banner() {
    let widget = CustomVoiceInput::new();
    let rows = render(&widget, props(""));
    assert!(screen_contains(&rows, "Use Custom Voice ID"));
    assert!(!screen_contains(&rows, "Reset to default"));
}

#[test]
fn custom_voice_shows_banner_with_value() {
    let widget = CustomVoiceInput::new();
    let rows = render(&widget, props("myCustomVoice42"));
    assert!(screen_contains(&rows, "Use Custom Voice ID"));
    assert!(screen_contains(&rows, "myCustomVoice42"));
    assert!(screen_contains(&rows, "Custom"));
    assert!(screen_contains(&rows, "May not work with the shared API key"));
    assert!(screen_contains(&rows, "Reset to default"));
}

#[test]
fn open_form_replaces_trigger_and_keeps_banner() {
    let mut widget = CustomVoiceInput::new();
    widget.open_form();
    let rows = render(&widget, props("myCustomVoice42"));
    assert!(!screen_contains(&rows, "Use Custom Voice ID"));
    assert!(screen_contains(&rows, "Enter ElevenLabs Voice ID"));
    assert!(screen_contains(&rows, "e.g., 21m00Tcm4TlvDq8ikWAM"));
    assert!(screen_contains(&rows, "Note: Custom voices"));
    assert!(screen_contains(&rows, "Reset to default"));
}

#[test]
fn typed_draft_replaces_placeholder() {
    let mut widget = CustomVoiceInput::new();
    widget.open_form();
    for c in "abc123".chars() {
        widget.handle_input(&key(KeyCode::Char(c)), props(""), |_| {});
    }
    let rows = render(&widget, props(""));
    assert!(screen_contains(&rows, "abc123"));
    assert!(!screen_contains(&rows, "e.g.,"));
}

#[test]
fn click_trigger_opens_form_with_field_focus() {
    let mut widget = CustomVoiceInput::new();
    render(&widget, props(""));

    assert!(widget.handle_input(&click(10, 1), props(""), |_| {}));
    assert!(widget.is_editing());
    assert_eq!(widget.focus(), Control::Field);
}

#[test]
fn click_outside_is_not_consumed() {
    let mut widget = CustomVoiceInput::new();
    render(&widget, props(""));
    assert!(!widget.handle_input(&click(10, HEIGHT - 1), props(""), |_| {}));
    assert!(!widget.is_editing());
}

#[test]
fn click_confirm_respects_disabled_state() {
    let mut widget = CustomVoiceInput::new();
    widget.open_form();
    render(&widget, props(""));

    // Form row is rows 1..=3; confirm occupies the second-to-last 5 columns
    let confirm = click(WIDTH - 8, 2);
    let mut calls = Vec::new();
    assert!(widget.handle_input(&confirm, props(""), |id| calls.push(id)));
    assert!(calls.is_empty());
    assert!(widget.is_editing());

    for c in "  xyz  ".chars() {
        widget.handle_input(&key(KeyCode::Char(c)), props(""), |_| {});
    }
    render(&widget, props(""));
    widget.handle_input(&confirm, props(""), |id| calls.push(id));
    assert_eq!(calls, vec!["xyz".to_string()]);
    assert!(!widget.is_editing());
    assert_eq!(widget.draft(), "");
}

#[test]
fn click_cancel_discards_draft() {
    let mut widget = CustomVoiceInput::new();
    widget.open_form();
    widget.handle_input(&key(KeyCode::Char('a')), props(""), |_| {});
    render(&widget, props(""));

    let mut calls = Vec::new();
    widget.handle_input(&click(WIDTH - 3, 2), props(""), |id| calls.push(id));
    assert!(calls.is_empty());
    assert!(!widget.is_editing());

    widget.open_form();
    assert_eq!(widget.draft(), "");
}

#[test]
fn click_reset_calls_back_without_opening_form() {
    let mut widget = CustomVoiceInput::new();
    let rows = render(&widget, props("myCustomVoice42"));

    let row = rows
        .iter()
        .position(|r| r.contains("Reset to default"))
        .unwrap();
    let column = rows[row].chars().position(|c| c == 'R').unwrap() as u16;

    let mut calls = Vec::new();
    assert!(widget.handle_input(
        &click(column + 2, row as u16),
        props("myCustomVoice42"),
        |id| calls.push(id)
    ));
    assert_eq!(calls, vec![FALLBACK_VOICE_ID.to_string()]);
    assert!(!widget.is_editing());
}
