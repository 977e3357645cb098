//! Property-based tests for the custom voice ID picker
//!
//! Tests invariants:
//! - Whitespace-only drafts never invoke the callback and keep confirm disabled
//! - Committing delivers the trimmed draft exactly once and clears the form
//! - Providers other than ElevenLabs never consume input
//! - A voice is custom iff it is non-empty and outside the premade set

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use proptest::prelude::*;

use crate::core::voice::elevenlabs::{is_custom_voice, DEFAULT_VOICES};
use crate::core::voice::VoiceProviderType;
use crate::tui::widgets::custom_voice_input::{CustomVoiceInput, CustomVoiceProps};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

fn arb_blank() -> impl Strategy<Value = String> {
    "[ ]{0,12}"
}

/// Drafts with real content and optional surrounding spaces.
fn arb_padded_id() -> impl Strategy<Value = String> {
    "[ ]{0,4}[a-zA-Z0-9][a-zA-Z0-9 ]{0,24}[a-zA-Z0-9]?[ ]{0,4}"
}

fn arb_other_provider() -> impl Strategy<Value = VoiceProviderType> {
    prop::sample::select(
        VoiceProviderType::ALL
            .iter()
            .copied()
            .filter(|p| !p.supports_custom_voice_ids())
            .collect::<Vec<_>>(),
    )
}

fn arb_key() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        any::<char>().prop_map(KeyCode::Char),
        Just(KeyCode::Enter),
        Just(KeyCode::Esc),
        Just(KeyCode::Tab),
        Just(KeyCode::BackTab),
        Just(KeyCode::Backspace),
    ]
}

fn props(provider: VoiceProviderType) -> CustomVoiceProps<'static> {
    CustomVoiceProps {
        current_voice_id: "",
        provider,
    }
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_into(widget: &mut CustomVoiceInput, text: &str) {
    for c in text.chars() {
        widget.handle_input(&key(KeyCode::Char(c)), props(VoiceProviderType::ElevenLabs), |_| {});
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn blank_draft_never_commits(draft in arb_blank()) {
        let mut widget = CustomVoiceInput::new();
        widget.open_form();
        type_into(&mut widget, &draft);

        prop_assert!(!widget.confirm_enabled());

        let mut calls = 0;
        widget.handle_input(&key(KeyCode::Enter), props(VoiceProviderType::ElevenLabs), |_| calls += 1);
        prop_assert_eq!(calls, 0);
        prop_assert!(widget.is_editing());
        prop_assert_eq!(widget.draft(), draft.as_str());
    }

    #[test]
    fn commit_delivers_trimmed_once(draft in arb_padded_id()) {
        let mut widget = CustomVoiceInput::new();
        widget.open_form();
        type_into(&mut widget, &draft);

        prop_assert!(widget.confirm_enabled());

        let mut calls = Vec::new();
        widget.handle_input(&key(KeyCode::Enter), props(VoiceProviderType::ElevenLabs), |id| calls.push(id));
        prop_assert_eq!(calls, vec![draft.trim().to_string()]);
        prop_assert!(!widget.is_editing());
        prop_assert_eq!(widget.draft(), "");
    }

    #[test]
    fn unsupported_provider_ignores_everything(
        provider in arb_other_provider(),
        keys in prop::collection::vec(arb_key(), 0..20),
    ) {
        let mut widget = CustomVoiceInput::new();
        let p = CustomVoiceProps { current_voice_id: "myCustomVoice42", provider };
        for code in keys {
            prop_assert!(!widget.handle_input(&key(code), p, |_| panic!("callback behind gate")));
        }
        prop_assert!(!widget.is_editing());
        prop_assert_eq!(widget.height(p), 0);
    }

    #[test]
    fn custom_iff_non_empty_and_unknown(id in "[a-zA-Z0-9]{0,24}") {
        let known = DEFAULT_VOICES.iter().any(|v| v.id == id);
        prop_assert_eq!(is_custom_voice(&id), !id.is_empty() && !known);
    }
}
