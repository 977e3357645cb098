//! ElevenLabs premade voice catalogue.
//!
//! These are the public premade voices that work with the shared API key.
//! Anything outside this list is treated as a custom voice.

use std::collections::HashSet;
use std::sync::OnceLock;

/// A known-good premade voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PremadeVoice {
    pub id: &'static str,
    pub name: &'static str,
}

/// Premade voices in display order. The first entry is the fallback voice.
pub const DEFAULT_VOICES: [PremadeVoice; 9] = [
    PremadeVoice { id: "21m00Tcm4TlvDq8ikWAM", name: "Rachel" },
    PremadeVoice { id: "AZnzlk1XvdvUeBnXmlld", name: "Domi" },
    PremadeVoice { id: "EXAVITQu4vr4xnSDxMaL", name: "Bella" },
    PremadeVoice { id: "ErXwobaYiN019PkySvjV", name: "Antoni" },
    PremadeVoice { id: "MF3mGyEYCl7XYWbV9V6O", name: "Elli" },
    PremadeVoice { id: "TxGEqnHWrfWFTfGW9XjX", name: "Josh" },
    PremadeVoice { id: "VR6AewLTigWG4xSOukaG", name: "Arnold" },
    PremadeVoice { id: "pNInz6obpgDQGcFmaJgB", name: "Adam" },
    PremadeVoice { id: "yoZ06aMxZJJ28mfd3POQ", name: "Sam" },
];

/// Voice used by "Reset to default" (Rachel).
pub const FALLBACK_VOICE_ID: &str = DEFAULT_VOICES[0].id;

static DEFAULT_VOICE_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn default_voice_set() -> &'static HashSet<&'static str> {
    DEFAULT_VOICE_SET.get_or_init(|| DEFAULT_VOICES.iter().map(|v| v.id).collect())
}

/// Whether `voice_id` is one of the premade voices. Exact match.
pub fn is_default_voice(voice_id: &str) -> bool {
    default_voice_set().contains(voice_id)
}

/// A custom voice is any non-empty id outside the premade set.
pub fn is_custom_voice(voice_id: &str) -> bool {
    !voice_id.is_empty() && !is_default_voice(voice_id)
}

/// Display name of a premade voice.
pub fn voice_name(voice_id: &str) -> Option<&'static str> {
    DEFAULT_VOICES
        .iter()
        .find(|v| v.id == voice_id)
        .map(|v| v.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_fallback_is_rachel() {
        assert_eq!(FALLBACK_VOICE_ID, "21m00Tcm4TlvDq8ikWAM");
        assert_eq!(voice_name(FALLBACK_VOICE_ID), Some("Rachel"));
    }

    #[test]
    fn test_default_set_has_nine_unique_ids() {
        assert_eq!(default_voice_set().len(), 9);
        for voice in DEFAULT_VOICES {
            assert!(is_default_voice(voice.id));
        }
    }

    #[rstest]
    #[case("21m00Tcm4TlvDq8ikWAM", false)]
    #[case("yoZ06aMxZJJ28mfd3POQ", false)]
    #[case("myCustomVoice42", true)]
    #[case("21m00tcm4tlvdq8ikwam", true)]
    #[case(" 21m00Tcm4TlvDq8ikWAM", true)]
    #[case("", false)]
    fn test_is_custom_voice(#[case] id: &str, #[case] expected: bool) {
        assert_eq!(is_custom_voice(id), expected);
    }

    #[test]
    fn test_voice_name_unknown() {
        assert_eq!(voice_name("myCustomVoice42"), None);
        assert_eq!(voice_name(""), None);
    }
}
