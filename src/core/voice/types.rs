use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoiceError {
    #[error("Unknown voice provider: {0}")]
    UnknownProvider(String),
}

pub type Result<T> = std::result::Result<T, VoiceError>;

// ============================================================================
// Provider Types
// ============================================================================

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VoiceProviderType {
    // Cloud providers
    #[default]
    #[serde(rename = "elevenlabs")]
    ElevenLabs,
    #[serde(rename = "fish_audio")]
    FishAudio,
    #[serde(rename = "openai")]
    OpenAI,
    #[serde(rename = "piper")]
    Piper,
    // Self-hosted providers
    #[serde(rename = "ollama")]
    Ollama,
    #[serde(rename = "chatterbox")]
    Chatterbox,
    #[serde(rename = "gpt_sovits")]
    GptSoVits,
    #[serde(rename = "xtts_v2")]
    XttsV2,
    #[serde(rename = "fish_speech")]
    FishSpeech,
    #[serde(rename = "dia")]
    Dia,
    #[serde(rename = "coqui")]
    Coqui,
    // System/disabled
    #[serde(rename = "system")]
    System,
    #[serde(rename = "disabled")]
    Disabled,
}

impl VoiceProviderType {
    /// All providers in display order.
    pub const ALL: [VoiceProviderType; 13] = [
        Self::ElevenLabs,
        Self::FishAudio,
        Self::OpenAI,
        Self::Piper,
        Self::Ollama,
        Self::Chatterbox,
        Self::GptSoVits,
        Self::XttsV2,
        Self::FishSpeech,
        Self::Dia,
        Self::Coqui,
        Self::System,
        Self::Disabled,
    ];

    /// Config/serde tag for this provider.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::ElevenLabs => "elevenlabs",
            Self::FishAudio => "fish_audio",
            Self::OpenAI => "openai",
            Self::Piper => "piper",
            Self::Ollama => "ollama",
            Self::Chatterbox => "chatterbox",
            Self::GptSoVits => "gpt_sovits",
            Self::XttsV2 => "xtts_v2",
            Self::FishSpeech => "fish_speech",
            Self::Dia => "dia",
            Self::Coqui => "coqui",
            Self::System => "system",
            Self::Disabled => "disabled",
        }
    }

    /// Human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ElevenLabs => "ElevenLabs",
            Self::FishAudio => "Fish Audio (Cloud)",
            Self::OpenAI => "OpenAI TTS",
            Self::Ollama => "Ollama",
            Self::Chatterbox => "Chatterbox",
            Self::GptSoVits => "GPT-SoVITS",
            Self::XttsV2 => "XTTS-v2 (Coqui)",
            Self::FishSpeech => "Fish Speech",
            Self::Dia => "Dia",
            Self::Coqui => "Coqui TTS Server",
            Self::Piper => "Piper (Local)",
            Self::System => "System TTS",
            Self::Disabled => "Disabled",
        }
    }

    /// Whether the custom voice ID picker is available for this provider.
    pub fn supports_custom_voice_ids(&self) -> bool {
        matches!(self, Self::ElevenLabs)
    }

    /// Next provider in display order, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for VoiceProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for VoiceProviderType {
    type Err = VoiceError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.tag() == wanted)
            .ok_or_else(|| VoiceError::UnknownProvider(s.to_string()))
    }
}
