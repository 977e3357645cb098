use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::voice::elevenlabs::FALLBACK_VOICE_ID;
use crate::core::voice::VoiceProviderType;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub voice: VoiceSettings,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// Enable mouse support in the terminal.
    pub mouse_enabled: bool,
}

/// Initial voice selection for the host screen. Never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceSettings {
    #[serde(deserialize_with = "deserialize_provider")]
    pub provider: VoiceProviderType,
    pub voice_id: String,
}

/// Provider tags are parsed leniently (case and surrounding whitespace).
fn deserialize_provider<'de, D>(deserializer: D) -> Result<VoiceProviderType, D::Error>
where
    D: Deserializer<'de>,
{
    let tag = String::deserialize(deserializer)?;
    tag.parse().map_err(serde::de::Error::custom)
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            mouse_enabled: true,
        }
    }
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            provider: VoiceProviderType::ElevenLabs,
            voice_id: FALLBACK_VOICE_ID.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/voicepick/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match std::fs::read_to_string(&config_path) {
            Ok(contents) => Self::parse(&contents).unwrap_or_else(|e| {
                log::warn!(
                    "Failed to parse config at {}: {e}, using defaults",
                    config_path.display()
                );
                Self::default()
            }),
            Err(_) => {
                log::debug!(
                    "No config file at {}, using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Parse a TOML config document.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("voicepick").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
