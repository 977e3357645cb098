pub mod elevenlabs;
pub mod types;

pub use types::{VoiceError, VoiceProviderType};
