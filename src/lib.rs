//! voicepick - Voice picker with custom ElevenLabs voice ID entry (TUI Edition)
//!
//! Provides the custom voice ID widget, the premade voice catalogue,
//! and a small host application that owns the active voice.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
