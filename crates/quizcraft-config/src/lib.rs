#![allow(clippy::must_use_candidate)]

pub mod database;
mod env;
pub mod flashcards;
pub mod generation;
mod loader;
pub mod server;
pub mod session;
pub mod telemetry;
pub mod transcription;

use std::time::Duration;

use serde::Deserialize;

pub use database::*;
pub use flashcards::*;
pub use generation::*;
pub use server::*;
pub use session::*;
pub use telemetry::*;
pub use transcription::*;

/// Top-level QuizCraft configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Text generation provider used for flashcards and answer evaluation
    pub generation: GenerationConfig,
    /// Speech-to-text provider, disabled when absent
    #[serde(default)]
    pub transcription: Option<TranscriptionConfig>,
    /// Login session settings
    pub session: SessionConfig,
    /// Account database
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Flashcard extraction settings
    #[serde(default)]
    pub flashcards: FlashcardsConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Parse a human-readable duration such as `30s` or `7d`
///
/// # Errors
///
/// Returns an error if the string is not a valid duration
pub fn parse_duration(field: &str, value: &str) -> anyhow::Result<Duration> {
    duration_str::parse(value).map_err(|e| anyhow::anyhow!("invalid duration for {field} '{value}': {e}"))
}
