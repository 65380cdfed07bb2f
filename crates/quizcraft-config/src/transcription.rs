use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Speech-to-text provider configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranscriptionConfig {
    /// Provider type
    #[serde(rename = "type")]
    pub provider_type: TranscriptionProviderType,
    /// API key
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Transcription model
    #[serde(default = "default_model")]
    pub model: String,
    /// Upper bound on a single transcription round-trip
    #[serde(default = "default_timeout")]
    pub timeout: String,
}

impl TranscriptionConfig {
    /// Parsed request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if `timeout` is not a valid duration
    pub fn timeout(&self) -> anyhow::Result<Duration> {
        crate::parse_duration("transcription.timeout", &self.timeout)
    }
}

/// Supported STT providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranscriptionProviderType {
    /// `OpenAI` Whisper or a compatible server
    Whisper,
}

fn default_model() -> String {
    "whisper-1".to_owned()
}

fn default_timeout() -> String {
    "120s".to_owned()
}
