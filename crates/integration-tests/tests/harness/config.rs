//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use quizcraft_config::{
    Config, DatabaseConfig, FlashcardsConfig, GenerationConfig, GenerationProviderType, HealthConfig, ServerConfig,
    SessionConfig, TelemetryConfig, TranscriptionConfig, TranscriptionProviderType,
};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Minimal config with an OpenAI-compatible generation backend at `base_url`
    pub fn new(base_url: &str) -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                },
                generation: GenerationConfig {
                    provider_type: GenerationProviderType::Openai,
                    api_key: Some(SecretString::from("test-key")),
                    base_url: Some(base_url.parse().expect("valid URL")),
                    model: Some("mock-model-1".to_owned()),
                    timeout: "5s".to_owned(),
                    temperature: None,
                },
                transcription: None,
                session: SessionConfig {
                    secret: SecretString::from("integration-test-secret-0123456789abcdef"),
                    ttl: "1h".to_owned(),
                    cookie_name: "quizcraft_session".to_owned(),
                    secure: false,
                },
                database: DatabaseConfig {
                    url: ":memory:".to_owned(),
                },
                flashcards: FlashcardsConfig::default(),
                telemetry: TelemetryConfig::default(),
            },
        }
    }

    /// Point transcription at a mock Whisper backend
    pub fn with_whisper(mut self, base_url: &str) -> Self {
        self.config.transcription = Some(TranscriptionConfig {
            provider_type: TranscriptionProviderType::Whisper,
            api_key: Some(SecretString::from("test-key")),
            base_url: Some(base_url.parse().expect("valid URL")),
            model: "whisper-1".to_owned(),
            timeout: "5s".to_owned(),
        });
        self
    }

    /// Override the generation round-trip timeout
    pub fn with_generation_timeout(mut self, timeout: &str) -> Self {
        self.config.generation.timeout = timeout.to_owned();
        self
    }

    /// Override the minimum question/answer length
    pub fn with_min_field_chars(mut self, min_field_chars: usize) -> Self {
        self.config.flashcards.min_field_chars = min_field_chars;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
