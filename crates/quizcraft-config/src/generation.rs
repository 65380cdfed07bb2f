use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Text generation provider configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    /// Provider protocol type
    #[serde(rename = "type")]
    pub provider_type: GenerationProviderType,
    /// API key for authentication
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model name, defaults per provider type
    #[serde(default)]
    pub model: Option<String>,
    /// Upper bound on a single generation round-trip (e.g. "30s")
    #[serde(default = "default_timeout")]
    pub timeout: String,
    /// Sampling temperature forwarded to the provider
    #[serde(default)]
    pub temperature: Option<f64>,
}

impl GenerationConfig {
    /// Model to request, falling back to the provider default
    pub fn model_name(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider_type.default_model())
    }

    /// Parsed request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if `timeout` is not a valid duration
    pub fn timeout(&self) -> anyhow::Result<Duration> {
        crate::parse_duration("generation.timeout", &self.timeout)
    }
}

/// Supported generation provider protocols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationProviderType {
    /// Google Generative Language API (Gemini)
    Google,
    /// OpenAI-compatible chat completions API
    Openai,
}

impl GenerationProviderType {
    /// Model used when the config does not name one
    pub const fn default_model(self) -> &'static str {
        match self {
            Self::Google => "gemini-1.5-flash",
            Self::Openai => "gpt-4o-mini",
        }
    }
}

fn default_timeout() -> String {
    "30s".to_owned()
}
