use std::path::Path;
use std::str::FromStr;

use secrecy::ExposeSecret;

use crate::{Config, GenerationProviderType};

/// Shortest accepted session signing secret, in bytes
const MIN_SESSION_SECRET_LEN: usize = 32;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        raw.parse()
    }

    /// Validate that the configuration is usable before serving traffic
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid setting
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_generation()?;
        self.validate_transcription()?;
        self.validate_session()?;
        self.server.health.validate()?;

        if self.database.url.trim().is_empty() {
            anyhow::bail!("database.url must not be empty");
        }

        Ok(())
    }

    /// A missing API key would otherwise only surface on the first request
    fn validate_generation(&self) -> anyhow::Result<()> {
        let generation = &self.generation;
        let has_key = generation
            .api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty());

        // Self-hosted OpenAI-compatible servers often run without a key
        let keyless_allowed =
            generation.provider_type == GenerationProviderType::Openai && generation.base_url.is_some();

        if !has_key && !keyless_allowed {
            anyhow::bail!("generation.api_key must be set");
        }

        if generation.timeout()?.is_zero() {
            anyhow::bail!("generation.timeout must be greater than 0");
        }

        if generation.model_name().trim().is_empty() {
            anyhow::bail!("generation.model must not be empty");
        }

        Ok(())
    }

    fn validate_transcription(&self) -> anyhow::Result<()> {
        let Some(ref transcription) = self.transcription else {
            return Ok(());
        };

        let has_key = transcription
            .api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty());

        if !has_key && transcription.base_url.is_none() {
            anyhow::bail!("transcription.api_key must be set when using the default Whisper endpoint");
        }

        if transcription.timeout()?.is_zero() {
            anyhow::bail!("transcription.timeout must be greater than 0");
        }

        Ok(())
    }

    fn validate_session(&self) -> anyhow::Result<()> {
        if self.session.secret.expose_secret().len() < MIN_SESSION_SECRET_LEN {
            anyhow::bail!("session.secret must be at least {MIN_SESSION_SECRET_LEN} bytes");
        }

        if self.session.ttl()?.is_zero() {
            anyhow::bail!("session.ttl must be greater than 0");
        }

        if self.session.cookie_name.is_empty()
            || !self.session.cookie_name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            anyhow::bail!("session.cookie_name must be a non-empty token of letters, digits, '_' or '-'");
        }

        Ok(())
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        tracing::debug!(
            provider = ?config.generation.provider_type,
            model = config.generation.model_name(),
            transcription = config.transcription.is_some(),
            "configuration loaded"
        );

        Ok(config)
    }
}
