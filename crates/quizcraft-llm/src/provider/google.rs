//! Google Generative Language API provider

use async_trait::async_trait;
use quizcraft_config::GenerationConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::{GenerationClient, upstream_error};
use crate::error::LlmError;
use crate::http_client::http_client;
use crate::protocol::google::{GoogleRequest, GoogleResponse};

/// Default Google Generative Language API base URL
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Header carrying the API key, keeps the key out of request URLs and logs
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini models via `generateContent`
pub struct GoogleProvider {
    client: Client,
    base_url: Url,
    api_key: Option<SecretString>,
    model: String,
    temperature: Option<f64>,
}

impl GoogleProvider {
    /// Create from generation configuration
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Config` if the timeout or default URL is invalid
    pub fn new(config: &GenerationConfig) -> Result<Self, LlmError> {
        let base_url = match config.base_url.clone() {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL).map_err(|e| LlmError::Config(e.to_string()))?,
        };
        let timeout = config.timeout().map_err(|e| LlmError::Config(e.to_string()))?;

        Ok(Self {
            client: http_client(timeout)?,
            base_url,
            api_key: config.api_key.clone(),
            model: config.model_name().to_owned(),
            temperature: config.temperature,
        })
    }

    /// Build the `generateContent` endpoint URL for the configured model
    fn generate_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/models/{}:generateContent", self.model)
    }
}

#[async_trait]
impl GenerationClient for GoogleProvider {
    fn name(&self) -> &str {
        "google"
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request = GoogleRequest::from_prompt(prompt, self.temperature);

        let mut builder = self.client.post(self.generate_url()).json(&request);
        if let Some(ref key) = self.api_key {
            builder = builder.header(API_KEY_HEADER, key.expose_secret());
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(provider = self.name(), error = %e, "upstream request failed");
            LlmError::from_transport(&e)
        })?;

        if !response.status().is_success() {
            return Err(upstream_error(self.name(), response).await);
        }

        let wire: GoogleResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                LlmError::Timeout
            } else {
                LlmError::Upstream(format!("failed to parse response: {e}"))
            }
        })?;

        let text = wire.into_text().ok_or(LlmError::NoCandidates)?;
        tracing::debug!(provider = self.name(), model = %self.model, chars = text.len(), "completion received");

        Ok(text)
    }
}
