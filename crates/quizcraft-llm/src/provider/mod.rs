//! Generation client trait and provider implementations

pub mod google;
pub mod openai;

use async_trait::async_trait;

use crate::error::LlmError;

/// A hosted model that turns a prompt into a single free-text completion
///
/// Implementations must not retry; latency is bounded only by the
/// timeout the provider was built with.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &str;

    /// Send a prompt and return the raw completion text
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Read a non-success response into an upstream error
pub(crate) async fn upstream_error(provider: &str, response: reqwest::Response) -> LlmError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    tracing::warn!(provider, %status, "upstream returned error");
    tracing::debug!(provider, body = %body, "upstream error body");

    LlmError::Upstream(format!("provider returned {status}"))
}
