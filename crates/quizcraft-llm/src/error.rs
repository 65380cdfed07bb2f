use http::StatusCode;
use quizcraft_core::HttpError;
use thiserror::Error;

/// Errors raised while talking to a generation provider
#[derive(Debug, Error)]
pub enum LlmError {
    /// Upstream provider failed or returned an error status
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Provider did not answer within the configured timeout
    #[error("upstream request timed out")]
    Timeout,

    /// Provider answered successfully but without any choice or candidate
    #[error("upstream returned no completion candidates")]
    NoCandidates,

    /// Provider could not be constructed from configuration
    #[error("invalid provider configuration: {0}")]
    Config(String),
}

impl LlmError {
    /// Classify a transport error from `reqwest`
    pub(crate) fn from_transport(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Upstream(error.to_string())
        }
    }
}

impl HttpError for LlmError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Upstream(_) | Self::NoCandidates => "upstream_error",
            Self::Timeout => "timeout_error",
            Self::Config(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        // Provider bodies can echo prompts or keys, keep them in the logs
        match self {
            Self::Timeout => "the generation service took too long to respond".to_owned(),
            _ => "the generation service is unavailable".to_owned(),
        }
    }
}
