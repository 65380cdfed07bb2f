use http::StatusCode;
use quizcraft_core::HttpError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SttError>;

#[derive(Debug, Error)]
pub enum SttError {
    /// The uploaded audio is missing or unusable
    #[error("invalid upload: {0}")]
    InvalidUpload(String),

    /// Transcription is not configured on this server
    #[error("transcription is not configured")]
    NotConfigured,

    /// Provider failed or returned an error status
    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("transcription request timed out")]
    Timeout,

    /// Temp file hand-off failed
    #[error("audio staging failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid provider configuration: {0}")]
    Config(String),
}

impl SttError {
    pub(crate) fn from_transport(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Upstream(error.to_string())
        }
    }
}

impl HttpError for SttError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidUpload(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::InvalidUpload(_) => "invalid_request_error",
            Self::NotConfigured | Self::Config(_) | Self::Io(_) => "internal_error",
            Self::Upstream(_) => "upstream_error",
            Self::Timeout => "timeout_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::InvalidUpload(message) => message.clone(),
            Self::NotConfigured => "Audio transcription is not available.".to_owned(),
            Self::Timeout => "Transcription took too long. Try a shorter recording.".to_owned(),
            _ => "Audio could not be transcribed.".to_owned(),
        }
    }
}
