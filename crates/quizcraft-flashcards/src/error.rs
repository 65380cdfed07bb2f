use http::StatusCode;
use quizcraft_core::HttpError;
use quizcraft_llm::LlmError;
use thiserror::Error;

/// Failures of the flashcard pipeline and answer evaluation
#[derive(Debug, Error)]
pub enum FlashcardError {
    /// Caller supplied empty input
    #[error("{0}")]
    Validation(&'static str),

    /// The completion contained no usable question/answer pair
    #[error("no flashcards could be extracted from the completion")]
    EmptyResult,

    /// The generation client failed or timed out
    #[error(transparent)]
    Transport(#[from] LlmError),
}

impl HttpError for FlashcardError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::EmptyResult => StatusCode::BAD_REQUEST,
            Self::Transport(e) => e.status_code(),
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::EmptyResult => "empty_result",
            Self::Transport(e) => e.error_type(),
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Validation(message) => (*message).to_owned(),
            Self::EmptyResult => "No flashcards could be generated from your input. Try different notes.".to_owned(),
            Self::Transport(e) => e.client_message(),
        }
    }
}
