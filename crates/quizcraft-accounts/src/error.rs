use http::StatusCode;
use quizcraft_core::HttpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountError {
    /// Form input rejected before touching the store
    #[error("validation failed: {0}")]
    Validation(&'static str),

    /// Username or email is taken
    #[error("account already exists")]
    AlreadyExists,

    /// Unknown identifier or wrong password
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Missing, forged or expired session
    #[error("not signed in")]
    Unauthenticated,

    #[error("account storage failed: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("invalid session configuration: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl HttpError for AccountError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Storage(_) | Self::Hashing(_) | Self::Config(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::AlreadyExists => "conflict_error",
            Self::InvalidCredentials | Self::Unauthenticated => "authentication_error",
            Self::Storage(_) | Self::Hashing(_) | Self::Config(_) | Self::Internal(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Validation(message) => (*message).to_owned(),
            Self::AlreadyExists => "Username or email already exists.".to_owned(),
            Self::InvalidCredentials => "Invalid username/email or password.".to_owned(),
            Self::Unauthenticated => "Please log in to continue.".to_owned(),
            _ => "Something went wrong. Please try again.".to_owned(),
        }
    }
}
