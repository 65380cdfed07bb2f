use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use quizcraft_core::HttpError;
use quizcraft_flashcards::Flashcard;
use serde::{Deserialize, Serialize};

use crate::error::log_failure;
use crate::session::Session;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateRequest {
    pub text: String,
}

#[derive(Serialize)]
struct GenerateResponse<'a> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    flashcards: &'a [Flashcard],
}

fn generate_error(status: StatusCode, message: String) -> Response {
    let body = GenerateResponse {
        status: "error",
        message: Some(message),
        flashcards: &[],
    };

    (status, Json(body)).into_response()
}

/// `POST /generate_flashcards`
pub async fn generate_flashcards(
    State(state): State<AppState>,
    Session(user): Session,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Response {
    let Some(user) = user else {
        return generate_error(
            StatusCode::UNAUTHORIZED,
            "Please log in to generate flashcards.".to_owned(),
        );
    };

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "malformed generate request");
            return generate_error(
                StatusCode::BAD_REQUEST,
                "Request body must be JSON with a \"text\" field.".to_owned(),
            );
        }
    };

    match state.flashcards.generate(&request.text).await {
        Ok(set) => {
            tracing::info!(account_id = user.account_id, cards = set.len(), "flashcards served");

            let body = GenerateResponse {
                status: "success",
                message: None,
                flashcards: set.cards(),
            };
            Json(body).into_response()
        }
        Err(e) => {
            log_failure("generate_flashcards", &e);
            generate_error(e.status_code(), e.client_message())
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EvaluateRequest {
    pub user_answer: String,
    pub correct_answer: String,
}

#[derive(Serialize)]
struct EvaluateResponse {
    correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// `POST /evaluate_answer`
///
/// Client mistakes come back as `reason`, server failures as `error`.
pub async fn evaluate_answer(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "malformed evaluate request");
            let body = EvaluateResponse {
                correct: false,
                reason: Some("Request body must be JSON with \"user_answer\" and \"correct_answer\".".to_owned()),
                error: None,
            };
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    match state
        .flashcards
        .evaluate(&request.user_answer, &request.correct_answer)
        .await
    {
        Ok(correct) => Json(EvaluateResponse {
            correct,
            reason: None,
            error: None,
        })
        .into_response(),
        Err(e) => {
            log_failure("evaluate_answer", &e);

            let status = e.status_code();
            let body = if e.is_user_error() {
                EvaluateResponse {
                    correct: false,
                    reason: Some(e.client_message()),
                    error: None,
                }
            } else {
                EvaluateResponse {
                    correct: false,
                    reason: None,
                    error: Some(e.client_message()),
                }
            };

            (status, Json(body)).into_response()
        }
    }
}
