use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Response};
use quizcraft_core::HttpError;
use serde::Serialize;
use stt::{AudioUpload, SttError, Transcript};

use crate::error::log_failure;
use crate::state::AppState;

/// Body limit for audio uploads (32 MiB)
pub const AUDIO_BODY_LIMIT: usize = 32 << 20;

/// Multipart field carrying the audio file
const AUDIO_FIELD: &str = "audio";

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum TranscribeResponse {
    Success { transcript: String },
    Error { message: String },
}

/// `POST /transcribe_audio`
pub async fn transcribe_audio(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    match transcribe(&state, multipart).await {
        Ok(transcript) => {
            tracing::info!(chars = transcript.text.len(), "audio transcribed");
            Json(TranscribeResponse::Success {
                transcript: transcript.text,
            })
            .into_response()
        }
        Err(e) => {
            log_failure("transcribe_audio", &e);
            let body = TranscribeResponse::Error {
                message: e.client_message(),
            };
            (e.status_code(), Json(body)).into_response()
        }
    }
}

async fn transcribe(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Transcript, SttError> {
    let transcriber = state.transcriber.as_deref().ok_or(SttError::NotConfigured)?;

    let multipart = multipart
        .map_err(|e| SttError::InvalidUpload(format!("Expected a multipart form upload: {}", e.body_text())))?;

    let upload = read_audio(multipart).await?;

    stt::transcribe_upload(transcriber, upload).await
}

/// First `audio` field of the form; other fields are skipped
async fn read_audio(mut multipart: Multipart) -> Result<AudioUpload, SttError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| SttError::InvalidUpload(format!("Failed to parse multipart form: {}", e.body_text())))?
    {
        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_owned);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| SttError::InvalidUpload(format!("Failed to read audio data: {}", e.body_text())))?;

        return Ok(AudioUpload {
            filename,
            bytes: bytes.to_vec(),
        });
    }

    Err(SttError::InvalidUpload("No audio file was uploaded.".to_owned()))
}
