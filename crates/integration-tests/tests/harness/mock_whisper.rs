//! Mock Whisper backend for integration tests
//!
//! Accepts `/v1/audio/transcriptions` uploads and answers in `verbose_json`

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// What the mock saw in one upload
#[derive(Debug, Clone, Default)]
pub struct ReceivedUpload {
    pub filename: Option<String>,
    pub bytes: usize,
    pub model: Option<String>,
    pub response_format: Option<String>,
}

pub struct MockWhisper {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockWhisperState>,
}

struct MockWhisperState {
    request_count: AtomicU32,
    fail: AtomicBool,
    segments: Vec<String>,
    uploads: Mutex<Vec<ReceivedUpload>>,
}

impl MockWhisper {
    /// Start a mock that returns `segments` for every upload
    pub async fn start(segments: &[&str]) -> anyhow::Result<Self> {
        let state = Arc::new(MockWhisperState {
            request_count: AtomicU32::new(0),
            fail: AtomicBool::new(false),
            segments: segments.iter().map(|s| (*s).to_owned()).collect(),
            uploads: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/audio/transcriptions", routing::post(handle_transcription))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Start a mock that answers every upload with 500
    pub async fn start_failing() -> anyhow::Result<Self> {
        let mock = Self::start(&[]).await?;
        mock.state.fail.store(true, Ordering::Relaxed);
        Ok(mock)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    pub fn uploads(&self) -> Vec<ReceivedUpload> {
        self.state.uploads.lock().expect("uploads lock").clone()
    }
}

impl Drop for MockWhisper {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_transcription(
    State(state): State<Arc<MockWhisperState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    state.request_count.fetch_add(1, Ordering::Relaxed);

    let mut upload = ReceivedUpload::default();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_owned();
        match name.as_str() {
            "file" => {
                upload.filename = field.file_name().map(str::to_owned);
                upload.bytes = field.bytes().await.map(|b| b.len()).unwrap_or_default();
            }
            "model" => upload.model = field.text().await.ok(),
            "response_format" => upload.response_format = field.text().await.ok(),
            _ => {}
        }
    }
    state.uploads.lock().expect("uploads lock").push(upload);

    if state.fail.load(Ordering::Relaxed) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": {"message": "mock whisper failure"}})),
        )
            .into_response();
    }

    let segments: Vec<_> = state
        .segments
        .iter()
        .enumerate()
        .map(|(id, text)| serde_json::json!({"id": id, "text": text}))
        .collect();

    Json(serde_json::json!({
        "task": "transcribe",
        "text": state.segments.join(""),
        "segments": segments,
    }))
    .into_response()
}
