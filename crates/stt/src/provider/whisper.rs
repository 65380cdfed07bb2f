use std::path::Path;

use async_trait::async_trait;
use quizcraft_config::TranscriptionConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::Transcriber;
use crate::error::SttError;
use crate::http_client::http_client;
use crate::types::{Transcript, WhisperResponse};

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// `OpenAI` Whisper STT provider, or any server with the same upload API
pub struct WhisperProvider {
    client: Client,
    base_url: Url,
    api_key: Option<SecretString>,
    model: String,
}

impl WhisperProvider {
    pub fn new(config: &TranscriptionConfig) -> crate::error::Result<Self> {
        let base_url = match config.base_url.clone() {
            Some(url) => url,
            None => Url::parse(DEFAULT_OPENAI_API_URL).map_err(|e| SttError::Config(e.to_string()))?,
        };
        let timeout = config.timeout().map_err(|e| SttError::Config(e.to_string()))?;

        Ok(Self {
            client: http_client(timeout)?,
            base_url,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    fn transcriptions_url(&self) -> String {
        format!("{}/audio/transcriptions", self.base_url.as_str().trim_end_matches('/'))
    }
}

#[async_trait]
impl Transcriber for WhisperProvider {
    async fn transcribe(&self, path: &Path) -> crate::error::Result<Transcript> {
        let audio = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .map_or_else(|| "audio".to_owned(), |name| name.to_string_lossy().into_owned());

        tracing::debug!(bytes = audio.len(), model = %self.model, "whisper transcription request");

        let part = reqwest::multipart::Part::bytes(audio)
            .file_name(filename)
            .mime_str(content_type(path))
            .map_err(|e| SttError::InvalidUpload(format!("Invalid content type: {e}")))?;

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", self.model.clone())
            .text("response_format", "verbose_json");

        let mut builder = self.client.post(self.transcriptions_url()).multipart(form);
        if let Some(ref key) = self.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, "whisper request failed");
            SttError::from_transport(&e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "whisper returned error");
            tracing::debug!(body = %body, "whisper error body");

            return Err(SttError::Upstream(format!("whisper returned {status}")));
        }

        let wire: WhisperResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                SttError::Timeout
            } else {
                SttError::Upstream(format!("failed to parse whisper response: {e}"))
            }
        })?;

        let transcript = wire.into_transcript();
        tracing::debug!(chars = transcript.text.len(), "whisper transcription complete");

        Ok(transcript)
    }

    fn name(&self) -> &str {
        "whisper"
    }
}

/// MIME type from the file extension; Whisper sniffs the container anyway
fn content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("mp3" | "mpga" | "mpeg") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("m4a" | "mp4") => "audio/mp4",
        Some("ogg" | "oga") => "audio/ogg",
        Some("webm") => "audio/webm",
        Some("flac") => "audio/flac",
        _ => "application/octet-stream",
    }
}
