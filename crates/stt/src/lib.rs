#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod handoff;
mod http_client;
mod provider;
mod types;

use std::sync::Arc;

use quizcraft_config::{TranscriptionConfig, TranscriptionProviderType};

pub use error::{Result, SttError};
pub use handoff::{AudioUpload, transcribe_upload};
pub use provider::{Transcriber, whisper::WhisperProvider};
pub use types::Transcript;

/// Build the configured transcriber
pub fn build_transcriber(config: &TranscriptionConfig) -> Result<Arc<dyn Transcriber>> {
    let transcriber: Arc<dyn Transcriber> = match config.provider_type {
        TranscriptionProviderType::Whisper => Arc::new(WhisperProvider::new(config)?),
    };

    tracing::info!(
        provider = transcriber.name(),
        model = %config.model,
        "transcriber initialized"
    );

    Ok(transcriber)
}
