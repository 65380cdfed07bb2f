//! Stage uploaded audio on disk for transcribers that read from a path

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, SttError};
use crate::provider::Transcriber;
use crate::types::Transcript;

/// Audio bytes received from a client
#[derive(Debug)]
pub struct AudioUpload {
    /// Client-supplied filename, used only for its extension
    pub filename: Option<String>,
    pub bytes: Vec<u8>,
}

/// Write `upload` to a temp file, transcribe it, then remove the file
///
/// The file is deleted when this returns, whether or not transcription
/// succeeded.
pub async fn transcribe_upload(transcriber: &dyn Transcriber, upload: AudioUpload) -> Result<Transcript> {
    if upload.bytes.is_empty() {
        return Err(SttError::InvalidUpload("The uploaded audio file is empty.".to_owned()));
    }

    let suffix = upload
        .filename
        .as_deref()
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    let staged = tokio::task::spawn_blocking(move || stage(&upload.bytes, &suffix))
        .await
        .map_err(|e| SttError::Io(std::io::Error::other(e)))??;

    tracing::debug!(path = %staged.path().display(), provider = transcriber.name(), "audio staged");

    transcriber.transcribe(staged.path()).await
}

fn stage(bytes: &[u8], suffix: &str) -> std::io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("quizcraft-audio-")
        .suffix(suffix)
        .tempfile()?;

    file.write_all(bytes)?;
    file.flush()?;

    Ok(file)
}
