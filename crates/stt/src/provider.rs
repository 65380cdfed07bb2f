pub(crate) mod whisper;

use std::path::Path;

use async_trait::async_trait;

use crate::types::Transcript;

/// A speech model that transcribes an audio file on local disk
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe the file at `path`
    async fn transcribe(&self, path: &Path) -> crate::error::Result<Transcript>;

    /// Get the provider name
    fn name(&self) -> &str;
}
