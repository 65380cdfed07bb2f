use std::time::Duration;

use reqwest::Client;

use crate::error::SttError;

/// HTTP client for uploads; connect timeout stays short even when the
/// transcription timeout is long
pub(crate) fn http_client(timeout: Duration) -> Result<Client, SttError> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .pool_idle_timeout(Some(Duration::from_secs(30)))
        .build()
        .map_err(|e| SttError::Config(format!("failed to build HTTP client: {e}")))
}
