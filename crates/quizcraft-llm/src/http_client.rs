use std::time::Duration;

use reqwest::Client;

use crate::error::LlmError;

/// HTTP client for a single provider with the configured round-trip timeout
pub(crate) fn http_client(timeout: Duration) -> Result<Client, LlmError> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .pool_idle_timeout(Some(Duration::from_secs(30)))
        .tcp_nodelay(true)
        .build()
        .map_err(|e| LlmError::Config(format!("failed to build HTTP client: {e}")))
}
