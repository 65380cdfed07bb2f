use std::net::SocketAddr;

use serde::Deserialize;

/// Paths served by the application itself
pub const RESERVED_PATHS: &[&str] = &[
    "/",
    "/signup",
    "/login",
    "/logout",
    "/generate_flashcards",
    "/transcribe_audio",
    "/evaluate_answer",
];

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Falls back to `0.0.0.0:5000` when unset
    pub listen_address: Option<SocketAddr>,
    #[serde(default)]
    pub health: HealthConfig,
}

/// Liveness probe route
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct HealthConfig {
    pub enabled: bool,
    pub path: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/health".to_owned(),
        }
    }
}

impl HealthConfig {
    pub(crate) fn validate(&self) -> anyhow::Result<()> {
        if !self.enabled {
            return Ok(());
        }

        if !self.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }

        if RESERVED_PATHS.contains(&self.path.as_str()) {
            anyhow::bail!("server.health.path '{}' collides with an application route", self.path);
        }

        Ok(())
    }
}
