use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;

/// Login session configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// HMAC secret used to sign session cookies
    pub secret: SecretString,
    /// How long a login stays valid (e.g. "7d")
    #[serde(default = "default_ttl")]
    pub ttl: String,
    /// Name of the session cookie
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Mark the cookie `Secure` (HTTPS only)
    #[serde(default)]
    pub secure: bool,
}

impl SessionConfig {
    /// Parsed session lifetime
    ///
    /// # Errors
    ///
    /// Returns an error if `ttl` is not a valid duration
    pub fn ttl(&self) -> anyhow::Result<Duration> {
        crate::parse_duration("session.ttl", &self.ttl)
    }
}

fn default_ttl() -> String {
    "7d".to_owned()
}

fn default_cookie_name() -> String {
    "quizcraft_session".to_owned()
}
