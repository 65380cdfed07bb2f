//! HS256-signed session tokens carried in a cookie

use chrono::{DateTime, Utc};
use jwt_compact::alg::{Hs256, Hs256Key};
use jwt_compact::{AlgorithmExt, Claims, Header, TimeOptions, Token, UntrustedToken};
use quizcraft_config::SessionConfig;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::error::AccountError;
use crate::store::Account;

/// Identity carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(rename = "sub")]
    pub account_id: i64,
    pub username: String,
}

/// Signs, verifies and serializes session cookies
pub struct SessionKeys {
    key: Hs256Key,
    ttl: chrono::Duration,
    time_options: TimeOptions,
    cookie_name: String,
    secure: bool,
}

impl SessionKeys {
    pub fn from_config(config: &SessionConfig) -> Result<Self, AccountError> {
        let ttl = config.ttl().map_err(|e| AccountError::Config(e.to_string()))?;
        let ttl = chrono::Duration::from_std(ttl).map_err(|e| AccountError::Config(e.to_string()))?;

        Ok(Self {
            key: Hs256Key::new(config.secret.expose_secret().as_bytes()),
            ttl,
            time_options: TimeOptions::default(),
            cookie_name: config.cookie_name.clone(),
            secure: config.secure,
        })
    }

    /// Replace the clock used for issuing and checking expiry
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.time_options = TimeOptions::new(chrono::Duration::zero(), clock);
        self
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Sign a session token for `account`
    pub fn issue(&self, account: &Account) -> Result<String, AccountError> {
        let claims = Claims::new(SessionClaims {
            account_id: account.id,
            username: account.username.clone(),
        })
        .set_duration_and_issuance(&self.time_options, self.ttl);

        Hs256
            .token(&Header::empty(), &claims, &self.key)
            .map_err(|e| AccountError::Internal(format!("failed to sign session: {e}")))
    }

    /// Check the signature and expiry of a session token
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AccountError> {
        let untrusted = UntrustedToken::new(token).map_err(|e| {
            tracing::debug!(error = %e, "malformed session token");
            AccountError::Unauthenticated
        })?;

        let token: Token<SessionClaims> = Hs256
            .validator::<SessionClaims>(&self.key)
            .validate(&untrusted)
            .map_err(|e| {
                tracing::debug!(error = %e, "session signature rejected");
                AccountError::Unauthenticated
            })?;

        token.claims().validate_expiration(&self.time_options).map_err(|e| {
            tracing::debug!(error = %e, "session expired");
            AccountError::Unauthenticated
        })?;

        Ok(token.claims().custom.clone())
    }

    /// `Set-Cookie` value carrying `token`
    pub fn cookie(&self, token: &str) -> String {
        let max_age = self.ttl.num_seconds();
        self.cookie_with_max_age(token, max_age)
    }

    /// `Set-Cookie` value that removes the session cookie
    pub fn clear_cookie(&self) -> String {
        self.cookie_with_max_age("", 0)
    }

    /// Session token from a `Cookie` request header
    pub fn token_from_cookie_header<'a>(&self, header: &'a str) -> Option<&'a str> {
        header
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.cookie_name)
            .map(|(_, value)| value)
            .filter(|value| !value.is_empty())
    }

    fn cookie_with_max_age(&self, value: &str, max_age: i64) -> String {
        let secure = if self.secure { "; Secure" } else { "" };
        format!(
            "{}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}{secure}",
            self.cookie_name
        )
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn config(secret: &str, ttl: &str, secure: bool) -> SessionConfig {
        SessionConfig {
            secret: SecretString::from(secret),
            ttl: ttl.to_owned(),
            cookie_name: "qc_session".to_owned(),
            secure,
        }
    }

    fn account() -> Account {
        Account {
            id: 7,
            username: "ada".to_owned(),
            email: "ada@example.com".to_owned(),
        }
    }

    #[test]
    fn issued_token_verifies() {
        let keys = SessionKeys::from_config(&config(SECRET, "1h", false)).unwrap();

        let token = keys.issue(&account()).unwrap();
        let claims = keys.verify(&token).unwrap();

        assert_eq!(
            claims,
            SessionClaims {
                account_id: 7,
                username: "ada".to_owned()
            }
        );
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let keys = SessionKeys::from_config(&config(SECRET, "1h", false)).unwrap();
        let other = SessionKeys::from_config(&config("fedcba9876543210fedcba9876543210", "1h", false)).unwrap();

        let token = other.issue(&account()).unwrap();

        assert!(matches!(keys.verify(&token), Err(AccountError::Unauthenticated)));
    }

    #[test]
    fn garbage_is_rejected() {
        let keys = SessionKeys::from_config(&config(SECRET, "1h", false)).unwrap();
        assert!(keys.verify("not-a-token").is_err());
        assert!(keys.verify("").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let keys = SessionKeys::from_config(&config(SECRET, "1h", false)).unwrap();
        let past = SessionKeys::from_config(&config(SECRET, "1h", false))
            .unwrap()
            .with_clock(|| Utc::now() - chrono::Duration::days(1));

        let token = past.issue(&account()).unwrap();

        assert!(matches!(keys.verify(&token), Err(AccountError::Unauthenticated)));
    }

    #[test]
    fn cookie_attributes() {
        let keys = SessionKeys::from_config(&config(SECRET, "2h", true)).unwrap();

        assert_eq!(
            keys.cookie("abc"),
            "qc_session=abc; Path=/; HttpOnly; SameSite=Lax; Max-Age=7200; Secure"
        );
        assert_eq!(
            keys.clear_cookie(),
            "qc_session=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0; Secure"
        );
    }

    #[test]
    fn token_is_found_among_other_cookies() {
        let keys = SessionKeys::from_config(&config(SECRET, "1h", false)).unwrap();

        assert_eq!(keys.token_from_cookie_header("theme=dark; qc_session=t.o.k"), Some("t.o.k"));
        assert_eq!(keys.token_from_cookie_header("qc_session="), None);
        assert_eq!(keys.token_from_cookie_header("other_qc_session=x"), None);
        assert_eq!(keys.token_from_cookie_header(""), None);
    }
}
