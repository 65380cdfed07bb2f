use std::sync::Arc;

use serde::Deserialize;

use crate::error::AccountError;
use crate::password::{hash_password, verify_password};
use crate::store::{Account, AccountStore, NewAccount};

/// Fields posted by the signup form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Reject obviously unusable input before hashing or storing anything
    pub fn validate(&self) -> Result<(), AccountError> {
        if self.username.trim().is_empty() || self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AccountError::Validation("All fields are required."));
        }

        if !self.email.trim().contains('@') {
            return Err(AccountError::Validation("Please enter a valid email address."));
        }

        if self.password != self.confirm_password {
            return Err(AccountError::Validation("Passwords do not match."));
        }

        Ok(())
    }
}

/// Signup and login on top of an account store
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn AccountStore {
        self.store.as_ref()
    }

    /// Validate the form, hash the password and create the account
    pub async fn signup(&self, form: &SignupForm) -> Result<Account, AccountError> {
        form.validate()?;

        let password = form.password.clone();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AccountError::Internal(format!("hashing task failed: {e}")))??;

        let account = self
            .store
            .create(NewAccount {
                username: form.username.trim().to_owned(),
                email: form.email.trim().to_owned(),
                password_hash,
            })
            .await?;

        tracing::info!(account_id = account.id, "account created");

        Ok(account)
    }

    /// Authenticate by username or email
    pub async fn login(&self, identifier: &str, password: &str) -> Result<Account, AccountError> {
        let identifier = identifier.trim();
        if identifier.is_empty() || password.is_empty() {
            return Err(AccountError::Validation("Please enter your username or email and password."));
        }

        let Some(stored) = self.store.find_by_identifier(identifier).await? else {
            tracing::debug!("login for unknown identifier");
            return Err(AccountError::InvalidCredentials);
        };

        let password = password.to_owned();
        let hash = stored.password_hash;
        let verified = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| AccountError::Internal(format!("verification task failed: {e}")))?;

        if !verified {
            tracing::debug!(account_id = stored.account.id, "login with wrong password");
            return Err(AccountError::InvalidCredentials);
        }

        tracing::info!(account_id = stored.account.id, "login succeeded");

        Ok(stored.account)
    }
}
