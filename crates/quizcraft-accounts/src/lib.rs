//! Username/password accounts and signed session cookies

#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

mod error;
mod password;
mod service;
mod session;
mod store;

pub use error::AccountError;
pub use password::{hash_password, verify_password};
pub use service::{AccountService, SignupForm};
pub use session::{SessionClaims, SessionKeys};
pub use store::{Account, AccountStore, NewAccount, SqliteAccountStore, StoredAccount};
