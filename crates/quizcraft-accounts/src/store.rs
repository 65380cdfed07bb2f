use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{Connection, ErrorCode, OptionalExtension, params};

use crate::error::AccountError;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        username      TEXT NOT NULL UNIQUE,
        email         TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL
    );
";

/// A signed-up user, without credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// An account row including its password hash, used only for login
#[derive(Debug, Clone)]
pub struct StoredAccount {
    pub account: Account,
    pub password_hash: String,
}

/// Row to insert at signup
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Credential persistence
///
/// Accounts are created once and never updated or deleted.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new account
    ///
    /// Fails with [`AccountError::AlreadyExists`] if the username or email
    /// is taken, without writing anything.
    async fn create(&self, account: NewAccount) -> Result<Account, AccountError>;

    /// Find an account whose username or email equals `identifier`
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<StoredAccount>, AccountError>;

    /// Number of accounts
    async fn count(&self) -> Result<u64, AccountError>;
}

/// `SQLite`-backed account store
///
/// One connection guarded by a mutex; queries run on the blocking pool.
#[derive(Clone)]
pub struct SqliteAccountStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteAccountStore {
    /// Open (or create) the database at `url` and ensure the schema exists
    ///
    /// `:memory:` opens a private in-memory database. A `sqlite://` prefix
    /// is accepted and stripped.
    pub fn open(url: &str) -> Result<Self, AccountError> {
        let location = url.strip_prefix("sqlite://").unwrap_or(url);

        let connection = if location == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(Path::new(location))?
        };

        connection.execute_batch(SCHEMA)?;

        tracing::info!(database = location, "account store opened");

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    async fn with_connection<T, F>(&self, operation: F) -> Result<T, AccountError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, AccountError> + Send + 'static,
    {
        let connection = Arc::clone(&self.connection);

        tokio::task::spawn_blocking(move || {
            let guard = connection
                .lock()
                .map_err(|_| AccountError::Internal("account store lock poisoned".to_owned()))?;
            operation(&guard)
        })
        .await
        .map_err(|e| AccountError::Internal(format!("account store task failed: {e}")))?
    }
}

#[async_trait]
impl AccountStore for SqliteAccountStore {
    async fn create(&self, account: NewAccount) -> Result<Account, AccountError> {
        self.with_connection(move |connection| {
            let inserted = connection.execute(
                "INSERT INTO users (username, email, password_hash) VALUES (?1, ?2, ?3)",
                params![account.username, account.email, account.password_hash],
            );

            match inserted {
                Ok(_) => Ok(Account {
                    id: connection.last_insert_rowid(),
                    username: account.username,
                    email: account.email,
                }),
                Err(rusqlite::Error::SqliteFailure(failure, _)) if failure.code == ErrorCode::ConstraintViolation => {
                    Err(AccountError::AlreadyExists)
                }
                Err(e) => Err(e.into()),
            }
        })
        .await
    }

    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<StoredAccount>, AccountError> {
        let identifier = identifier.to_owned();

        self.with_connection(move |connection| {
            let found = connection
                .query_row(
                    "SELECT id, username, email, password_hash FROM users \
                     WHERE username = ?1 OR email = ?1 ORDER BY id LIMIT 1",
                    params![identifier],
                    |row| {
                        Ok(StoredAccount {
                            account: Account {
                                id: row.get(0)?,
                                username: row.get(1)?,
                                email: row.get(2)?,
                            },
                            password_hash: row.get(3)?,
                        })
                    },
                )
                .optional()?;

            Ok(found)
        })
        .await
    }

    async fn count(&self) -> Result<u64, AccountError> {
        self.with_connection(|connection| {
            let count: i64 = connection.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
            Ok(u64::try_from(count).unwrap_or_default())
        })
        .await
    }
}
