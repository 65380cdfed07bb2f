mod accounts;
mod error;
mod flashcards;
mod health;
mod pages;
mod session;
mod state;
mod transcribe;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use quizcraft_accounts::{AccountService, SessionKeys, SqliteAccountStore};
use quizcraft_config::{Config, HealthConfig};
use quizcraft_flashcards::{Extractor, FlashcardCache, FlashcardService};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a provider client, the account database or the
    /// session keys cannot be initialized
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 5000)));

        let state = AppState::from_config(&config)?;

        Ok(Self {
            router: router(state, &config.server.health),
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

impl AppState {
    /// Initialize every collaborator named in the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any collaborator fails to initialize
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let generation = quizcraft_llm::build_client(&config.generation)?;
        let flashcards = FlashcardService::new(
            generation,
            Arc::new(FlashcardCache::new()),
            Extractor::from_config(&config.flashcards),
        );

        let transcriber = config.transcription.as_ref().map(stt::build_transcriber).transpose()?;
        if transcriber.is_none() {
            tracing::info!("no [transcription] section, audio upload disabled");
        }

        let store = SqliteAccountStore::open(&config.database.url)?;

        Ok(Self {
            flashcards: Arc::new(flashcards),
            accounts: Arc::new(AccountService::new(Arc::new(store))),
            sessions: Arc::new(SessionKeys::from_config(&config.session)?),
            transcriber,
        })
    }
}

/// All routes with their middleware
pub fn router(state: AppState, health: &HealthConfig) -> Router {
    let mut app = Router::new()
        .route("/", get(accounts::index))
        .route("/signup", get(accounts::signup_page).post(accounts::signup))
        .route("/login", get(accounts::login_page).post(accounts::login))
        .route("/logout", get(accounts::logout))
        .route("/generate_flashcards", post(flashcards::generate_flashcards))
        .route("/evaluate_answer", post(flashcards::evaluate_answer))
        .route(
            "/transcribe_audio",
            post(transcribe::transcribe_audio).layer(DefaultBodyLimit::max(transcribe::AUDIO_BODY_LIMIT)),
        )
        .with_state(state);

    // Health check
    if health.enabled {
        app = app.route(&health.path, get(health::health_handler));
    }

    app.layer(TraceLayer::new_for_http())
}
