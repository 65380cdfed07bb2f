use std::sync::Arc;

use quizcraft_accounts::{AccountService, SessionKeys};
use quizcraft_flashcards::FlashcardService;
use stt::Transcriber;

/// Shared handles passed to every handler
#[derive(Clone)]
pub struct AppState {
    pub flashcards: Arc<FlashcardService>,
    pub accounts: Arc<AccountService>,
    pub sessions: Arc<SessionKeys>,
    /// `None` when no `[transcription]` section is configured
    pub transcriber: Option<Arc<dyn Transcriber>>,
}
