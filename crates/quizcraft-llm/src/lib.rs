//! Text generation client for QuizCraft
//!
//! Wraps hosted LLM APIs behind a single prompt-in, completion-out trait so
//! the flashcard pipeline never sees provider wire formats.

#![allow(clippy::missing_errors_doc)]

mod error;
mod http_client;
pub mod protocol;
pub mod provider;

use std::sync::Arc;

use quizcraft_config::{GenerationConfig, GenerationProviderType};

pub use error::LlmError;
pub use provider::{GenerationClient, google::GoogleProvider, openai::OpenAiProvider};

/// Build the configured generation client
pub fn build_client(config: &GenerationConfig) -> Result<Arc<dyn GenerationClient>, LlmError> {
    let client: Arc<dyn GenerationClient> = match config.provider_type {
        GenerationProviderType::Google => Arc::new(GoogleProvider::new(config)?),
        GenerationProviderType::Openai => Arc::new(OpenAiProvider::new(config)?),
    };

    tracing::info!(
        provider = client.name(),
        model = config.model_name(),
        "generation client initialized"
    );

    Ok(client)
}
