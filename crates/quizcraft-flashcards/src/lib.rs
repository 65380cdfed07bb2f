//! Flashcard generation pipeline
//!
//! Study text goes through a fixed prompt to the generation client, the
//! free-text completion is parsed into question/answer pairs, and the
//! result is cached per study text for the life of the process.

#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

mod cache;
mod error;
mod evaluate;
mod extract;
pub mod prompt;
mod service;
mod types;

pub use cache::FlashcardCache;
pub use error::FlashcardError;
pub use evaluate::is_affirmative;
pub use extract::Extractor;
pub use service::FlashcardService;
pub use types::{Flashcard, FlashcardSet};
