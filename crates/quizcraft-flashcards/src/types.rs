use std::ops::Deref;

use serde::Serialize;

/// A question/answer pair surfaced to a learner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flashcard {
    /// Position within its set, starting at 1
    pub id: u32,
    pub question: String,
    pub answer: String,
}

/// Flashcards produced by one extraction, in completion order
///
/// Never empty: an extraction with no surviving pairs is an error instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlashcardSet(Vec<Flashcard>);

impl FlashcardSet {
    pub(crate) const fn new(cards: Vec<Flashcard>) -> Self {
        Self(cards)
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.0
    }
}

impl Deref for FlashcardSet {
    type Target = [Flashcard];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
