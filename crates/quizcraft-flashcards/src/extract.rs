//! Completion text → flashcards
//!
//! Grammar, scanned left to right over the trimmed completion:
//!
//! ```text
//! card     = question answer
//! question = "question" (":" | ">") TEXT      ; TEXT runs up to the next answer marker, may span lines
//! answer   = "answer" (":" | ">") LINE        ; LINE runs up to the next line break or end of input
//! ```
//!
//! Markers are ASCII case-insensitive. Anything between cards is ignored.
//! Answers never continue past their first line break, so a multi-line
//! answer is truncated to its first line.

use quizcraft_config::FlashcardsConfig;

use crate::error::FlashcardError;
use crate::types::{Flashcard, FlashcardSet};

const QUESTION_MARKER: &str = "question";
const ANSWER_MARKER: &str = "answer";

/// Parses completions into flashcard sets and drops degenerate pairs
#[derive(Debug, Clone, Copy)]
pub struct Extractor {
    min_field_chars: usize,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::from_config(&FlashcardsConfig::default())
    }
}

impl Extractor {
    /// Fields must be strictly longer than `min_field_chars` characters
    pub const fn new(min_field_chars: usize) -> Self {
        Self { min_field_chars }
    }

    pub const fn from_config(config: &FlashcardsConfig) -> Self {
        Self::new(config.min_field_chars)
    }

    /// Extract flashcards from a raw completion
    ///
    /// Returns [`FlashcardError::EmptyResult`] when no pair survives the
    /// length filter.
    pub fn extract(&self, completion: &str) -> Result<FlashcardSet, FlashcardError> {
        let pairs = scan_pairs(completion.trim());
        let scanned = pairs.len();

        let cards: Vec<Flashcard> = pairs
            .into_iter()
            .filter(|(question, answer)| self.long_enough(question) && self.long_enough(answer))
            .zip(1..)
            .map(|((question, answer), id)| Flashcard {
                id,
                question: question.to_owned(),
                answer: answer.to_owned(),
            })
            .collect();

        tracing::debug!(scanned, kept = cards.len(), "scanned completion for flashcards");

        if cards.is_empty() {
            return Err(FlashcardError::EmptyResult);
        }

        Ok(FlashcardSet::new(cards))
    }

    fn long_enough(&self, field: &str) -> bool {
        field.chars().count() > self.min_field_chars
    }
}

/// All trimmed `(question, answer)` pairs in scan order, before filtering
fn scan_pairs(text: &str) -> Vec<(&str, &str)> {
    // ASCII lowercasing keeps byte offsets identical to `text`
    let folded = text.to_ascii_lowercase();
    let mut pairs = Vec::new();
    let mut cursor = 0;

    while let Some((_, question_start)) = find_marker(&folded, cursor, QUESTION_MARKER)
        && let Some((answer_marker, answer_start)) = find_marker(&folded, question_start, ANSWER_MARKER)
    {
        let answer_end = text[answer_start..]
            .find(['\n', '\r'])
            .map_or(text.len(), |offset| answer_start + offset);

        pairs.push((
            text[question_start..answer_marker].trim(),
            text[answer_start..answer_end].trim(),
        ));

        cursor = answer_end;
    }

    pairs
}

/// Find `word` followed by `:` or `>` at or after `from`
///
/// Returns the marker start and the offset just past the delimiter.
fn find_marker(folded: &str, from: usize, word: &str) -> Option<(usize, usize)> {
    let mut from = from;

    while let Some(offset) = folded[from..].find(word) {
        let start = from + offset;
        let delimiter = start + word.len();

        if matches!(folded.as_bytes().get(delimiter), Some(b':' | b'>')) {
            return Some((start, delimiter + 1));
        }

        // Markers are ASCII, so the next byte is a char boundary
        from = start + 1;
    }

    None
}
