use serde::Deserialize;

/// Flashcard extraction configuration
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlashcardsConfig {
    /// Questions and answers must be strictly longer than this many characters
    #[serde(default = "default_min_field_chars")]
    pub min_field_chars: usize,
}

impl Default for FlashcardsConfig {
    fn default() -> Self {
        Self {
            min_field_chars: default_min_field_chars(),
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_min_field_chars() -> usize {
    5
}
