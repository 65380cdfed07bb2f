//! Google Generative Language API wire format types

use serde::{Deserialize, Serialize};

// -- Request types --

/// Google `generateContent` request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleRequest {
    /// Conversation contents
    pub contents: Vec<GoogleContent>,
    /// Generation configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GoogleGenerationConfig>,
}

impl GoogleRequest {
    /// Single-turn user prompt
    pub fn from_prompt(prompt: &str, temperature: Option<f64>) -> Self {
        Self {
            contents: vec![GoogleContent {
                role: Some("user".to_owned()),
                parts: vec![GooglePart {
                    text: Some(prompt.to_owned()),
                }],
            }],
            generation_config: temperature.map(|temperature| GoogleGenerationConfig {
                temperature: Some(temperature),
            }),
        }
    }
}

/// Google content object containing role and parts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleContent {
    /// Role ("user" or "model")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Content parts
    #[serde(default)]
    pub parts: Vec<GooglePart>,
}

/// Part within a content object; only text parts are used here
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GooglePart {
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Generation configuration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleGenerationConfig {
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

// -- Response types --

/// Google `generateContent` response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleResponse {
    /// Generated candidates
    #[serde(default)]
    pub candidates: Vec<GoogleCandidate>,
}

/// A single generated candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleCandidate {
    /// Candidate content, absent when generation was blocked
    #[serde(default)]
    pub content: Option<GoogleContent>,
    /// Why generation stopped (e.g. "STOP", "SAFETY")
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GoogleResponse {
    /// Concatenated text of the first candidate, `None` only when there are
    /// no candidates
    ///
    /// A blocked candidate without content reads as an empty completion.
    pub fn into_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;

        Some(
            candidate
                .content
                .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
                .unwrap_or_default(),
        )
    }
}
