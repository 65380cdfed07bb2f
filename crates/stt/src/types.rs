use serde::{Deserialize, Serialize};

/// Text recognized from one audio upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pub text: String,
}

impl Transcript {
    /// Join segment texts with single spaces
    pub fn from_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        let text = segments
            .into_iter()
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Self { text }
    }
}

/// `verbose_json` body from the Whisper transcription endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct WhisperResponse {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub segments: Vec<WhisperSegment>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WhisperSegment {
    pub text: String,
}

impl WhisperResponse {
    /// Prefer segments; plain `json` responses only carry `text`
    pub fn into_transcript(self) -> Transcript {
        if self.segments.is_empty() {
            return Transcript::from_segments([self.text.as_str()]);
        }

        Transcript::from_segments(self.segments.iter().map(|segment| segment.text.as_str()))
    }
}
