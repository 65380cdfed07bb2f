use std::sync::Arc;

use quizcraft_llm::GenerationClient;

use crate::cache::FlashcardCache;
use crate::error::FlashcardError;
use crate::evaluate::is_affirmative;
use crate::extract::Extractor;
use crate::prompt;
use crate::types::FlashcardSet;

/// Flashcard generation and answer evaluation on top of a generation client
pub struct FlashcardService {
    client: Arc<dyn GenerationClient>,
    cache: Arc<FlashcardCache>,
    extractor: Extractor,
}

impl FlashcardService {
    pub const fn new(client: Arc<dyn GenerationClient>, cache: Arc<FlashcardCache>, extractor: Extractor) -> Self {
        Self {
            client,
            cache,
            extractor,
        }
    }

    pub fn cache(&self) -> &FlashcardCache {
        &self.cache
    }

    /// Flashcards for `text`, generated at most once per distinct trimmed text
    pub async fn generate(&self, text: &str) -> Result<Arc<FlashcardSet>, FlashcardError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(FlashcardError::Validation("Please enter some study notes."));
        }

        if let Some(set) = self.cache.lookup(text) {
            tracing::debug!(cards = set.len(), "flashcard cache hit");
            return Ok(set);
        }

        self.cache
            .get_or_try_insert_with(text, || async {
                let completion = self.client.generate(&prompt::flashcard_prompt(text)).await?;
                let set = self.extractor.extract(&completion)?;

                tracing::info!(
                    provider = self.client.name(),
                    input_chars = text.len(),
                    cards = set.len(),
                    "generated flashcards"
                );

                Ok(set)
            })
            .await
    }

    /// Ask the generation client whether `candidate` matches `reference`
    pub async fn evaluate(&self, candidate: &str, reference: &str) -> Result<bool, FlashcardError> {
        let (candidate, reference) = (candidate.trim(), reference.trim());
        if candidate.is_empty() || reference.is_empty() {
            return Err(FlashcardError::Validation("Both the answer and the correct answer are required."));
        }

        let completion = self
            .client
            .generate(&prompt::evaluation_prompt(candidate, reference))
            .await?;
        let correct = is_affirmative(&completion);

        tracing::debug!(correct, "evaluated answer");

        Ok(correct)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use quizcraft_llm::LlmError;

    use super::*;

    /// Replays canned completions and records prompts
    struct ScriptedClient {
        replies: Mutex<Vec<Result<String, LlmError>>>,
        prompts: Mutex<Vec<String>>,
        calls: AtomicUsize,
    }

    impl ScriptedClient {
        fn new(replies: Vec<Result<String, LlmError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies),
                prompts: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GenerationClient for ScriptedClient {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_owned());
            self.replies.lock().unwrap().remove(0)
        }
    }

    const COMPLETION: &str = "Question: What is the speed of light?\nAnswer: About 300,000 km per second";

    fn service(client: &Arc<ScriptedClient>) -> FlashcardService {
        FlashcardService::new(
            Arc::clone(client) as Arc<dyn GenerationClient>,
            Arc::new(FlashcardCache::new()),
            Extractor::default(),
        )
    }

    #[tokio::test]
    async fn identical_text_is_served_from_cache() {
        let client = ScriptedClient::new(vec![Ok(COMPLETION.to_owned())]);
        let service = service(&client);

        let first = service.generate("Light travels fast.").await.unwrap();
        let second = service.generate("  Light travels fast.\n").await.unwrap();

        assert_eq!(client.calls(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first[0].question, "What is the speed of light?");
    }

    #[tokio::test]
    async fn prompt_embeds_trimmed_text() {
        let client = ScriptedClient::new(vec![Ok(COMPLETION.to_owned())]);
        let service = service(&client);

        service.generate("\n  Light travels fast.  ").await.unwrap();

        let prompts = client.prompts.lock().unwrap();
        assert!(prompts[0].ends_with("Notes:\nLight travels fast."));
    }

    #[tokio::test]
    async fn differently_cased_text_is_a_new_request() {
        let client = ScriptedClient::new(vec![Ok(COMPLETION.to_owned()), Ok(COMPLETION.to_owned())]);
        let service = service(&client);

        service.generate("light travels fast").await.unwrap();
        service.generate("Light travels fast").await.unwrap();

        assert_eq!(client.calls(), 2);
        assert_eq!(service.cache().len(), 2);
    }

    #[tokio::test]
    async fn blank_text_is_rejected_without_calling_client() {
        let client = ScriptedClient::new(vec![]);
        let service = service(&client);

        let err = service.generate(" \n\t ").await.unwrap_err();

        assert!(matches!(err, FlashcardError::Validation(_)));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn unusable_completion_is_empty_result_and_not_cached() {
        let client = ScriptedClient::new(vec![Ok("I'm not sure what you mean.".to_owned()), Ok(COMPLETION.to_owned())]);
        let service = service(&client);

        let err = service.generate("Light travels fast.").await.unwrap_err();
        assert!(matches!(err, FlashcardError::EmptyResult));
        assert!(service.cache().is_empty());

        service.generate("Light travels fast.").await.unwrap();
        assert_eq!(client.calls(), 2);
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let client = ScriptedClient::new(vec![Err(LlmError::Timeout)]);
        let service = service(&client);

        let err = service.generate("Light travels fast.").await.unwrap_err();

        assert!(matches!(err, FlashcardError::Transport(LlmError::Timeout)));
        assert!(service.cache().is_empty());
    }

    #[tokio::test]
    async fn evaluation_follows_yes_rule() {
        let client = ScriptedClient::new(vec![
            Ok("Yes, that is correct.".to_owned()),
            Ok("No.".to_owned()),
            Ok(String::new()),
        ]);
        let service = service(&client);

        assert!(service.evaluate("Paris", "paris").await.unwrap());
        assert!(!service.evaluate("Lyon", "Paris").await.unwrap());
        assert!(!service.evaluate("Nice", "Paris").await.unwrap());

        let prompts = client.prompts.lock().unwrap();
        assert!(prompts[0].contains("Correct answer: paris"));
        assert!(prompts[0].ends_with("Learner's answer: Paris"));
    }

    #[tokio::test]
    async fn evaluation_requires_both_answers() {
        let client = ScriptedClient::new(vec![]);
        let service = service(&client);

        assert!(matches!(
            service.evaluate("", "Paris").await,
            Err(FlashcardError::Validation(_))
        ));
        assert!(matches!(
            service.evaluate("Paris", "  ").await,
            Err(FlashcardError::Validation(_))
        ));
        assert_eq!(client.calls(), 0);
    }
}
