//! Mock language-service adapter for running without API calls.
//!
//! Returns canned dictionary replies shaped like the real service's, so the
//! whole pipeline (normalizer included) runs unchanged. Per-word overrides,
//! delays and failures make it usable as a scripted test double.

use crate::domain::{DomainError, LookupMode, OutboundRequest, RawReply};
use crate::ports::LanguageServicePort;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;

/// Mock adapter.
///
/// Words are matched case-insensitively. Simulates network latency.
pub struct MockLanguageAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    replies: HashMap<String, RawReply>,
    delays: HashMap<String, u64>,
    failures: HashMap<String, String>,
    calls: AtomicUsize,
}

impl MockLanguageAdapter {
    /// Create a new mock adapter with default delay (100ms).
    pub fn new() -> Self {
        Self::with_delay(100)
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            replies: HashMap::new(),
            delays: HashMap::new(),
            failures: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fixed reply for `word`.
    pub fn reply(mut self, word: &str, reply: RawReply) -> Self {
        self.replies.insert(word.to_lowercase(), reply);
        self
    }

    /// Fixed reply text (no citations) for `word`.
    pub fn reply_text(self, word: &str, text: &str) -> Self {
        self.reply(
            word,
            RawReply {
                text: text.to_string(),
                citations: Vec::new(),
            },
        )
    }

    /// Override the delay for `word`.
    pub fn delay_for(mut self, word: &str, delay_ms: u64) -> Self {
        self.delays.insert(word.to_lowercase(), delay_ms);
        self
    }

    /// Make lookups of `word` fail with a service error.
    pub fn fail(mut self, word: &str, detail: &str) -> Self {
        self.failures.insert(word.to_lowercase(), detail.to_string());
        self
    }

    /// Number of `generate` calls received.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn canned(request: &OutboundRequest) -> RawReply {
        let word = &request.word;
        let text = match request.mode {
            LookupMode::Grounded => format!(
                "**Pronunciation**: /{w}/\n\
                 **Definition**: [MOCK] A simulated definition of \"{w}\".\n\
                 **Etymology**: [MOCK] Configure a real API key for actual entries.\n\
                 **Example sentences**: \"{w}\" appears in this sentence.",
                w = word
            ),
            LookupMode::Structured => serde_json::json!({
                "compliment": format!("[MOCK] \"{word}\" is a fine choice."),
                "pronunciation": format!("/{word}/"),
                "partOfSpeech": "noun",
                "definition": format!("[MOCK] A simulated definition of \"{word}\"."),
                "synonyms": ["placeholder"],
                "antonyms": [],
                "etymology": "[MOCK] Configure a real API key for actual entries.",
                "exampleSentences": [
                    format!("\"{word}\" appears in this sentence."),
                    format!("Here is \"{word}\" again."),
                ],
            })
            .to_string(),
        };
        RawReply {
            text,
            citations: Vec::new(),
        }
    }
}

impl Default for MockLanguageAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LanguageServicePort for MockLanguageAdapter {
    async fn generate(&self, request: &OutboundRequest) -> Result<RawReply, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let key = request.word.to_lowercase();
        info!(word = %request.word, mode = %request.mode, "[MOCK] Simulating lookup");

        let delay = self.delays.get(&key).copied().unwrap_or(self.delay_ms);
        tokio::time::sleep(Duration::from_millis(delay)).await;

        if let Some(detail) = self.failures.get(&key) {
            return Err(DomainError::Service(detail.clone()));
        }
        Ok(self
            .replies
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Self::canned(request)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WordQuery;
    use crate::usecases::{query_builder, response_normalizer};

    #[tokio::test]
    async fn test_canned_replies_normalize_in_both_modes() {
        let adapter = MockLanguageAdapter::with_delay(1);
        let query = WordQuery::parse("Zenith").unwrap();
        for mode in [LookupMode::Grounded, LookupMode::Structured] {
            let req = query_builder::build(&query, mode);
            let raw = adapter.generate(&req).await.unwrap();
            let entry = response_normalizer::normalize(&raw, &query, mode).unwrap();
            assert_eq!(entry.word, "Zenith");
            assert!(entry.definition.contains("Zenith"));
        }
        assert_eq!(adapter.calls(), 2);
    }

    #[tokio::test]
    async fn test_overrides_and_failures() {
        let adapter = MockLanguageAdapter::with_delay(0)
            .reply_text("Run", "fixed")
            .fail("broken", "HTTP 500");
        let query = WordQuery::parse("run").unwrap();
        let raw = adapter
            .generate(&query_builder::build(&query, LookupMode::Grounded))
            .await
            .unwrap();
        assert_eq!(raw.text, "fixed");

        let query = WordQuery::parse("Broken").unwrap();
        let err = adapter
            .generate(&query_builder::build(&query, LookupMode::Grounded))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Service(ref d) if d == "HTTP 500"));
    }
}
