//! Recency store. Last few distinct looked-up words, most-recent-first.
//!
//! - Case-insensitive: words are stored lowercase
//! - Persisted as a JSON array of strings under a single fixed key
//! - Loading fails soft: corrupt or missing data yields an empty list

use crate::domain::DomainError;
use crate::ports::KeyValueStorePort;
use std::sync::Arc;
use tracing::{debug, warn};

/// Storage key for the serialized history.
pub const HISTORY_KEY: &str = "wordlens.history";

/// Maximum number of remembered words.
pub const HISTORY_LIMIT: usize = 5;

/// Owns the history list. Renderers only ever see a snapshot.
pub struct RecencyStore {
    store: Arc<dyn KeyValueStorePort>,
    words: Vec<String>,
}

impl RecencyStore {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self {
            store,
            words: Vec::new(),
        }
    }

    /// Read persisted history. Never fails: problems are logged and yield an empty list.
    pub async fn load(&mut self) -> Vec<String> {
        let loaded = match self.store.get(HISTORY_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(words) => sanitize(words),
                Err(e) => {
                    warn!(error = %e, "history is corrupt, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "history unreadable, starting empty");
                Vec::new()
            }
        };
        debug!(count = loaded.len(), "history loaded");
        self.words = loaded;
        self.words.clone()
    }

    /// Move `word` (lowercased) to the front, truncate and persist. Returns the new list.
    ///
    /// The in-memory list is updated before persisting, so a storage error
    /// leaves the session history current and only the write is lost.
    pub async fn record(&mut self, word: &str) -> Result<Vec<String>, DomainError> {
        let word = word.trim().to_lowercase();
        let mut next = Vec::with_capacity(HISTORY_LIMIT);
        next.push(word.clone());
        next.extend(self.words.iter().filter(|w| **w != word).cloned());
        next.truncate(HISTORY_LIMIT);
        self.words = next;
        debug!(word = %word, count = self.words.len(), "history recorded");

        let json =
            serde_json::to_string(&self.words).map_err(|e| DomainError::Storage(e.to_string()))?;
        self.store.set(HISTORY_KEY, &json).await?;
        Ok(self.words.clone())
    }

    pub fn snapshot(&self) -> &[String] {
        &self.words
    }
}

/// Lowercase, drop blanks and duplicates, cap length. Guards against hand-edited files.
fn sanitize(words: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(HISTORY_LIMIT);
    for w in words {
        let w = w.trim().to_lowercase();
        if !w.is_empty() && !out.contains(&w) {
            out.push(w);
        }
        if out.len() == HISTORY_LIMIT {
            break;
        }
    }
    out
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::adapters::persistence::MemoryStore;

    /// Store whose writes always fail. Reads report nothing stored.
    pub(crate) struct ReadOnlyStore;

    #[async_trait::async_trait]
    impl KeyValueStorePort for ReadOnlyStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, DomainError> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), DomainError> {
            Err(DomainError::Storage("disk full".into()))
        }
    }

    fn store() -> (Arc<MemoryStore>, RecencyStore) {
        let mem = Arc::new(MemoryStore::new());
        let recency = RecencyStore::new(Arc::clone(&mem) as Arc<dyn KeyValueStorePort>);
        (mem, recency)
    }

    #[tokio::test]
    async fn test_record_then_load_puts_word_first() {
        let (mem, mut recency) = store();
        recency.record("Ephemeral").await.unwrap();

        let mut reloaded = RecencyStore::new(mem as Arc<dyn KeyValueStorePort>);
        let words = reloaded.load().await;
        assert_eq!(words, vec!["ephemeral"]);
    }

    #[tokio::test]
    async fn test_record_same_word_keeps_length() {
        let (_, mut recency) = store();
        recency.record("alpha").await.unwrap();
        recency.record("beta").await.unwrap();
        let before = recency.snapshot().len();
        let words = recency.record("alpha").await.unwrap();
        assert_eq!(words.len(), before);
        assert_eq!(words, vec!["alpha", "beta"]);
    }

    #[tokio::test]
    async fn test_history_capped_oldest_evicted() {
        let (_, mut recency) = store();
        for w in ["one", "two", "three", "four", "five", "six", "seven"] {
            let words = recency.record(w).await.unwrap();
            assert!(words.len() <= HISTORY_LIMIT);
            assert_eq!(words[0], w);
        }
        assert_eq!(
            recency.snapshot(),
            &["seven", "six", "five", "four", "three"]
        );
    }

    #[tokio::test]
    async fn test_case_insensitive_dedup() {
        let (_, mut recency) = store();
        recency.record("Run").await.unwrap();
        recency.record("run").await.unwrap();
        let words = recency.record("RUN").await.unwrap();
        assert_eq!(words, vec!["run"]);
    }

    #[tokio::test]
    async fn test_load_missing_is_empty() {
        let (_, mut recency) = store();
        assert!(recency.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_corrupt_is_empty() {
        let (mem, mut recency) = store();
        mem.set(HISTORY_KEY, "{not json").await.unwrap();
        assert!(recency.load().await.is_empty());

        mem.set(HISTORY_KEY, r#"{"words": ["a"]}"#).await.unwrap();
        assert!(recency.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_sanitizes_hand_edited_data() {
        let (mem, mut recency) = store();
        mem.set(HISTORY_KEY, r#"["A", "a", " ", "b", "c", "d", "e", "f"]"#)
            .await
            .unwrap();
        assert_eq!(recency.load().await, vec!["a", "b", "c", "d", "e"]);
    }

    #[tokio::test]
    async fn test_record_persists_json_array() {
        let (mem, mut recency) = store();
        recency.record("Zeal").await.unwrap();
        let raw = mem.get(HISTORY_KEY).await.unwrap().unwrap();
        assert_eq!(raw, r#"["zeal"]"#);
    }

    #[tokio::test]
    async fn test_failed_persist_still_updates_session_list() {
        let mut recency = RecencyStore::new(Arc::new(ReadOnlyStore));
        let err = recency.record("Petrichor").await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(ref m) if m.contains("disk full")));
        assert_eq!(recency.snapshot(), &["petrichor"]);

        assert!(recency.record("sonder").await.is_err());
        assert_eq!(recency.snapshot(), &["sonder", "petrichor"]);
    }
}
