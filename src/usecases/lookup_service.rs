//! Lookup service. The single lookup pipeline, parameterised by `LookupMode`:
//! submit → build request → language service → normalize → record history → render.
//!
//! - The only suspension point is the service call; no lock is held across it
//! - A result is committed only if its request token is still current
//! - History is updated only for committed successes

use crate::domain::{DictionaryEntry, DomainError, EntryView, LookupMode, UiState};
use crate::ports::{LanguageServicePort, RenderSurface, SpeechPort};
use crate::usecases::recency_store::RecencyStore;
use crate::usecases::render_controller::RenderController;
use crate::usecases::word_of_the_day::WordOfTheDay;
use crate::usecases::{query_builder, response_normalizer};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// What happened to one submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Empty query; no network call was made.
    Rejected,
    /// Result committed and shown.
    Completed(DictionaryEntry),
    /// Service or parse failure committed as the error state.
    Failed,
    /// A newer submit took over; this result was dropped.
    Superseded,
}

pub struct LookupService {
    llm: Arc<dyn LanguageServicePort>,
    speech: Arc<dyn SpeechPort>,
    mode: LookupMode,
    controller: Mutex<RenderController>,
    history: Mutex<RecencyStore>,
    word_of_the_day: WordOfTheDay,
    featured: Mutex<String>,
}

impl LookupService {
    pub fn new(
        llm: Arc<dyn LanguageServicePort>,
        speech: Arc<dyn SpeechPort>,
        history: RecencyStore,
        surface: Box<dyn RenderSurface>,
        mode: LookupMode,
    ) -> Self {
        let controller = RenderController::new(surface, speech.is_available());
        let word_of_the_day = WordOfTheDay::new();
        let featured = word_of_the_day.pick().to_string();
        Self {
            llm,
            speech,
            mode,
            controller: Mutex::new(controller),
            history: Mutex::new(history),
            word_of_the_day,
            featured: Mutex::new(featured),
        }
    }

    /// Replace the curated word-of-the-day list and draw a featured word from it.
    pub fn with_word_of_the_day(mut self, word_of_the_day: WordOfTheDay) -> Self {
        self.featured = Mutex::new(word_of_the_day.pick().to_string());
        self.word_of_the_day = word_of_the_day;
        self
    }

    /// Load persisted history and show it. Call once at startup.
    pub async fn init(&self) -> Vec<String> {
        let words = self.history.lock().await.load().await;
        self.controller.lock().await.show_history(&words);
        info!(mode = %self.mode, history = words.len(), "lookup service ready");
        words
    }

    /// Run one lookup for raw user input.
    pub async fn lookup(&self, raw: &str) -> LookupOutcome {
        let Some((query, token)) = self.controller.lock().await.submit(raw) else {
            debug!("empty query rejected");
            return LookupOutcome::Rejected;
        };

        let request = query_builder::build(&query, self.mode);
        let fetched = match self.llm.generate(&request).await {
            Ok(reply) => response_normalizer::normalize(&reply, &query, self.mode)
                .map_err(DomainError::from),
            Err(e) => Err(e),
        };

        let mut controller = self.controller.lock().await;
        if !controller.is_current(token) {
            debug!(word = %query, token = token.0, "lookup superseded, discarding reply");
            return LookupOutcome::Superseded;
        }

        match fetched {
            Ok(entry) => {
                let mut history = self.history.lock().await;
                if let Err(e) = history.record(&entry.word).await {
                    warn!(word = %entry.word, error = %e, "failed to persist history");
                }
                controller.complete(token, Ok(entry.clone()));
                controller.show_history(history.snapshot());
                info!(word = %entry.word, sources = entry.sources.len(), "lookup complete");
                LookupOutcome::Completed(entry)
            }
            Err(e) => {
                controller.complete(token, Err(e));
                LookupOutcome::Failed
            }
        }
    }

    /// Look up the currently featured word of the day.
    pub async fn lookup_word_of_the_day(&self) -> LookupOutcome {
        let word = self.word_of_the_day().await;
        self.lookup(&word).await
    }

    /// The featured word. Stable until `next_word_of_the_day`.
    pub async fn word_of_the_day(&self) -> String {
        self.featured.lock().await.clone()
    }

    /// Feature a freshly drawn curated word and return it.
    pub async fn next_word_of_the_day(&self) -> String {
        let word = self.word_of_the_day.pick().to_string();
        debug!(word = %word, "new word of the day");
        *self.featured.lock().await = word.clone();
        word
    }

    /// Expand or collapse the details block of the current result.
    pub async fn toggle_details(&self) -> bool {
        self.controller.lock().await.toggle_details()
    }

    /// Speak the current result's word. No-op when there is no result or no speech backend.
    pub async fn speak_current(&self) -> Result<bool, DomainError> {
        if !self.speech.is_available() {
            return Ok(false);
        }
        let word = match self.controller.lock().await.state() {
            UiState::Result(entry) => entry.word.clone(),
            _ => return Ok(false),
        };
        self.speech.speak(&word).await?;
        Ok(true)
    }

    pub async fn history(&self) -> Vec<String> {
        self.history.lock().await.snapshot().to_vec()
    }

    pub async fn state(&self) -> UiState {
        self.controller.lock().await.state().clone()
    }

    pub async fn view(&self) -> Option<EntryView> {
        self.controller.lock().await.view()
    }
}
