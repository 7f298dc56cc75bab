//! Render controller. Owns the UI state machine and writes it to an injected surface.
//!
//! Idle → Loading → Result | Error, re-entrant on every submit. Each accepted
//! submit issues a fresh `RequestToken`; completions carrying an older token
//! are dropped so a slow superseded lookup can never overwrite a newer one.

use crate::domain::{
    DictionaryEntry, DomainError, EntryView, FALLBACK_MESSAGE, RequestToken, UiState,
    VALIDATION_MESSAGE, WordQuery,
};
use crate::ports::RenderSurface;
use tracing::{debug, warn};

pub struct RenderController {
    surface: Box<dyn RenderSurface>,
    state: UiState,
    next_token: u64,
    current: Option<RequestToken>,
    details_expanded: bool,
    audio_available: bool,
}

impl RenderController {
    pub fn new(surface: Box<dyn RenderSurface>, audio_available: bool) -> Self {
        let mut controller = Self {
            surface,
            state: UiState::Idle,
            next_token: 0,
            current: None,
            details_expanded: false,
            audio_available,
        };
        controller.surface.show_idle();
        controller.surface.set_word_of_day_visible(true);
        controller
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Handle a submit. Returns the validated query and its token, or `None`
    /// (state is then `Error`) when the input is empty.
    pub fn submit(&mut self, raw: &str) -> Option<(WordQuery, RequestToken)> {
        let query = match WordQuery::parse(raw) {
            Ok(q) => q,
            Err(_) => {
                self.current = None;
                self.enter_error(VALIDATION_MESSAGE);
                return None;
            }
        };

        self.next_token += 1;
        let token = RequestToken(self.next_token);
        if let Some(prev) = self.current.replace(token) {
            debug!(superseded = prev.0, token = token.0, "new lookup supersedes in-flight one");
        }
        self.details_expanded = false;
        self.state = UiState::Loading {
            word: query.text().to_string(),
        };
        self.surface.set_word_of_day_visible(false);
        self.surface.show_loading(query.text());
        Some((query, token))
    }

    /// Whether `token` is the one a completion may commit with.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current == Some(token) && self.state.is_loading()
    }

    /// Commit a finished lookup. Returns `false` if the token was superseded.
    pub fn complete(
        &mut self,
        token: RequestToken,
        outcome: Result<DictionaryEntry, DomainError>,
    ) -> bool {
        if !self.is_current(token) {
            debug!(token = token.0, "dropping stale lookup result");
            return false;
        }
        self.current = None;
        match outcome {
            Ok(entry) => {
                self.details_expanded = false;
                self.state = UiState::Result(entry);
                self.render_result();
            }
            Err(e) => {
                warn!(token = token.0, error = %e, "lookup failed");
                self.enter_error(FALLBACK_MESSAGE);
            }
        }
        true
    }

    /// Flip the details block. Pure UI state: no re-fetch. No-op outside `Result`.
    pub fn toggle_details(&mut self) -> bool {
        if !matches!(self.state, UiState::Result(_)) {
            return false;
        }
        self.details_expanded = !self.details_expanded;
        self.render_result();
        true
    }

    /// Current render tree, if a result is showing.
    pub fn view(&self) -> Option<EntryView> {
        match &self.state {
            UiState::Result(entry) => Some(EntryView::from_entry(
                entry,
                self.details_expanded,
                self.audio_available,
            )),
            _ => None,
        }
    }

    /// Forward a history snapshot to the surface.
    pub fn show_history(&mut self, words: &[String]) {
        self.surface.show_history(words);
    }

    fn render_result(&mut self) {
        if let Some(view) = self.view() {
            self.surface.set_word_of_day_visible(false);
            self.surface.show_result(&view);
        }
    }

    fn enter_error(&mut self, message: &str) {
        self.state = UiState::Error(message.to_string());
        self.surface.show_error(message);
        self.surface.set_word_of_day_visible(true);
    }
}
