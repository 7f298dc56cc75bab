//! Implements InputPort. Inquire-based interactive menu driving the lookup service.

use crate::domain::{DomainError, SPEAK_LABEL, UiState};
use crate::ports::InputPort;
use crate::usecases::LookupService;
use async_trait::async_trait;
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
use inquire::{Select, Text};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::warn;

/// Applies a muted theme to all subsequent inquire prompts.
pub fn apply_theme() {
    let mut config = RenderConfig::default();
    config.prompt_prefix = Styled::new("›").with_fg(Color::DarkYellow);
    config.highlighted_option_prefix = Styled::new("▸").with_fg(Color::DarkYellow);
    config.selected_option = Some(StyleSheet::new().with_fg(Color::LightCyan));
    config.answer = StyleSheet::new().with_fg(Color::LightYellow);
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum MenuItem {
    LookUp,
    WordOfTheDay(String),
    NewRandomWord,
    History,
    ToggleDetails,
    Speak,
    Quit,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuItem::LookUp => write!(f, "Look up a word"),
            MenuItem::WordOfTheDay(w) => write!(f, "Word of the day: {}", w),
            MenuItem::NewRandomWord => write!(f, "New random word"),
            MenuItem::History => write!(f, "Recent lookups"),
            MenuItem::ToggleDetails => write!(f, "Show / hide details"),
            MenuItem::Speak => write!(f, "{}", SPEAK_LABEL),
            MenuItem::Quit => write!(f, "Quit"),
        }
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    service: Arc<LookupService>,
    word_of_day_visible: Arc<AtomicBool>,
}

impl TuiInputPort {
    pub fn new(service: Arc<LookupService>, word_of_day_visible: Arc<AtomicBool>) -> Self {
        Self {
            service,
            word_of_day_visible,
        }
    }

    async fn menu(&self) -> Vec<MenuItem> {
        let mut items = vec![MenuItem::LookUp];
        if self.word_of_day_visible.load(Ordering::SeqCst) {
            items.push(MenuItem::WordOfTheDay(self.service.word_of_the_day().await));
            items.push(MenuItem::NewRandomWord);
        }
        if !self.service.history().await.is_empty() {
            items.push(MenuItem::History);
        }
        if matches!(self.service.state().await, UiState::Result(_)) {
            items.push(MenuItem::ToggleDetails);
            if self.service.view().await.is_some_and(|v| v.audio.is_some()) {
                items.push(MenuItem::Speak);
            }
        }
        items.push(MenuItem::Quit);
        items
    }
}

/// `None` when the user cancelled the prompt (Esc / Ctrl-C).
fn cancellable<T>(result: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let items = self.menu().await;
            let Some(choice) = cancellable(Select::new("What next?", items).prompt())? else {
                return Ok(());
            };

            match choice {
                MenuItem::LookUp => {
                    if let Some(raw) = cancellable(Text::new("Word:").prompt())? {
                        self.service.lookup(&raw).await;
                    }
                }
                MenuItem::WordOfTheDay(_) => {
                    self.service.lookup_word_of_the_day().await;
                }
                MenuItem::NewRandomWord => {
                    self.service.next_word_of_the_day().await;
                }
                MenuItem::History => {
                    let words = self.service.history().await;
                    if let Some(w) = cancellable(Select::new("Recent lookups", words).prompt())? {
                        self.service.lookup(&w).await;
                    }
                }
                MenuItem::ToggleDetails => {
                    self.service.toggle_details().await;
                }
                MenuItem::Speak => {
                    if let Err(e) = self.service.speak_current().await {
                        warn!(error = %e, "speech output failed");
                    }
                }
                MenuItem::Quit => return Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_labels() {
        assert_eq!(
            MenuItem::WordOfTheDay("zenith".into()).to_string(),
            "Word of the day: zenith"
        );
        assert_eq!(MenuItem::Quit.to_string(), "Quit");
        assert_eq!(MenuItem::Speak.to_string(), SPEAK_LABEL);
    }

    #[test]
    fn test_cancel_maps_to_none() {
        let r: Result<Option<()>, _> = cancellable(Err(InquireError::OperationCanceled));
        assert!(matches!(r, Ok(None)));
        let r = cancellable(Ok(5));
        assert!(matches!(r, Ok(Some(5))));
    }
}
