//! Render surface port. The render controller writes UI state through this.

use crate::domain::EntryView;

/// Output surface for the lookup UI.
///
/// Injected into the render controller so it never reaches for globals.
/// Calls are fire-and-forget: surfaces must not fail the state machine.
pub trait RenderSurface: Send {
    fn show_idle(&mut self);

    /// A lookup for `word` is in flight.
    fn show_loading(&mut self, word: &str);

    fn show_result(&mut self, view: &EntryView);

    /// `message` is always one of the fixed user-safe strings.
    fn show_error(&mut self, message: &str);

    /// Recency list snapshot, most-recent-first.
    fn show_history(&mut self, words: &[String]);

    /// Show or hide the "word of the day" affordance.
    fn set_word_of_day_visible(&mut self, visible: bool);
}
