pub mod banner;
pub mod progress;
pub mod surface;
pub mod tui;

/// Prints the welcome banner and applies the theme for all subsequent inquire prompts.
/// Call once at startup (e.g. in main after tracing init).
pub fn init_ui(mode: &str) {
    banner::print_welcome(mode);
    tui::apply_theme();
}
