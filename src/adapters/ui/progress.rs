//! Loading spinner shown while a lookup is in flight.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK_MS: u64 = 90;

/// Start a steady-ticking spinner with `message`.
pub fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.yellow} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"]);
    pb.set_style(style);
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(TICK_MS));
    pb
}
