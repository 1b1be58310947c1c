use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::output;

/// A terminal progress bar for one translation batch.
///
/// Hidden entirely in quiet mode. Automatically clears itself when dropped
/// (RAII pattern).
pub struct BatchProgress {
    progress_bar: ProgressBar,
}

impl BatchProgress {
    /// Creates and starts a progress bar over `total` paragraphs.
    #[allow(clippy::unwrap_used)]
    pub fn new(total: u64) -> Self {
        let progress_bar = if output::is_quiet() {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total)
        };
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
                .template("{spinner} {msg} [{bar:30}] {pos}/{len}")
                .unwrap(),
        );
        progress_bar.set_message("Translating");
        progress_bar.enable_steady_tick(Duration::from_millis(80));

        Self { progress_bar }
    }

    /// Moves the bar to `done` completed paragraphs.
    pub fn set(&self, done: u64) {
        self.progress_bar.set_position(done);
    }

    /// Stops the bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for BatchProgress {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}
