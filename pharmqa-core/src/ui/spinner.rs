//! Loading spinner shown while a model call is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// A wrapper around indicatif's ProgressBar for easy spinner management
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// Create and start a spinner with the given message
    pub fn new(message: &str) -> Self {
        Self::with_bar(ProgressBar::new_spinner(), message)
    }

    /// A spinner that draws nowhere, for non-interactive output.
    pub fn hidden(message: &str) -> Self {
        Self::with_bar(ProgressBar::hidden(), message)
    }

    fn with_bar(pb: ProgressBar, message: &str) -> Self {
        let style = ProgressStyle::with_template("{spinner:.green} {msg}")
            .map(|style| style.tick_chars(TICK_CHARS))
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.tick();
        Self { pb }
    }

    pub fn set_message(&self, message: &str) {
        self.pb.set_message(message.to_string());
    }

    pub fn message(&self) -> String {
        self.pb.message()
    }

    /// Finish the spinner and clear the line
    pub fn finish_and_clear(&self) {
        self.pb.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.pb.is_finished() {
            self.pb.finish_and_clear();
        }
    }
}
