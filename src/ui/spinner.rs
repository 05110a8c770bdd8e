//! Progress spinner shown while a store request is in flight.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::QuizTheme;
use super::SpinnerHandle;

/// A spinner for one request.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: QuizTheme,
}

impl ProgressSpinner {
    /// Start spinning with `message`.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar,
            theme: QuizTheme::detect(),
        }
    }

    /// A spinner that draws nothing (quiet mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: QuizTheme::plain(),
        }
    }

    fn finish_with(&mut self, line: String) {
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.finish_with(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.finish_with(line);
    }

    fn finish_skipped(&mut self, msg: &str) {
        let line = self.theme.format_skipped(msg);
        self.finish_with(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_spinner_finishes_quietly() {
        let mut spinner = ProgressSpinner::hidden();
        spinner.set_message("Saving question...");
        spinner.finish_success("Saved");
        assert!(spinner.bar.is_finished());
    }
}
