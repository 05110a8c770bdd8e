//! Mock UI implementation for testing.
//!
//! `MockUI` captures everything shown and answers prompts from scripted
//! responses, keyed by [`Prompt::key`].
//!
//! # Example
//!
//! ```
//! use quizdeck::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_prompt_responses("text", vec!["Paris", "Lyon"]);
//!
//! let first = ui.prompt(&Prompt::input("text", "Answer 1", None)).unwrap();
//! assert_eq!(first.as_string(), "Paris");
//!
//! ui.success("Saved");
//! assert!(ui.has_success("Saved"));
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::{QuizError, Result};

use super::{OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Queued responses are consumed first, then fixed responses, then the
/// prompt's own default. A prompt with none of these fails with
/// [`QuizError::NotInteractive`], which ends scripted loops.
#[derive(Debug)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create an interactive MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::with_mode(OutputMode::Normal)
    }

    /// Create a MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            interactive: true,
            messages: Vec::new(),
            successes: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
            headers: Vec::new(),
            spinners: Vec::new(),
            prompt_responses: HashMap::new(),
            prompt_queues: HashMap::new(),
            prompts_shown: Vec::new(),
        }
    }

    /// Always answer prompts with `key` by `response`.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Answer successive prompts with `key` from `responses`, in order.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        self.prompt_queues
            .entry(key.to_string())
            .or_default()
            .extend(responses.into_iter().map(String::from));
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Messages of every spinner started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Keys of every prompt shown, in order.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a message containing `msg` was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    fn scripted_response(&mut self, key: &str) -> Option<String> {
        if let Some(response) = self.prompt_queues.get_mut(key).and_then(VecDeque::pop_front) {
            return Some(response);
        }
        self.prompt_responses.get(key).cloned()
    }
}

impl Default for MockUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        let response = self
            .scripted_response(&prompt.key)
            .or_else(|| prompt.default.clone())
            .ok_or_else(|| QuizError::NotInteractive {
                key: prompt.key.clone(),
            })?;

        Ok(match prompt.prompt_type {
            PromptType::Confirm => {
                PromptResult::Bool(matches!(response.as_str(), "true" | "yes" | "y" | "1"))
            }
            PromptType::Input | PromptType::Select { .. } => PromptResult::String(response),
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Mock spinner that captures finish messages.
#[derive(Debug, Default)]
pub struct MockSpinner {
    messages: Vec<String>,
    finish_message: Option<String>,
    status: Option<SpinnerStatus>,
}

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    Success,
    Error,
    Skipped,
}

impl MockSpinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn finish_message(&self) -> Option<&str> {
        self.finish_message.as_deref()
    }

    pub fn status(&self) -> Option<SpinnerStatus> {
        self.status
    }

    fn finish(&mut self, msg: &str, status: SpinnerStatus) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(status);
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.finish(msg, SpinnerStatus::Success);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish(msg, SpinnerStatus::Error);
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.finish(msg, SpinnerStatus::Skipped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::PromptOption;

    #[test]
    fn captures_messages() {
        let mut ui = MockUI::new();
        ui.message("Hello");
        ui.success("Done");
        ui.warning("Careful");
        ui.error("Oops");

        assert_eq!(ui.messages(), &["Hello"]);
        assert_eq!(ui.successes(), &["Done"]);
        assert_eq!(ui.warnings(), &["Careful"]);
        assert_eq!(ui.errors(), &["Oops"]);
    }

    #[test]
    fn queue_is_consumed_before_fixed_response() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("action", "quit");
        ui.queue_prompt_responses("action", vec!["create"]);
        let prompt = Prompt::select("action", "Choose", vec![PromptOption::new("Quit", "quit")]);

        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "create");
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "quit");
        assert_eq!(ui.prompts_shown(), &["action", "action"]);
    }

    #[test]
    fn falls_back_to_prompt_default() {
        let mut ui = MockUI::new();
        let prompt = Prompt::input("text", "Question", Some("kept"));
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "kept");
    }

    #[test]
    fn unscripted_prompt_fails() {
        let mut ui = MockUI::new();
        let err = ui.prompt(&Prompt::input("text", "Question", None)).unwrap_err();
        assert!(matches!(err, QuizError::NotInteractive { .. }));
    }

    #[test]
    fn confirm_parses_yes() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("sure", "yes");
        let result = ui.prompt(&Prompt::confirm("sure", "Delete?", false)).unwrap();
        assert_eq!(result.as_bool(), Some(true));
    }

    #[test]
    fn mock_spinner_records_status() {
        let mut spinner = MockSpinner::new();
        spinner.set_message("Saving");
        spinner.finish_error("HTTP 500");
        assert_eq!(spinner.messages(), &["Saving"]);
        assert_eq!(spinner.finish_message(), Some("HTTP 500"));
        assert_eq!(spinner.status(), Some(SpinnerStatus::Error));
    }
}
