//! List command implementation.
//!
//! The `quizdeck list` command prints every question in the store.

use crate::cli::args::ListArgs;
use crate::config::QuizConfig;
use crate::error::{QuizError, Result};
use crate::quiz::{Event, Outcome, QuizSession, RequestKind};
use crate::store::{HttpQuestionStore, QuestionStore};
use crate::ui::{QuizTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::display::{dispatch_request, show_question};

/// The list command implementation.
pub struct ListCommand {
    config: QuizConfig,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(config: &QuizConfig, args: ListArgs) -> Self {
        Self {
            config: config.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    /// Run against `store`.
    pub fn run_with<S: QuestionStore>(
        &self,
        store: S,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let mut session = QuizSession::new(store);

        // JSON goes to stdout untouched, so no spinner.
        let outcome = if self.args.json {
            session.dispatch(Event::Load)
        } else {
            dispatch_request(&mut session, ui, RequestKind::List, Event::Load)
        };
        if let Outcome::Failed(failure) = outcome {
            ui.error(failure.message());
            return Ok(CommandResult::failure(1));
        }

        let questions = &session.state().questions;

        if self.args.json {
            let json = serde_json::to_string_pretty(questions)
                .map_err(|e| QuizError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Questions");
        if questions.is_empty() {
            ui.message("  No questions yet.");
            return Ok(CommandResult::success());
        }

        let theme = QuizTheme::detect();
        for question in questions {
            show_question(ui, &theme, question);
        }

        Ok(CommandResult::success())
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = HttpQuestionStore::from_config(&self.config.endpoint)?;
        self.run_with(store, ui)
    }
}
