//! Delete command implementation.

use crate::cli::args::DeleteArgs;
use crate::config::QuizConfig;
use crate::error::Result;
use crate::quiz::{Event, IgnoreReason, Outcome, QuizSession, RequestKind};
use crate::store::{HttpQuestionStore, QuestionStore};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, EXIT_UNKNOWN_QUESTION};
use super::display::dispatch_request;

/// The delete command implementation.
pub struct DeleteCommand {
    config: QuizConfig,
    args: DeleteArgs,
}

impl DeleteCommand {
    /// Create a new delete command.
    pub fn new(config: &QuizConfig, args: DeleteArgs) -> Self {
        Self {
            config: config.clone(),
            args,
        }
    }

    /// Run against `store`.
    pub fn run_with<S: QuestionStore>(
        &self,
        store: S,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let id = &self.args.id;
        let mut session = QuizSession::new(store);

        if let Outcome::Failed(failure) =
            dispatch_request(&mut session, ui, RequestKind::List, Event::Load)
        {
            ui.error(failure.message());
            return Ok(CommandResult::failure(1));
        }

        if let Outcome::Ignored(IgnoreReason::UnknownQuestion(_)) =
            session.dispatch(Event::Focus(id.clone()))
        {
            ui.error(&format!("No question with id '{}'", id));
            return Ok(CommandResult::failure(EXIT_UNKNOWN_QUESTION));
        }

        match dispatch_request(&mut session, ui, RequestKind::Delete, Event::DeleteCurrent) {
            Outcome::Applied => {
                ui.success(&format!("Deleted question {}", id));
                Ok(CommandResult::success())
            }
            Outcome::Failed(failure) => {
                ui.error(failure.message());
                Ok(CommandResult::failure(1))
            }
            Outcome::Ignored(reason) => {
                ui.error(&format!("Could not delete question: {}", reason));
                Ok(CommandResult::failure(1))
            }
        }
    }
}

impl Command for DeleteCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = HttpQuestionStore::from_config(&self.config.endpoint)?;
        self.run_with(store, ui)
    }
}
