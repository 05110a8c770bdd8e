//! Edit command implementation.
//!
//! `quizdeck edit <id>` loads the collection, opens the edit form on the
//! question with that id, applies the flag values and submits.

use crate::cli::args::EditArgs;
use crate::config::QuizConfig;
use crate::error::Result;
use crate::model::QuestionField;
use crate::quiz::{Event, IgnoreReason, Outcome, QuizSession, RequestKind};
use crate::store::{HttpQuestionStore, QuestionStore};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, EXIT_UNKNOWN_QUESTION};
use super::display::dispatch_request;

/// The edit command implementation.
pub struct EditCommand {
    config: QuizConfig,
    args: EditArgs,
}

impl EditCommand {
    /// Create a new edit command.
    pub fn new(config: &QuizConfig, args: EditArgs) -> Self {
        Self {
            config: config.clone(),
            args,
        }
    }

    fn has_changes(&self) -> bool {
        self.args.question.is_some() || self.args.correct.is_some() || !self.args.answers.is_empty()
    }

    /// Run against `store`.
    pub fn run_with<S: QuestionStore>(
        &self,
        store: S,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let id = &self.args.id;
        if !self.has_changes() {
            ui.warning("Nothing to change. Pass --question, --answer or --correct.");
            return Ok(CommandResult::success());
        }

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
        session.dispatch(Event::BeginEdit);

        if let Some(question) = &self.args.question {
            session.dispatch(Event::EditField {
                field: QuestionField::Question,
                value: question.clone(),
            });
        }
        for edit in &self.args.answers {
            let outcome = session.dispatch(Event::EditAnswer {
                index: edit.index,
                value: edit.value.clone(),
            });
            if let Outcome::Ignored(IgnoreReason::NoSuchSlot(index)) = outcome {
                ui.error(&format!("Question '{}' has no answer {}", id, index + 1));
                return Ok(CommandResult::failure(1));
            }
        }
        if let Some(correct) = &self.args.correct {
            session.dispatch(Event::EditField {
                field: QuestionField::Correct,
                value: correct.clone(),
            });
        }

        if let Some(selected) = &session.state().selected {
            if !selected.is_answerable() {
                ui.warning(&format!(
                    "Correct answer '{}' is not one of the answers",
                    selected.correct
                ));
            }
        }

        match dispatch_request(&mut session, ui, RequestKind::Update, Event::SubmitEdit) {
            Outcome::Applied => {
                ui.success(&format!("Updated question {}", id));
                Ok(CommandResult::success())
            }
            Outcome::Failed(failure) => {
                ui.error(failure.message());
                Ok(CommandResult::failure(1))
            }
            Outcome::Ignored(reason) => {
                ui.error(&format!("Could not submit question: {}", reason));
                Ok(CommandResult::failure(1))
            }
        }
    }
}

impl Command for EditCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = HttpQuestionStore::from_config(&self.config.endpoint)?;
        self.run_with(store, ui)
    }
}
