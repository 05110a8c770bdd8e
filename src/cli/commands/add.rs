//! Add command implementation.
//!
//! `quizdeck add` fills the create form from flags and submits it.

use crate::cli::args::AddArgs;
use crate::config::QuizConfig;
use crate::error::Result;
use crate::model::QuestionField;
use crate::quiz::{Event, Outcome, QuizSession, RequestKind};
use crate::store::{HttpQuestionStore, QuestionStore};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::dispatch_request;

/// The add command implementation.
pub struct AddCommand {
    config: QuizConfig,
    args: AddArgs,
}

impl AddCommand {
    /// Create a new add command.
    pub fn new(config: &QuizConfig, args: AddArgs) -> Self {
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
        let mut session = QuizSession::new(store);

        session.dispatch(Event::BeginCreate);
        session.dispatch(Event::DraftField {
            field: QuestionField::Question,
            value: self.args.question.clone(),
        });
        for (index, answer) in self.args.answers.iter().enumerate() {
            if index > 0 {
                session.dispatch(Event::AddAnswerSlot);
            }
            session.dispatch(Event::DraftAnswer {
                index,
                value: answer.clone(),
            });
        }
        session.dispatch(Event::DraftField {
            field: QuestionField::Correct,
            value: self.args.correct.clone(),
        });

        if !self.args.answers.contains(&self.args.correct) {
            ui.warning(&format!(
                "Correct answer '{}' is not one of the answers",
                self.args.correct
            ));
        }

        match dispatch_request(&mut session, ui, RequestKind::Create, Event::SubmitCreate) {
            Outcome::Applied => {}
            Outcome::Failed(failure) => {
                ui.error(failure.message());
                return Ok(CommandResult::failure(1));
            }
            Outcome::Ignored(reason) => {
                ui.error(&format!("Could not submit question: {}", reason));
                return Ok(CommandResult::failure(1));
            }
        }

        if let Some(created) = session.state().questions.last() {
            ui.success(&format!("Added question {}", created.id));
        }
        Ok(CommandResult::success())
    }
}

impl Command for AddCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = HttpQuestionStore::from_config(&self.config.endpoint)?;
        self.run_with(store, ui)
    }
}
