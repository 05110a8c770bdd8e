//! Play command implementation.
//!
//! `quizdeck play` (the default) runs the quiz and its create/edit forms as a
//! menu loop: every screen ends in a select prompt whose choice becomes an
//! [`Event`].

use crate::config::QuizConfig;
use crate::error::Result;
use crate::model::QuestionField;
use crate::quiz::{Action, Event, Outcome, Phase, QuizSession, RequestKind, Screen};
use crate::store::{HttpQuestionStore, QuestionStore};
use crate::ui::{Prompt, PromptOption, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::display::dispatch_request;

/// One menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Answer(usize),
    Action(Action),
    Reload,
    Quit,
    DraftQuestion,
    DraftAnswer(usize),
    DraftCorrect,
    AddSlot,
    RemoveSlot(usize),
    EditQuestion,
    EditAnswer(usize),
    EditCorrect,
    Submit,
    Cancel,
}

impl Choice {
    /// Stable value carried by the prompt option.
    pub fn value(&self) -> String {
        match self {
            Self::Answer(i) => format!("answer:{}", i),
            Self::Action(Action::Retry) => "retry".to_string(),
            Self::Action(Action::Create) => "create".to_string(),
            Self::Action(Action::Edit) => "edit".to_string(),
            Self::Action(Action::Delete) => "delete".to_string(),
            Self::Reload => "reload".to_string(),
            Self::Quit => "quit".to_string(),
            Self::DraftQuestion => "draft:question".to_string(),
            Self::DraftAnswer(i) => format!("draft:answer:{}", i),
            Self::DraftCorrect => "draft:correct".to_string(),
            Self::AddSlot => "draft:add".to_string(),
            Self::RemoveSlot(i) => format!("draft:remove:{}", i),
            Self::EditQuestion => "edit:question".to_string(),
            Self::EditAnswer(i) => format!("edit:answer:{}", i),
            Self::EditCorrect => "edit:correct".to_string(),
            Self::Submit => "submit".to_string(),
            Self::Cancel => "cancel".to_string(),
        }
    }

    /// Inverse of [`value`](Self::value).
    pub fn parse(value: &str) -> Option<Self> {
        let indexed = |prefix: &str| -> Option<usize> { value.strip_prefix(prefix)?.parse().ok() };

        Some(match value {
            "retry" => Self::Action(Action::Retry),
            "create" => Self::Action(Action::Create),
            "edit" => Self::Action(Action::Edit),
            "delete" => Self::Action(Action::Delete),
            "reload" => Self::Reload,
            "quit" => Self::Quit,
            "draft:question" => Self::DraftQuestion,
            "draft:correct" => Self::DraftCorrect,
            "draft:add" => Self::AddSlot,
            "edit:question" => Self::EditQuestion,
            "edit:correct" => Self::EditCorrect,
            "submit" => Self::Submit,
            "cancel" => Self::Cancel,
            _ => {
                if let Some(i) = indexed("answer:") {
                    Self::Answer(i)
                } else if let Some(i) = indexed("draft:answer:") {
                    Self::DraftAnswer(i)
                } else if let Some(i) = indexed("draft:remove:") {
                    Self::RemoveSlot(i)
                } else if let Some(i) = indexed("edit:answer:") {
                    Self::EditAnswer(i)
                } else {
                    return None;
                }
            }
        })
    }
}

/// Menu entries for `screen`, in display order.
pub fn menu(screen: &Screen<'_>, actions: &[Action]) -> Vec<PromptOption> {
    let option = |label: String, choice: Choice| PromptOption::new(label, choice.value());
    let mut options = Vec::new();

    match screen {
        Screen::Loading => {
            options.push(option("Reload Questions".to_string(), Choice::Reload));
        }
        Screen::Question { answers, .. } => {
            for (i, answer) in answers.iter().enumerate() {
                options.push(option(answer.clone(), Choice::Answer(i)));
            }
        }
        Screen::Score { .. } => {}
        Screen::Create { draft } => {
            options.push(option(
                format!("Question: {}", draft.question),
                Choice::DraftQuestion,
            ));
            for (i, answer) in draft.answers.iter().enumerate() {
                options.push(option(
                    format!("Answer {}: {}", i + 1, answer),
                    Choice::DraftAnswer(i),
                ));
            }
            options.push(option("Add Answer".to_string(), Choice::AddSlot));
            if draft.answers.len() > 1 {
                for i in 0..draft.answers.len() {
                    options.push(option(format!("Remove Answer {}", i + 1), Choice::RemoveSlot(i)));
                }
            }
            options.push(option(
                format!("Correct Answer: {}", draft.correct),
                Choice::DraftCorrect,
            ));
            options.push(option("Create Question".to_string(), Choice::Submit));
            options.push(option("Cancel".to_string(), Choice::Cancel));
            return options;
        }
        Screen::Edit { question } => {
            options.push(option(
                format!("Question: {}", question.question),
                Choice::EditQuestion,
            ));
            for (i, answer) in question.answers.iter().enumerate() {
                options.push(option(
                    format!("Answer {}: {}", i + 1, answer),
                    Choice::EditAnswer(i),
                ));
            }
            options.push(option(
                format!("Correct Answer: {}", question.correct),
                Choice::EditCorrect,
            ));
            options.push(option("Update Question".to_string(), Choice::Submit));
            options.push(option("Cancel".to_string(), Choice::Cancel));
            return options;
        }
    }

    for action in actions {
        options.push(option(action.label().to_string(), Choice::Action(*action)));
    }
    options.push(option("Quit".to_string(), Choice::Quit));
    options
}

/// The play command implementation.
pub struct PlayCommand {
    config: QuizConfig,
}

impl PlayCommand {
    /// Create a new play command.
    pub fn new(config: &QuizConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl Command for PlayCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !ui.is_interactive() {
            ui.error("Playing needs an interactive terminal. Try 'quizdeck list' instead.");
            return Ok(CommandResult::failure(1));
        }
        let store = HttpQuestionStore::from_config(&self.config.endpoint)?;
        let mut session = QuizSession::new(store);
        run_loop(&mut session, ui)
    }
}

/// Load the questions and run the menu loop until the user quits.
pub fn run_loop<S: QuestionStore>(
    session: &mut QuizSession<S>,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    request(session, ui, RequestKind::List, Event::Load);

    loop {
        let options = {
            let screen = session.screen();
            ui.show_header(screen.title());
            for line in screen.lines() {
                ui.message(&line);
            }
            menu(&screen, &session.state().actions())
        };

        let picked = ui
            .prompt(&Prompt::select("action", "Choose", options))?
            .as_string();
        let Some(choice) = Choice::parse(&picked) else {
            ui.warning(&format!("Unknown choice '{}'", picked));
            continue;
        };
        if choice == Choice::Quit {
            return Ok(CommandResult::success());
        }
        apply_choice(session, ui, choice)?;
    }
}

fn apply_choice<S: QuestionStore>(
    session: &mut QuizSession<S>,
    ui: &mut dyn UserInterface,
    choice: Choice,
) -> Result<()> {
    let event = match choice {
        Choice::Answer(i) => {
            let Screen::Question { answers, .. } = session.screen() else {
                return Ok(());
            };
            let Some(answer) = answers.get(i) else {
                return Ok(());
            };
            Event::Answer(answer.clone())
        }
        Choice::Action(Action::Retry) => Event::Retry,
        Choice::Action(Action::Create) => Event::BeginCreate,
        Choice::Action(Action::Edit) => Event::BeginEdit,
        Choice::Action(Action::Delete) => {
            let Some(current) = session.state().current_question() else {
                return Ok(());
            };
            let question = format!("Delete \"{}\"?", current.question);
            let confirmed = ui
                .prompt(&Prompt::confirm("confirm-delete", &question, false))?
                .as_bool()
                .unwrap_or(false);
            if confirmed {
                request(session, ui, RequestKind::Delete, Event::DeleteCurrent);
            }
            return Ok(());
        }
        Choice::Reload => {
            request(session, ui, RequestKind::List, Event::Load);
            return Ok(());
        }
        Choice::Quit => return Ok(()),

        Choice::DraftQuestion => Event::DraftField {
            field: QuestionField::Question,
            value: ask(ui, "Question", &session.state().draft.question)?,
        },
        Choice::DraftCorrect => Event::DraftField {
            field: QuestionField::Correct,
            value: ask(ui, "Correct Answer", &session.state().draft.correct)?,
        },
        Choice::DraftAnswer(index) => {
            let current = session.state().draft.answers.get(index).cloned();
            Event::DraftAnswer {
                index,
                value: ask(ui, &format!("Answer {}", index + 1), &current.unwrap_or_default())?,
            }
        }
        Choice::AddSlot => Event::AddAnswerSlot,
        Choice::RemoveSlot(index) => Event::RemoveAnswerSlot(index),

        Choice::EditQuestion | Choice::EditCorrect | Choice::EditAnswer(_) => {
            let Some(selected) = session.state().selected.clone() else {
                return Ok(());
            };
            match choice {
                Choice::EditQuestion => Event::EditField {
                    field: QuestionField::Question,
                    value: ask(ui, "Question", &selected.question)?,
                },
                Choice::EditCorrect => Event::EditField {
                    field: QuestionField::Correct,
                    value: ask(ui, "Correct Answer", &selected.correct)?,
                },
                Choice::EditAnswer(index) => {
                    let current = selected.answers.get(index).cloned().unwrap_or_default();
                    Event::EditAnswer {
                        index,
                        value: ask(ui, &format!("Answer {}", index + 1), &current)?,
                    }
                }
                _ => return Ok(()),
            }
        }

        Choice::Submit => {
            let (kind, event) = if session.state().phase() == Phase::Edit {
                (RequestKind::Update, Event::SubmitEdit)
            } else {
                (RequestKind::Create, Event::SubmitCreate)
            };
            request(session, ui, kind, event);
            return Ok(());
        }
        Choice::Cancel => Event::Cancel,
    };

    if let Outcome::Ignored(reason) = session.dispatch(event) {
        ui.warning(&reason.to_string());
    }
    Ok(())
}

/// Send a store request; failures are shown and the loop carries on.
fn request<S: QuestionStore>(
    session: &mut QuizSession<S>,
    ui: &mut dyn UserInterface,
    kind: RequestKind,
    event: Event,
) {
    match dispatch_request(session, ui, kind, event) {
        Outcome::Applied => {}
        Outcome::Failed(failure) => ui.warning(failure.message()),
        Outcome::Ignored(reason) => ui.warning(&reason.to_string()),
    }
}

fn ask(ui: &mut dyn UserInterface, label: &str, current: &str) -> Result<String> {
    let default = (!current.is_empty()).then_some(current);
    Ok(ui.prompt(&Prompt::input("text", label, default))?.as_string())
}
