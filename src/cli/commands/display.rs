//! Shared helpers for commands that talk to the question store.

use crate::model::Question;
use crate::quiz::{Event, Outcome, QuizSession, RequestKind};
use crate::store::QuestionStore;
use crate::ui::{QuizTheme, UserInterface};

/// Spinner text while a request of `kind` is in flight.
pub fn request_message(kind: RequestKind) -> &'static str {
    match kind {
        RequestKind::List => "Loading questions...",
        RequestKind::Create => "Saving question...",
        RequestKind::Update => "Updating question...",
        RequestKind::Delete => "Deleting question...",
    }
}

/// Dispatch an event that sends a store request, with a spinner running
/// until it completes.
pub fn dispatch_request<S: QuestionStore>(
    session: &mut QuizSession<S>,
    ui: &mut dyn UserInterface,
    kind: RequestKind,
    event: Event,
) -> Outcome {
    let mut spinner = ui.start_spinner(request_message(kind));
    let outcome = session.dispatch(event);
    match &outcome {
        Outcome::Applied => spinner.finish_success(done_message(kind)),
        Outcome::Failed(failure) => spinner.finish_error(failure.message()),
        Outcome::Ignored(reason) => spinner.finish_skipped(&reason.to_string()),
    }
    outcome
}

fn done_message(kind: RequestKind) -> &'static str {
    match kind {
        RequestKind::List => "Questions loaded",
        RequestKind::Create => "Question added",
        RequestKind::Update => "Question updated",
        RequestKind::Delete => "Question deleted",
    }
}

/// Print one question. Verbose output marks the correct answer.
pub fn show_question(ui: &mut dyn UserInterface, theme: &QuizTheme, question: &Question) {
    ui.message(&format!(
        "  {} {}",
        theme.dim.apply_to(format!("[{}]", question.id)),
        theme.highlight.apply_to(&question.question)
    ));
    if !ui.output_mode().shows_details() {
        return;
    }
    for (i, answer) in question.answers.iter().enumerate() {
        if *answer == question.correct {
            ui.message(&format!("      {}. {}", i + 1, theme.correct.apply_to(answer)));
        } else {
            ui.message(&format!("      {}. {}", i + 1, answer));
        }
    }
    if !question.is_answerable() {
        ui.warning(&format!(
            "      correct answer '{}' is not among the answers",
            question.correct
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MockStore, StoreOp};
    use crate::ui::{MockUI, OutputMode};

    fn question() -> Question {
        Question {
            id: "3".to_string(),
            question: "Capital of France?".to_string(),
            answers: vec!["Lyon".to_string(), "Paris".to_string()],
            correct: "Paris".to_string(),
        }
    }

    #[test]
    fn normal_mode_shows_prompt_only() {
        let mut ui = MockUI::new();
        show_question(&mut ui, &QuizTheme::plain(), &question());
        assert_eq!(ui.messages(), &["  [3] Capital of France?"]);
    }

    #[test]
    fn verbose_mode_lists_answers() {
        let mut ui = MockUI::new();
        ui.set_output_mode(OutputMode::Verbose);
        show_question(&mut ui, &QuizTheme::plain(), &question());
        assert_eq!(ui.messages().len(), 3);
        assert_eq!(ui.messages()[2], "      2. Paris");
    }

    #[test]
    fn verbose_mode_warns_about_unanswerable() {
        let mut ui = MockUI::new();
        ui.set_output_mode(OutputMode::Verbose);
        let mut q = question();
        q.correct = "Marseille".to_string();
        show_question(&mut ui, &QuizTheme::plain(), &q);
        assert!(ui.has_warning("not among the answers"));
    }

    #[test]
    fn request_spinner_reports_failure() {
        let mut store = MockStore::new();
        store.fail_next(StoreOp::List);
        let mut session = QuizSession::new(store);
        let mut ui = MockUI::new();

        let outcome = dispatch_request(&mut session, &mut ui, RequestKind::List, Event::Load);

        assert!(matches!(outcome, Outcome::Failed(_)));
        assert_eq!(ui.spinners(), &["Loading questions..."]);
    }
}
