//! Pure transition function of the quiz/editor state machine.
//!
//! [`reduce`] never touches the network. User actions that need the store
//! return an [`Effect`]; the effect's outcome comes back later as a
//! completion event. An event that is not valid in the current phase is
//! [`Step::Ignored`] and leaves the state exactly as it was.

use std::fmt;

use crate::model::QuestionInput;

use super::event::{Effect, Event};
use super::state::{Phase, QuizState, RequestKind, View};

/// Why an event was not applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The event is not valid in this phase.
    WrongPhase(Phase),
    /// The event needs at least one question.
    NoQuestions,
    /// A request is already in flight.
    Busy,
    /// No answer slot at this index.
    NoSuchSlot(usize),
    /// The draft must keep at least one answer slot.
    LastAnswerSlot,
    /// No question with this id.
    UnknownQuestion(String),
    /// Edit view without a selected question.
    NothingSelected,
    /// A completion arrived for a request that is not pending.
    UnexpectedCompletion,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongPhase(phase) => write!(f, "not available while {:?}", phase),
            Self::NoQuestions => write!(f, "there are no questions"),
            Self::Busy => write!(f, "a request is still in flight"),
            Self::NoSuchSlot(index) => write!(f, "no answer #{}", index + 1),
            Self::LastAnswerSlot => write!(f, "a question needs at least one answer"),
            Self::UnknownQuestion(id) => write!(f, "no question with id '{}'", id),
            Self::NothingSelected => write!(f, "no question selected"),
            Self::UnexpectedCompletion => write!(f, "no matching request in flight"),
        }
    }
}

/// Result of reducing one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The event applied; run `effect` if present.
    Next {
        state: QuizState,
        effect: Option<Effect>,
    },
    /// The event did not apply.
    Ignored(IgnoreReason),
}

impl Step {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }

    pub fn effect(&self) -> Option<&Effect> {
        match self {
            Self::Next { effect, .. } => effect.as_ref(),
            Self::Ignored(_) => None,
        }
    }
}

/// Compute the state following `event`.
pub fn reduce(state: &QuizState, event: Event) -> Step {
    let mut next = state.clone();
    match apply(&mut next, event) {
        Ok(effect) => Step::Next {
            state: next,
            effect,
        },
        Err(reason) => Step::Ignored(reason),
    }
}

type Applied = Result<Option<Effect>, IgnoreReason>;

fn apply(state: &mut QuizState, event: Event) -> Applied {
    match event {
        Event::Load => {
            idle(state)?;
            state.pending = Some(RequestKind::List);
            Ok(Some(Effect::List))
        }
        Event::Loaded(result) => {
            settle(state, RequestKind::List)?;
            match result {
                Ok(questions) => {
                    state.questions = questions;
                    state.current_index = 0;
                    state.last_error = None;
                }
                Err(failure) => state.last_error = Some(failure.to_string()),
            }
            Ok(None)
        }

        Event::Answer(selected) => {
            require(state, &[Phase::Playing])?;
            non_empty(state)?;
            state.clamp_index();
            if state.questions[state.current_index].correct == selected {
                state.score += 1;
            }
            let next = state.current_index + 1;
            if next < state.questions.len() {
                state.current_index = next;
            } else {
                state.show_score = true;
            }
            Ok(None)
        }
        Event::Retry => {
            require(state, &[Phase::Scored])?;
            state.score = 0;
            state.current_index = 0;
            state.show_score = false;
            state.view = View::Quiz;
            Ok(None)
        }
        Event::Focus(id) => {
            require(state, &[Phase::Playing, Phase::Scored])?;
            let index = state
                .position_of(&id)
                .ok_or(IgnoreReason::UnknownQuestion(id))?;
            state.current_index = index;
            Ok(None)
        }

        Event::BeginCreate => {
            require(state, &[Phase::Playing, Phase::Scored])?;
            state.draft = QuestionInput::blank();
            state.view = View::Create;
            state.last_error = None;
            Ok(None)
        }
        Event::DraftField { field, value } => {
            require(state, &[Phase::Create])?;
            state.draft.set_field(field, value);
            Ok(None)
        }
        Event::DraftAnswer { index, value } => {
            require(state, &[Phase::Create])?;
            let slot = state
                .draft
                .answers
                .get_mut(index)
                .ok_or(IgnoreReason::NoSuchSlot(index))?;
            *slot = value;
            Ok(None)
        }
        Event::AddAnswerSlot => {
            require(state, &[Phase::Create])?;
            state.draft.answers.push(String::new());
            Ok(None)
        }
        Event::RemoveAnswerSlot(index) => {
            require(state, &[Phase::Create])?;
            if index >= state.draft.answers.len() {
                return Err(IgnoreReason::NoSuchSlot(index));
            }
            if state.draft.answers.len() == 1 {
                return Err(IgnoreReason::LastAnswerSlot);
            }
            state.draft.answers.remove(index);
            Ok(None)
        }
        Event::SubmitCreate => {
            require(state, &[Phase::Create])?;
            idle(state)?;
            state.pending = Some(RequestKind::Create);
            Ok(Some(Effect::Create(state.draft.clone())))
        }
        Event::Created(result) => {
            settle(state, RequestKind::Create)?;
            match result {
                Ok(question) => {
                    state.questions.push(question);
                    state.draft = QuestionInput::blank();
                    state.view = View::Quiz;
                    state.last_error = None;
                }
                // Draft is kept so the user can resubmit.
                Err(failure) => state.last_error = Some(failure.to_string()),
            }
            Ok(None)
        }

        Event::BeginEdit => {
            require(state, &[Phase::Playing, Phase::Scored])?;
            non_empty(state)?;
            state.clamp_index();
            state.selected = Some(state.questions[state.current_index].clone());
            state.view = View::Edit;
            state.last_error = None;
            Ok(None)
        }
        Event::EditField { field, value } => {
            require(state, &[Phase::Edit])?;
            let selected = state
                .selected
                .as_mut()
                .ok_or(IgnoreReason::NothingSelected)?;
            selected.set_field(field, value);
            Ok(None)
        }
        Event::EditAnswer { index, value } => {
            require(state, &[Phase::Edit])?;
            let selected = state
                .selected
                .as_mut()
                .ok_or(IgnoreReason::NothingSelected)?;
            let slot = selected
                .answers
                .get_mut(index)
                .ok_or(IgnoreReason::NoSuchSlot(index))?;
            *slot = value;
            Ok(None)
        }
        Event::SubmitEdit => {
            require(state, &[Phase::Edit])?;
            idle(state)?;
            let record = state
                .selected
                .clone()
                .ok_or(IgnoreReason::NothingSelected)?;
            state.pending = Some(RequestKind::Update);
            Ok(Some(Effect::Update {
                id: record.id.clone(),
                record,
            }))
        }
        Event::Updated { id, result } => {
            settle(state, RequestKind::Update)?;
            match result {
                Ok(updated) => {
                    for question in state.questions.iter_mut().filter(|q| q.id == id) {
                        *question = updated.clone();
                    }
                    state.selected = None;
                    state.view = View::Quiz;
                    state.last_error = None;
                }
                Err(failure) => state.last_error = Some(failure.to_string()),
            }
            Ok(None)
        }

        Event::DeleteCurrent => {
            require(state, &[Phase::Playing])?;
            non_empty(state)?;
            idle(state)?;
            state.clamp_index();
            let id = state.questions[state.current_index].id.clone();
            state.pending = Some(RequestKind::Delete);
            Ok(Some(Effect::Delete { id }))
        }
        Event::Deleted { id, result } => {
            settle(state, RequestKind::Delete)?;
            match result {
                Ok(()) => {
                    state.questions.retain(|q| q.id != id);
                    // Back to the first question rather than the neighbour.
                    state.current_index = 0;
                    state.last_error = None;
                }
                Err(failure) => state.last_error = Some(failure.to_string()),
            }
            Ok(None)
        }

        Event::Cancel => {
            require(state, &[Phase::Create, Phase::Edit])?;
            state.draft = QuestionInput::blank();
            state.selected = None;
            state.view = View::Quiz;
            state.last_error = None;
            Ok(None)
        }
    }
}

fn require(state: &QuizState, allowed: &[Phase]) -> Result<(), IgnoreReason> {
    let phase = state.phase();
    if allowed.contains(&phase) {
        Ok(())
    } else {
        Err(IgnoreReason::WrongPhase(phase))
    }
}

fn non_empty(state: &QuizState) -> Result<(), IgnoreReason> {
    if state.questions.is_empty() {
        Err(IgnoreReason::NoQuestions)
    } else {
        Ok(())
    }
}

fn idle(state: &QuizState) -> Result<(), IgnoreReason> {
    if state.is_busy() {
        Err(IgnoreReason::Busy)
    } else {
        Ok(())
    }
}

/// Clear the pending request, which must be of `kind`.
fn settle(state: &mut QuizState, kind: RequestKind) -> Result<(), IgnoreReason> {
    if state.pending != Some(kind) {
        return Err(IgnoreReason::UnexpectedCompletion);
    }
    state.pending = None;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, QuestionField};
    use crate::quiz::event::StoreFailure;

    fn question(id: &str, answers: &[&str], correct: &str) -> Question {
        Question {
            id: id.to_string(),
            question: format!("Question {}", id),
            answers: answers.iter().map(|a| a.to_string()).collect(),
            correct: correct.to_string(),
        }
    }

    fn three() -> QuizState {
        QuizState::with_questions(vec![
            question("1", &["A", "B"], "A"),
            question("2", &["C", "D"], "D"),
            question("3", &["E"], "E"),
        ])
    }

    /// Apply an event that must not be ignored.
    fn step(state: &QuizState, event: Event) -> (QuizState, Option<Effect>) {
        match reduce(state, event) {
            Step::Next { state, effect } => (state, effect),
            Step::Ignored(reason) => panic!("event ignored: {}", reason),
        }
    }

    fn next(state: &QuizState, event: Event) -> QuizState {
        step(state, event).0
    }

    fn ignored(state: &QuizState, event: Event) -> IgnoreReason {
        match reduce(state, event) {
            Step::Ignored(reason) => reason,
            Step::Next { .. } => panic!("event unexpectedly applied"),
        }
    }

    fn failure() -> StoreFailure {
        StoreFailure::new("HTTP 500 from mock://questions")
    }

    #[test]
    fn load_requests_list_and_marks_pending() {
        let (state, effect) = step(&QuizState::new(), Event::Load);
        assert_eq!(effect, Some(Effect::List));
        assert_eq!(state.pending, Some(RequestKind::List));
    }

    #[test]
    fn loaded_replaces_questions_at_first_index() {
        let pending = next(&QuizState::new(), Event::Load);
        let state = next(&pending, Event::Loaded(Ok(three().questions)));
        assert_eq!(state.total(), 3);
        assert_eq!(state.current_index, 0);
        assert!(!state.is_busy());
    }

    #[test]
    fn failed_load_leaves_list_empty() {
        let pending = next(&QuizState::new(), Event::Load);
        let state = next(&pending, Event::Loaded(Err(failure())));
        assert!(state.questions.is_empty());
        assert_eq!(state.phase(), Phase::Playing);
        assert!(state.last_error.is_some());
    }

    #[test]
    fn completion_without_request_is_ignored() {
        assert_eq!(
            ignored(&QuizState::new(), Event::Loaded(Ok(Vec::new()))),
            IgnoreReason::UnexpectedCompletion
        );
    }

    #[test]
    fn correct_answer_scores_and_advances() {
        let state = next(&three(), Event::Answer("A".into()));
        assert_eq!(state.score, 1);
        assert_eq!(state.current_index, 1);
        assert!(!state.show_score);
    }

    #[test]
    fn wrong_answer_advances_without_score() {
        let state = next(&three(), Event::Answer("B".into()));
        assert_eq!(state.score, 0);
        assert_eq!(state.current_index, 1);
    }

    #[test]
    fn answer_matching_is_case_sensitive() {
        let state = next(&three(), Event::Answer("a".into()));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn last_answer_shows_score_without_advancing() {
        let mut state = three();
        for answer in ["A", "C", "E"] {
            state = next(&state, Event::Answer(answer.into()));
        }
        assert_eq!(state.score, 2);
        assert!(state.show_score);
        assert_eq!(state.phase(), Phase::Scored);
        assert_eq!(state.current_index, 2);
    }

    #[test]
    fn single_question_scenario() {
        let state = QuizState::with_questions(vec![question("1", &["A", "B"], "A")]);
        let state = next(&state, Event::Answer("A".into()));
        assert_eq!(state.score, 1);
        assert!(state.show_score);
    }

    #[test]
    fn answer_needs_questions() {
        assert_eq!(
            ignored(&QuizState::new(), Event::Answer("A".into())),
            IgnoreReason::NoQuestions
        );
    }

    #[test]
    fn answer_after_score_is_ignored() {
        let mut state = three();
        state.show_score = true;
        assert_eq!(
            ignored(&state, Event::Answer("A".into())),
            IgnoreReason::WrongPhase(Phase::Scored)
        );
    }

    #[test]
    fn answer_clamps_stale_index() {
        let mut state = three();
        state.current_index = 10;
        let state = next(&state, Event::Answer("E".into()));
        assert_eq!(state.score, 1);
        assert!(state.show_score);
    }

    #[test]
    fn retry_resets_everything() {
        let mut state = three();
        state.score = 2;
        state.current_index = 2;
        state.show_score = true;
        let state = next(&state, Event::Retry);
        assert_eq!(state.score, 0);
        assert_eq!(state.current_index, 0);
        assert!(!state.show_score);
        assert_eq!(state.phase(), Phase::Playing);
    }

    #[test]
    fn retry_only_when_scored() {
        assert_eq!(
            ignored(&three(), Event::Retry),
            IgnoreReason::WrongPhase(Phase::Playing)
        );
    }

    #[test]
    fn focus_moves_to_question_by_id() {
        let state = next(&three(), Event::Focus("3".into()));
        assert_eq!(state.current_index, 2);
        assert_eq!(
            ignored(&three(), Event::Focus("9".into())),
            IgnoreReason::UnknownQuestion("9".into())
        );
    }

    #[test]
    fn begin_create_resets_draft() {
        let mut state = three();
        state.draft.question = "leftover".into();
        let state = next(&state, Event::BeginCreate);
        assert_eq!(state.view, View::Create);
        assert_eq!(state.draft, QuestionInput::blank());
    }

    #[test]
    fn create_form_edits_draft() {
        let mut state = next(&QuizState::new(), Event::BeginCreate);
        state = next(
            &state,
            Event::DraftField {
                field: QuestionField::Question,
                value: "Q".into(),
            },
        );
        state = next(
            &state,
            Event::DraftAnswer {
                index: 0,
                value: "A".into(),
            },
        );
        state = next(&state, Event::AddAnswerSlot);
        state = next(
            &state,
            Event::DraftAnswer {
                index: 1,
                value: "B".into(),
            },
        );
        state = next(
            &state,
            Event::DraftField {
                field: QuestionField::Correct,
                value: "A".into(),
            },
        );

        assert_eq!(
            state.draft,
            QuestionInput {
                question: "Q".into(),
                answers: vec!["A".into(), "B".into()],
                correct: "A".into(),
            }
        );
    }

    #[test]
    fn remove_answer_slot_by_index() {
        let mut state = next(&QuizState::new(), Event::BeginCreate);
        state.draft.answers = vec!["A".into(), "B".into(), "C".into()];
        let state = next(&state, Event::RemoveAnswerSlot(1));
        assert_eq!(state.draft.answers, vec!["A".to_string(), "C".to_string()]);
    }

    #[test]
    fn draft_keeps_last_answer_slot() {
        let state = next(&QuizState::new(), Event::BeginCreate);
        assert_eq!(
            ignored(&state, Event::RemoveAnswerSlot(0)),
            IgnoreReason::LastAnswerSlot
        );
        assert_eq!(
            ignored(&state, Event::RemoveAnswerSlot(4)),
            IgnoreReason::NoSuchSlot(4)
        );
    }

    #[test]
    fn slot_events_only_in_create() {
        assert_eq!(
            ignored(&three(), Event::AddAnswerSlot),
            IgnoreReason::WrongPhase(Phase::Playing)
        );
    }

    #[test]
    fn submit_create_sends_draft() {
        let mut state = next(&QuizState::new(), Event::BeginCreate);
        state.draft.question = "Q".into();
        let (state, effect) = step(&state, Event::SubmitCreate);
        assert_eq!(effect, Some(Effect::Create(state.draft.clone())));
        assert_eq!(state.pending, Some(RequestKind::Create));
        assert_eq!(ignored(&state, Event::SubmitCreate), IgnoreReason::Busy);
    }

    #[test]
    fn created_appends_store_record() {
        let created = question("42", &["A", "B"], "A");
        let state = next(&three(), Event::BeginCreate);
        let state = next(&state, Event::SubmitCreate);
        let state = next(&state, Event::Created(Ok(created.clone())));

        assert_eq!(state.questions.last(), Some(&created));
        assert_eq!(state.total(), 4);
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.draft, QuestionInput::blank());
    }

    #[test]
    fn failed_create_keeps_draft_and_view() {
        let mut state = next(&three(), Event::BeginCreate);
        state.draft.question = "Unsaved".into();
        let state = next(&state, Event::SubmitCreate);
        let state = next(&state, Event::Created(Err(failure())));

        assert_eq!(state.view, View::Create);
        assert_eq!(state.draft.question, "Unsaved");
        assert_eq!(state.total(), 3);
        assert!(!state.is_busy());
        assert!(state.last_error.is_some());
    }

    #[test]
    fn begin_edit_copies_current_question() {
        let mut state = three();
        state.current_index = 1;
        let state = next(&state, Event::BeginEdit);
        assert_eq!(state.view, View::Edit);
        assert_eq!(state.selected.as_ref().map(|q| q.id.as_str()), Some("2"));
    }

    #[test]
    fn begin_edit_needs_questions() {
        assert_eq!(
            ignored(&QuizState::new(), Event::BeginEdit),
            IgnoreReason::NoQuestions
        );
    }

    #[test]
    fn edit_changes_only_working_copy() {
        let state = next(&three(), Event::BeginEdit);
        let state = next(
            &state,
            Event::EditField {
                field: QuestionField::Question,
                value: "Changed".into(),
            },
        );
        let state = next(
            &state,
            Event::EditAnswer {
                index: 1,
                value: "Z".into(),
            },
        );

        let selected = state.selected.as_ref().unwrap();
        assert_eq!(selected.question, "Changed");
        assert_eq!(selected.answers, vec!["A".to_string(), "Z".to_string()]);
        assert_eq!(state.questions[0].question, "Question 1");
    }

    #[test]
    fn edit_answer_out_of_range_is_ignored() {
        let state = next(&three(), Event::BeginEdit);
        assert_eq!(
            ignored(
                &state,
                Event::EditAnswer {
                    index: 2,
                    value: "X".into()
                }
            ),
            IgnoreReason::NoSuchSlot(2)
        );
    }

    #[test]
    fn submit_edit_sends_full_record() {
        let mut state = three();
        state.current_index = 1;
        let state = next(&state, Event::BeginEdit);
        let (_, effect) = step(&state, Event::SubmitEdit);
        assert_eq!(
            effect,
            Some(Effect::Update {
                id: "2".into(),
                record: question("2", &["C", "D"], "D"),
            })
        );
    }

    #[test]
    fn updated_replaces_by_id() {
        let state = QuizState::with_questions(vec![
            question("1", &["A"], "A"),
            question("2", &["B"], "B"),
        ]);
        let original_first = state.questions[0].clone();
        let state = next(&state, Event::Focus("2".into()));
        let state = next(&state, Event::BeginEdit);
        let state = next(&state, Event::SubmitEdit);
        let updated = question("2", &["X"], "X");
        let state = next(
            &state,
            Event::Updated {
                id: "2".into(),
                result: Ok(Question {
                    question: "New".into(),
                    ..updated
                }),
            },
        );

        assert_eq!(state.questions[0], original_first);
        assert_eq!(state.questions[1].question, "New");
        assert_eq!(state.questions[1].answers, vec!["X".to_string()]);
        assert_eq!(state.phase(), Phase::Playing);
        assert!(state.selected.is_none());
    }

    #[test]
    fn failed_update_stays_in_edit() {
        let state = next(&three(), Event::BeginEdit);
        let state = next(&state, Event::SubmitEdit);
        let state = next(
            &state,
            Event::Updated {
                id: "1".into(),
                result: Err(failure()),
            },
        );
        assert_eq!(state.view, View::Edit);
        assert!(state.selected.is_some());
        assert_eq!(state.questions, three().questions);
    }

    #[test]
    fn delete_current_targets_current_id() {
        let mut state = three();
        state.current_index = 2;
        let (state, effect) = step(&state, Event::DeleteCurrent);
        assert_eq!(effect, Some(Effect::Delete { id: "3".into() }));
        assert_eq!(ignored(&state, Event::DeleteCurrent), IgnoreReason::Busy);
    }

    #[test]
    fn deleted_removes_one_and_rewinds() {
        let mut state = three();
        state.current_index = 1;
        let state = next(&state, Event::DeleteCurrent);
        let state = next(
            &state,
            Event::Deleted {
                id: "2".into(),
                result: Ok(()),
            },
        );
        assert_eq!(state.total(), 2);
        assert!(state.position_of("2").is_none());
        assert_eq!(state.current_index, 0);
    }

    #[test]
    fn failed_delete_changes_nothing_but_error() {
        let state = three();
        let pending = next(&state, Event::DeleteCurrent);
        let after = next(
            &pending,
            Event::Deleted {
                id: "1".into(),
                result: Err(failure()),
            },
        );
        assert_eq!(after.questions, state.questions);
        assert_eq!(after.current_index, state.current_index);
        assert!(after.last_error.is_some());
    }

    #[test]
    fn deleting_questions_keeps_the_score() {
        let state = next(&three(), Event::Answer("A".into()));
        assert_eq!(state.score, 1);

        let mut state = state;
        for _ in 0..3 {
            let id = state.questions[0].id.clone();
            state = next(&state, Event::Focus(id.clone()));
            state = next(&state, Event::DeleteCurrent);
            state = next(&state, Event::Deleted { id, result: Ok(()) });
        }

        assert_eq!(state.total(), 0);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn delete_not_offered_after_score() {
        let mut state = three();
        state.show_score = true;
        assert_eq!(
            ignored(&state, Event::DeleteCurrent),
            IgnoreReason::WrongPhase(Phase::Scored)
        );
    }

    #[test]
    fn cancel_discards_working_copies() {
        let state = next(&three(), Event::BeginEdit);
        let state = next(&state, Event::Cancel);
        assert_eq!(state.view, View::Quiz);
        assert!(state.selected.is_none());

        let mut state = next(&state, Event::BeginCreate);
        state.draft.question = "gone".into();
        let state = next(&state, Event::Cancel);
        assert_eq!(state.draft, QuestionInput::blank());
    }

    #[test]
    fn cancel_only_from_forms() {
        assert_eq!(
            ignored(&three(), Event::Cancel),
            IgnoreReason::WrongPhase(Phase::Playing)
        );
    }

    #[test]
    fn ignored_events_return_no_effect() {
        let step = reduce(&QuizState::new(), Event::DeleteCurrent);
        assert!(step.is_ignored());
        assert!(step.effect().is_none());
    }
}
