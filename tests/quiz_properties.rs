//! Property tests for the quiz reducer.

use proptest::prelude::*;
use quizdeck::model::Question;
use quizdeck::quiz::{reduce, Event, Phase, QuizState, Step};

const ANSWERS: [&str; 4] = ["A", "B", "C", "D"];

fn answer() -> impl Strategy<Value = String> {
    prop::sample::select(ANSWERS.to_vec()).prop_map(String::from)
}

fn questions() -> impl Strategy<Value = Vec<Question>> {
    prop::collection::vec(answer(), 1..6).prop_map(|corrects| {
        corrects
            .into_iter()
            .enumerate()
            .map(|(i, correct)| Question {
                id: (i + 1).to_string(),
                question: format!("Question {}", i + 1),
                answers: ANSWERS.iter().map(|a| a.to_string()).collect(),
                correct,
            })
            .collect()
    })
}

fn step(state: &QuizState, event: Event) -> Option<QuizState> {
    match reduce(state, event) {
        Step::Next { state, effect } => {
            assert!(effect.is_none(), "answering never talks to the store");
            Some(state)
        }
        Step::Ignored(_) => None,
    }
}

proptest! {
    #[test]
    fn score_counts_exactly_the_correct_answers(
        questions in questions(),
        picks in prop::collection::vec(answer(), 0..12),
    ) {
        let mut state = QuizState::with_questions(questions);

        for pick in picks {
            let before = state.clone();
            let Some(after) = step(&state, Event::Answer(pick.clone())) else {
                prop_assert_eq!(before.phase(), Phase::Scored);
                continue;
            };
            let expected = match before.current_question() {
                Some(q) if q.correct == pick => before.score + 1,
                _ => before.score,
            };
            prop_assert_eq!(after.score, expected);
            state = after;
        }
    }

    #[test]
    fn index_stays_inside_the_list_while_playing(
        questions in questions(),
        picks in prop::collection::vec(answer(), 0..12),
    ) {
        let mut state = QuizState::with_questions(questions);

        for pick in picks {
            if let Some(next) = step(&state, Event::Answer(pick)) {
                state = next;
            }
            if state.phase() == Phase::Playing {
                prop_assert!(state.current_index < state.total());
            }
        }
    }

    #[test]
    fn retry_resets_the_run(
        questions in questions(),
        picks in prop::collection::vec(answer(), 6..12),
    ) {
        let mut state = QuizState::with_questions(questions);
        for pick in picks {
            if let Some(next) = step(&state, Event::Answer(pick)) {
                state = next;
            }
        }
        prop_assert_eq!(state.phase(), Phase::Scored);

        let retried = step(&state, Event::Retry);
        prop_assert!(retried.is_some());
        let retried = retried.unwrap_or_default();
        prop_assert_eq!(retried.score, 0);
        prop_assert_eq!(retried.current_index, 0);
        prop_assert!(!retried.show_score);
        prop_assert_eq!(retried.phase(), Phase::Playing);
        prop_assert_eq!(retried.questions, state.questions);
    }
}
