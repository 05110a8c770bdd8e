//! What the quiz should display, derived from state.

use crate::model::{Question, QuestionInput};

use super::state::{Phase, QuizState, View};

/// One screen's worth of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen<'a> {
    /// No questions to show. An empty collection stays here.
    Loading,
    /// A question being played.
    Question {
        number: usize,
        total: usize,
        prompt: &'a str,
        answers: &'a [String],
    },
    /// The final score.
    Score { score: usize, total: usize },
    /// The create form.
    Create { draft: &'a QuestionInput },
    /// The edit form.
    Edit { question: &'a Question },
}

/// Quiz-view actions besides answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Retry,
    Create,
    Edit,
    Delete,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Retry => "Retry Quiz",
            Self::Create => "Create Question",
            Self::Edit => "Edit Question",
            Self::Delete => "Delete Question",
        }
    }
}

impl Screen<'_> {
    /// Heading line.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Loading | Self::Question { .. } | Self::Score { .. } => "Quiz APP",
            Self::Create { .. } => "Create a New Question",
            Self::Edit { .. } => "Edit Question",
        }
    }

    /// Body text, one entry per line. Answers and form fields are menu items
    /// and are not included.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Loading => vec!["Loading...".to_string()],
            Self::Question {
                number,
                total,
                prompt,
                ..
            } => vec![format!("Question {}/{}", number, total), prompt.to_string()],
            Self::Score { score, total } => {
                vec![format!("You scored {} out of {}", score, total)]
            }
            Self::Create { .. } | Self::Edit { .. } => Vec::new(),
        }
    }
}

impl QuizState {
    /// Screen for the current state.
    pub fn screen(&self) -> Screen<'_> {
        match self.view {
            View::Quiz if self.show_score => Screen::Score {
                score: self.score,
                total: self.total(),
            },
            View::Quiz => match self.current_question() {
                Some(question) => Screen::Question {
                    number: self.current_index.min(self.total() - 1) + 1,
                    total: self.total(),
                    prompt: &question.question,
                    answers: &question.answers,
                },
                None => Screen::Loading,
            },
            View::Create => Screen::Create { draft: &self.draft },
            View::Edit => match &self.selected {
                Some(question) => Screen::Edit { question },
                None => Screen::Loading,
            },
        }
    }

    /// Actions currently on offer in the quiz view.
    pub fn actions(&self) -> Vec<Action> {
        let has_questions = !self.questions.is_empty();
        match self.phase() {
            Phase::Scored => {
                let mut actions = vec![Action::Retry, Action::Create];
                if has_questions {
                    actions.push(Action::Edit);
                }
                actions
            }
            Phase::Playing if has_questions => {
                vec![Action::Create, Action::Edit, Action::Delete]
            }
            Phase::Playing => vec![Action::Create],
            Phase::Create | Phase::Edit => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            question: format!("Prompt {}", id),
            answers: vec!["A".to_string(), "B".to_string()],
            correct: "A".to_string(),
        }
    }

    #[test]
    fn empty_list_shows_loading() {
        let state = QuizState::new();
        assert_eq!(state.screen(), Screen::Loading);
        assert_eq!(state.screen().lines(), vec!["Loading...".to_string()]);
        assert_eq!(state.actions(), vec![Action::Create]);
    }

    #[test]
    fn question_screen_counts_from_one() {
        let mut state = QuizState::with_questions(vec![question("1"), question("2")]);
        state.current_index = 1;
        let screen = state.screen();
        assert_eq!(
            screen.lines(),
            vec!["Question 2/2".to_string(), "Prompt 2".to_string()]
        );
        assert_eq!(screen.title(), "Quiz APP");
    }

    #[test]
    fn question_screen_lists_answers() {
        let state = QuizState::with_questions(vec![question("1")]);
        match state.screen() {
            Screen::Question { answers, .. } => {
                assert_eq!(answers, &["A".to_string(), "B".to_string()]);
            }
            other => panic!("expected question screen, got {:?}", other),
        }
    }

    #[test]
    fn score_screen_text() {
        let mut state = QuizState::with_questions(vec![question("1"), question("2")]);
        state.score = 1;
        state.show_score = true;
        assert_eq!(
            state.screen().lines(),
            vec!["You scored 1 out of 2".to_string()]
        );
        assert_eq!(
            state.actions(),
            vec![Action::Retry, Action::Create, Action::Edit]
        );
    }

    #[test]
    fn playing_offers_edit_and_delete_with_questions() {
        let state = QuizState::with_questions(vec![question("1")]);
        assert_eq!(
            state.actions(),
            vec![Action::Create, Action::Edit, Action::Delete]
        );
    }

    #[test]
    fn forms_have_own_titles_and_no_actions() {
        let mut state = QuizState::with_questions(vec![question("1")]);
        state.view = View::Create;
        assert_eq!(state.screen().title(), "Create a New Question");
        assert!(state.actions().is_empty());

        state.view = View::Edit;
        state.selected = Some(question("1"));
        assert_eq!(state.screen().title(), "Edit Question");
    }
}
