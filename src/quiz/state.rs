//! Client-side quiz state.

use crate::model::{Question, QuestionInput};

/// The three mutually exclusive UI modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Quiz,
    Create,
    Edit,
}

/// Machine state derived from view and score flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Answering questions.
    Playing,
    /// Every question answered; the score is showing.
    Scored,
    /// Composing a new question.
    Create,
    /// Editing an existing question.
    Edit,
}

/// Kind of store request in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    List,
    Create,
    Update,
    Delete,
}

/// Everything the client knows during a session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizState {
    /// Records as last confirmed by the store.
    pub questions: Vec<Question>,
    /// Position of the question being played.
    pub current_index: usize,
    /// Correct answers so far.
    pub score: usize,
    /// Set once the last question has been answered.
    pub show_score: bool,
    pub view: View,
    /// Working copy for the create form.
    pub draft: QuestionInput,
    /// Working copy for the edit form.
    pub selected: Option<Question>,
    /// Request awaiting completion, if any.
    pub pending: Option<RequestKind>,
    /// Message of the most recent store failure.
    pub last_error: Option<String>,
}

impl QuizState {
    /// Fresh state: playing, no questions, blank draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// State already holding `questions`, positioned on the first.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions,
            ..Self::default()
        }
    }

    /// Current phase of the machine.
    pub fn phase(&self) -> Phase {
        match self.view {
            View::Quiz if self.show_score => Phase::Scored,
            View::Quiz => Phase::Playing,
            View::Create => Phase::Create,
            View::Edit => Phase::Edit,
        }
    }

    /// The question at `current_index`, clamped to the list.
    pub fn current_question(&self) -> Option<&Question> {
        let last = self.questions.len().checked_sub(1)?;
        self.questions.get(self.current_index.min(last))
    }

    /// Number of questions held.
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Whether a store request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Pull `current_index` back inside the list.
    pub(crate) fn clamp_index(&mut self) {
        self.current_index = match self.questions.len() {
            0 => 0,
            len => self.current_index.min(len - 1),
        };
    }

    /// Position of the record with `id`.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id == id)
    }
}
