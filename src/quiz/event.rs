//! Events driving the state machine and the effects it asks for.

use std::fmt;

use crate::error::QuizError;
use crate::model::{Question, QuestionField, QuestionInput};

use super::state::RequestKind;

/// Opaque store failure as seen by the state machine.
///
/// Transport, status and decode failures all collapse into this; only the
/// message survives, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreFailure {
    message: String,
}

impl StoreFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&QuizError> for StoreFailure {
    fn from(err: &QuizError) -> Self {
        Self::new(err.to_string())
    }
}

impl fmt::Display for StoreFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of a store request.
pub type Completion<T> = std::result::Result<T, StoreFailure>;

/// Something that happened: a user action or a store completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Fetch the question list.
    Load,
    /// The list request finished.
    Loaded(Completion<Vec<Question>>),
    /// The player picked an answer.
    Answer(String),
    /// Start over after the score screen.
    Retry,
    /// Move to the question with this id.
    Focus(String),

    /// Open the create form with a blank draft.
    BeginCreate,
    DraftField { field: QuestionField, value: String },
    DraftAnswer { index: usize, value: String },
    AddAnswerSlot,
    RemoveAnswerSlot(usize),
    SubmitCreate,
    /// The create request finished.
    Created(Completion<Question>),

    /// Open the edit form on the current question.
    BeginEdit,
    EditField { field: QuestionField, value: String },
    EditAnswer { index: usize, value: String },
    SubmitEdit,
    /// The update request for `id` finished.
    Updated {
        id: String,
        result: Completion<Question>,
    },

    /// Delete the question being played.
    DeleteCurrent,
    /// The delete request for `id` finished.
    Deleted { id: String, result: Completion<()> },

    /// Leave the create or edit form without saving.
    Cancel,
}

impl Event {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Loaded(_) => "loaded",
            Self::Answer(_) => "answer",
            Self::Retry => "retry",
            Self::Focus(_) => "focus",
            Self::BeginCreate => "begin_create",
            Self::DraftField { .. } => "draft_field",
            Self::DraftAnswer { .. } => "draft_answer",
            Self::AddAnswerSlot => "add_answer_slot",
            Self::RemoveAnswerSlot(_) => "remove_answer_slot",
            Self::SubmitCreate => "submit_create",
            Self::Created(_) => "created",
            Self::BeginEdit => "begin_edit",
            Self::EditField { .. } => "edit_field",
            Self::EditAnswer { .. } => "edit_answer",
            Self::SubmitEdit => "submit_edit",
            Self::Updated { .. } => "updated",
            Self::DeleteCurrent => "delete_current",
            Self::Deleted { .. } => "deleted",
            Self::Cancel => "cancel",
        }
    }

    /// The failure carried by a completion event, if any.
    pub fn failure(&self) -> Option<&StoreFailure> {
        match self {
            Self::Loaded(Err(f)) | Self::Created(Err(f)) => Some(f),
            Self::Updated { result: Err(f), .. } | Self::Deleted { result: Err(f), .. } => Some(f),
            _ => None,
        }
    }
}

/// A store request the state machine wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    List,
    Create(QuestionInput),
    Update { id: String, record: Question },
    Delete { id: String },
}

impl Effect {
    pub fn kind(&self) -> RequestKind {
        match self {
            Self::List => RequestKind::List,
            Self::Create(_) => RequestKind::Create,
            Self::Update { .. } => RequestKind::Update,
            Self::Delete { .. } => RequestKind::Delete,
        }
    }
}
