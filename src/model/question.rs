//! The question record and its id-less create payload.

use serde::{Deserialize, Deserializer, Serialize};

/// A question record as held by the store.
///
/// `correct` is expected to equal one of `answers`, but nothing enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Store-assigned identifier.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Prompt text.
    pub question: String,
    /// Candidate answers, in display order.
    pub answers: Vec<String>,
    /// The answer counted as correct.
    pub correct: String,
}

/// The body sent when creating a question. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionInput {
    pub question: String,
    pub answers: Vec<String>,
    pub correct: String,
}

/// Text fields of a question that a form can edit directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionField {
    /// The prompt text.
    Question,
    /// The correct answer.
    Correct,
}

impl Question {
    /// The record without its id.
    pub fn input(&self) -> QuestionInput {
        QuestionInput {
            question: self.question.clone(),
            answers: self.answers.clone(),
            correct: self.correct.clone(),
        }
    }

    /// Whether `correct` names one of the candidate answers.
    pub fn is_answerable(&self) -> bool {
        self.answers.iter().any(|a| *a == self.correct)
    }

    /// Overwrite one text field.
    pub fn set_field(&mut self, field: QuestionField, value: String) {
        match field {
            QuestionField::Question => self.question = value,
            QuestionField::Correct => self.correct = value,
        }
    }
}

impl QuestionInput {
    /// The blank draft a create form starts from: one empty answer slot.
    pub fn blank() -> Self {
        Self {
            question: String::new(),
            answers: vec![String::new()],
            correct: String::new(),
        }
    }

    /// Attach a store id, producing a full record.
    pub fn with_id(self, id: impl Into<String>) -> Question {
        Question {
            id: id.into(),
            question: self.question,
            answers: self.answers,
            correct: self.correct,
        }
    }

    /// Overwrite one text field.
    pub fn set_field(&mut self, field: QuestionField, value: String) {
        match field {
            QuestionField::Question => self.question = value,
            QuestionField::Correct => self.correct = value,
        }
    }
}

impl Default for QuestionInput {
    fn default() -> Self {
        Self::blank()
    }
}

/// Ids arrive as strings from most stores, but some emit numbers.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
