//! In-memory question store for testing.
//!
//! `MockStore` behaves like a well-mannered REST collection: it assigns
//! sequential ids, replaces records wholesale on update and answers unknown
//! ids with a 404. Every call is recorded, and any operation can be told to
//! fail.
//!
//! # Example
//!
//! ```
//! use quizdeck::model::QuestionInput;
//! use quizdeck::store::{MockStore, QuestionStore, StoreOp};
//!
//! let mut store = MockStore::new();
//! store.fail_next(StoreOp::Create);
//!
//! assert!(store.create(&QuestionInput::blank()).is_err());
//! assert!(store.create(&QuestionInput::blank()).is_ok());
//! assert_eq!(store.calls().len(), 2);
//! ```

use std::collections::HashSet;

use crate::error::{QuizError, Result};
use crate::model::{Question, QuestionInput};

use super::QuestionStore;

/// The four store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    List,
    Create,
    Update,
    Delete,
}

/// A recorded call, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    List,
    Create(QuestionInput),
    Update { id: String, record: Question },
    Delete { id: String },
}

impl StoreCall {
    /// The operation this call invoked.
    pub fn op(&self) -> StoreOp {
        match self {
            Self::List => StoreOp::List,
            Self::Create(_) => StoreOp::Create,
            Self::Update { .. } => StoreOp::Update,
            Self::Delete { .. } => StoreOp::Delete,
        }
    }
}

/// Scripted in-memory store.
#[derive(Debug)]
pub struct MockStore {
    records: Vec<Question>,
    next_id: u64,
    fail_once: HashSet<StoreOp>,
    fail_always: HashSet<StoreOp>,
    calls: Vec<StoreCall>,
}

impl MockStore {
    /// Create an empty store whose first created record gets id `1`.
    pub fn new() -> Self {
        Self::with_questions(Vec::new())
    }

    /// Create a store pre-populated with `questions`.
    ///
    /// New ids continue after the largest numeric id present.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let next_id = questions
            .iter()
            .filter_map(|q| q.id.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);

        Self {
            records: questions,
            next_id,
            fail_once: HashSet::new(),
            fail_always: HashSet::new(),
            calls: Vec::new(),
        }
    }

    /// Set the id the next created record receives.
    pub fn set_next_id(&mut self, id: u64) {
        self.next_id = id;
    }

    /// Make the next call of `op` fail.
    pub fn fail_next(&mut self, op: StoreOp) {
        self.fail_once.insert(op);
    }

    /// Make every call of `op` fail.
    pub fn fail_always(&mut self, op: StoreOp) {
        self.fail_always.insert(op);
    }

    /// Stop failing `op`.
    pub fn recover(&mut self, op: StoreOp) {
        self.fail_once.remove(&op);
        self.fail_always.remove(&op);
    }

    /// Records currently held.
    pub fn records(&self) -> &[Question] {
        &self.records
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> &[StoreCall] {
        &self.calls
    }

    /// Number of calls made of `op`.
    pub fn call_count(&self, op: StoreOp) -> usize {
        self.calls.iter().filter(|c| c.op() == op).count()
    }

    fn record_call(&mut self, call: StoreCall) -> Result<()> {
        let op = call.op();
        self.calls.push(call);

        if self.fail_always.contains(&op) || self.fail_once.remove(&op) {
            return Err(QuizError::Status {
                status: 500,
                url: "mock://questions".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(id: &str) -> QuizError {
    QuizError::Status {
        status: 404,
        url: format!("mock://questions/{}", id),
    }
}

impl QuestionStore for MockStore {
    fn list(&mut self) -> Result<Vec<Question>> {
        self.record_call(StoreCall::List)?;
        Ok(self.records.clone())
    }

    fn create(&mut self, draft: &QuestionInput) -> Result<Question> {
        self.record_call(StoreCall::Create(draft.clone()))?;
        let question = draft.clone().with_id(self.next_id.to_string());
        self.next_id += 1;
        self.records.push(question.clone());
        Ok(question)
    }

    fn update(&mut self, id: &str, record: &Question) -> Result<Question> {
        self.record_call(StoreCall::Update {
            id: id.to_string(),
            record: record.clone(),
        })?;
        let slot = self
            .records
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| not_found(id))?;
        *slot = record.input().with_id(id);
        Ok(slot.clone())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        self.record_call(StoreCall::Delete { id: id.to_string() })?;
        let before = self.records.len();
        self.records.retain(|q| q.id != id);
        if self.records.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}
