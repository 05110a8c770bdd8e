//! Access to the remote question collection.
//!
//! - [`QuestionStore`] is the contract the state machine's effect layer talks to
//! - [`HttpQuestionStore`] speaks the REST protocol over `reqwest`
//! - [`MockStore`] is an in-memory scripted store for tests

pub mod http;
pub mod mock;

pub use http::HttpQuestionStore;
pub use mock::{MockStore, StoreCall, StoreOp};

use crate::error::Result;
use crate::model::{Question, QuestionInput};

/// A collection of question records addressed by opaque id.
///
/// Every call resolves exactly once, with the store's authoritative record
/// or an error.
pub trait QuestionStore {
    /// Fetch every record in the collection.
    fn list(&mut self) -> Result<Vec<Question>>;

    /// Create a record; the store assigns its id.
    fn create(&mut self, draft: &QuestionInput) -> Result<Question>;

    /// Replace the record with `id` by `record`.
    fn update(&mut self, id: &str, record: &Question) -> Result<Question>;

    /// Remove the record with `id`.
    fn delete(&mut self, id: &str) -> Result<()>;
}

impl<S: QuestionStore + ?Sized> QuestionStore for &mut S {
    fn list(&mut self) -> Result<Vec<Question>> {
        (**self).list()
    }

    fn create(&mut self, draft: &QuestionInput) -> Result<Question> {
        (**self).create(draft)
    }

    fn update(&mut self, id: &str, record: &Question) -> Result<Question> {
        (**self).update(id, record)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        (**self).delete(id)
    }
}
