//! Question records as exchanged with the question store.

pub mod question;

pub use question::{Question, QuestionField, QuestionInput};
