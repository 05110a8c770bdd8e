//! The quiz/editor state machine.
//!
//! The machine is split the way the data flows:
//!
//! - [`state`] holds everything the client knows ([`QuizState`])
//! - [`event`] names what can happen ([`Event`]) and what the store must do
//!   in response ([`Effect`])
//! - [`reducer`] is the pure transition function [`reduce`]
//! - [`session`] runs effects against a [`QuestionStore`] and feeds the
//!   completions back in
//! - [`screen`] derives what should be on screen from the state
//!
//! # Example
//!
//! ```
//! use quizdeck::model::Question;
//! use quizdeck::quiz::{Event, Phase, QuizSession};
//! use quizdeck::store::MockStore;
//!
//! let store = MockStore::with_questions(vec![Question {
//!     id: "1".to_string(),
//!     question: "2 + 2?".to_string(),
//!     answers: vec!["4".to_string(), "5".to_string()],
//!     correct: "4".to_string(),
//! }]);
//!
//! let mut session = QuizSession::new(store);
//! session.start();
//! session.dispatch(Event::Answer("4".to_string()));
//!
//! assert_eq!(session.state().score, 1);
//! assert_eq!(session.state().phase(), Phase::Scored);
//! ```
//!
//! [`QuestionStore`]: crate::store::QuestionStore

pub mod event;
pub mod reducer;
pub mod screen;
pub mod session;
pub mod state;

pub use event::{Completion, Effect, Event, StoreFailure};
pub use reducer::{reduce, IgnoreReason, Step};
pub use screen::{Action, Screen};
pub use session::{Outcome, QuizSession};
pub use state::{Phase, QuizState, RequestKind, View};
