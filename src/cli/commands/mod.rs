//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait. Commands that talk to the
//! question store also expose a `run_with` taking any
//! [`QuestionStore`](crate::store::QuestionStore), so they can be driven
//! against an in-memory store.

pub mod add;
pub mod completions;
pub mod delete;
pub mod dispatcher;
pub mod display;
pub mod edit;
pub mod list;
pub mod play;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, EXIT_UNKNOWN_QUESTION};
