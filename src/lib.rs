//! Quizdeck - a multiple-choice quiz backed by a remote question store.
//!
//! The quiz plays through a collection of questions, keeps score, and lets
//! the player create, edit, and delete questions in the store.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and merging
//! - [`error`] - Error types and result aliases
//! - [`model`] - Question records
//! - [`quiz`] - The quiz/editor state machine and its effect layer
//! - [`store`] - REST question store client and an in-memory stand-in
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use quizdeck::quiz::{reduce, Event, QuizState, Step};
//!
//! // Answering with no questions loaded changes nothing.
//! let state = QuizState::new();
//! let step = reduce(&state, Event::Answer("4".to_string()));
//! assert!(step.is_ignored());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod quiz;
pub mod store;
pub mod ui;

pub use error::{QuizError, Result};
