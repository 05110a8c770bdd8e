//! Command-line interface for quizdeck.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{AddArgs, AnswerEdit, Cli, Commands, CompletionsArgs, DeleteArgs, EditArgs, ListArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
