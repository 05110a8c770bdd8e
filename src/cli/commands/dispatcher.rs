//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::config::QuizConfig;
use crate::error::Result;
use crate::ui::UserInterface;

/// Exit code for a question id the store does not hold.
pub const EXIT_UNKNOWN_QUESTION: i32 = 2;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: QuizConfig,
}

impl CommandDispatcher {
    /// Create a dispatcher over the resolved configuration.
    pub fn new(config: QuizConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            None | Some(Commands::Play) => {
                let cmd = super::play::PlayCommand::new(&self.config);
                cmd.execute(ui)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(&self.config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Add(args)) => {
                let cmd = super::add::AddCommand::new(&self.config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Edit(args)) => {
                let cmd = super::edit::EditCommand::new(&self.config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Delete(args)) => {
                let cmd = super::delete::DeleteCommand::new(&self.config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
