//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Quizdeck - play and curate a multiple-choice quiz.
#[derive(Debug, Parser)]
#[command(name = "quizdeck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (skips ~/.quizdeck/config.yml and ./.quizdeck.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the question store
    #[arg(long, global = true, env = "QUIZDECK_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play the quiz (default if no command specified)
    Play,

    /// List every question in the store
    List(ListArgs),

    /// Add a question
    Add(AddArgs),

    /// Edit a question
    Edit(EditArgs),

    /// Delete a question
    Delete(DeleteArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AddArgs {
    /// Prompt text
    #[arg(long)]
    pub question: String,

    /// Candidate answer (repeat for each answer, in display order)
    #[arg(long = "answer", required = true)]
    pub answers: Vec<String>,

    /// The correct answer
    #[arg(long)]
    pub correct: String,
}

/// Arguments for the `edit` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EditArgs {
    /// Id of the question to edit
    pub id: String,

    /// New prompt text
    #[arg(long)]
    pub question: Option<String>,

    /// Replace an answer, as INDEX=VALUE (1-based)
    #[arg(long = "answer", value_name = "INDEX=VALUE", value_parser = parse_answer_edit)]
    pub answers: Vec<AnswerEdit>,

    /// New correct answer
    #[arg(long)]
    pub correct: Option<String>,
}

/// One `--answer INDEX=VALUE` replacement, stored zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerEdit {
    pub index: usize,
    pub value: String,
}

fn parse_answer_edit(raw: &str) -> Result<AnswerEdit, String> {
    let (index, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=VALUE, got '{}'", raw))?;
    let position: usize = index
        .trim()
        .parse()
        .map_err(|_| format!("answer index '{}' is not a number", index))?;
    if position == 0 {
        return Err("answer indexes start at 1".to_string());
    }
    Ok(AnswerEdit {
        index: position - 1,
        value: value.to_string(),
    })
}

/// Arguments for the `delete` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DeleteArgs {
    /// Id of the question to delete
    pub id: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["quizdeck"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["quizdeck", "list", "--endpoint", "http://x", "-q"]).unwrap();
        assert_eq!(cli.endpoint.as_deref(), Some("http://x"));
        assert!(cli.quiet);
    }

    #[test]
    fn add_collects_answers_in_order() {
        let cli = Cli::try_parse_from([
            "quizdeck", "add", "--question", "2+2?", "--answer", "3", "--answer", "4",
            "--correct", "4",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add(args)) => {
                assert_eq!(args.answers, vec!["3", "4"]);
                assert_eq!(args.correct, "4");
            }
            other => panic!("expected add, got {:?}", other),
        }
    }

    #[test]
    fn add_requires_an_answer() {
        let result = Cli::try_parse_from(["quizdeck", "add", "--question", "Q", "--correct", "A"]);
        assert!(result.is_err());
    }

    #[test]
    fn edit_answers_are_one_based() {
        let cli =
            Cli::try_parse_from(["quizdeck", "edit", "7", "--answer", "2=Paris"]).unwrap();
        match cli.command {
            Some(Commands::Edit(args)) => {
                assert_eq!(args.id, "7");
                assert_eq!(
                    args.answers,
                    vec![AnswerEdit {
                        index: 1,
                        value: "Paris".to_string()
                    }]
                );
            }
            other => panic!("expected edit, got {:?}", other),
        }
    }

    #[test]
    fn answer_edit_keeps_equals_in_value() {
        let edit = parse_answer_edit("1=a=b").unwrap();
        assert_eq!(edit.value, "a=b");
    }

    #[test]
    fn answer_edit_rejects_bad_index() {
        assert!(parse_answer_edit("0=x").is_err());
        assert!(parse_answer_edit("one=x").is_err());
        assert!(parse_answer_edit("nothing").is_err());
    }
}
