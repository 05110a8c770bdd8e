//! Quizdeck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use quizdeck::cli::{Cli, CommandDispatcher};
use quizdeck::config::{load_config, ConfigOverrides};
use quizdeck::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so `list --json` output stays clean.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("quizdeck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizdeck=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Quizdeck starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let flag_mode = if cli.quiet {
        Some(OutputMode::Quiet)
    } else if cli.verbose {
        Some(OutputMode::Verbose)
    } else {
        None
    };

    let is_interactive = console::Term::stdout().is_term();

    let cwd = std::env::current_dir().unwrap_or_default();
    let overrides = ConfigOverrides {
        base_url: cli.endpoint.clone(),
        timeout_secs: cli.timeout,
    };
    let config = match load_config(cli.config.as_deref(), &cwd, &overrides) {
        Ok(config) => config,
        Err(e) => {
            let mut ui = create_ui(is_interactive, flag_mode.unwrap_or_default());
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    // Flags win over the configured default.
    let output_mode = flag_mode.unwrap_or_else(|| config.settings.default_output.into());
    let mut ui = create_ui(is_interactive, output_mode);

    let dispatcher = CommandDispatcher::new(config);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
