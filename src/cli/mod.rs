pub mod args;

use std::path::Path;

use clap::CommandFactory;
use colored::Colorize;
use tracing::debug;

use crate::core::{CleanError, Console, RunConfig, RunSummary};
use crate::input::TerminalConsole;

use self::args::Cli;

const CURRENT_DIR_PROMPT: &str = "Are you sure you want to clean the current directory?";

/// How an invocation ended.
#[derive(Debug)]
pub enum Outcome {
    /// The user declined to clean the current directory.
    Declined,
    Finished(RunSummary),
}

pub fn setup_tracing(cli: &Cli) {
    if let Some(level) = cli.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

pub fn run(cli: Cli) -> color_eyre::Result<()> {
    debug!("Parsed CLI arguments: {cli:?}");
    let cwd = std::env::current_dir()?;
    let mut console = TerminalConsole::default();

    match execute(&cli, &cwd, &mut console)? {
        Outcome::Declined => {
            Cli::command().print_help()?;
        }
        Outcome::Finished(summary) => {
            debug!(?summary, "run complete");
            if cli.verbose {
                if summary.converged() {
                    println!("{}", summary.message().green());
                } else {
                    println!("{}", summary.message().yellow());
                }
            }
        }
    }

    Ok(())
}

/// Everything `run` does short of touching the real terminal.
pub fn execute<C: Console>(cli: &Cli, cwd: &Path, console: &mut C) -> Result<Outcome, CleanError> {
    let config = RunConfig::from(cli);

    if cli.targets.is_empty() && !config.suppress && !console.confirm(CURRENT_DIR_PROMPT)? {
        return Ok(Outcome::Declined);
    }

    let summary = crate::core::run(&cli.targets, cwd, &config, console)?;
    Ok(Outcome::Finished(summary))
}
