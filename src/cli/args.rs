use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser, ValueEnum};

use crate::core::{RunConfig, DEFAULT_PASSES};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dirclean",
    version,
    about = "Recursively remove all empty directories within the given directories",
    long_about = "Recursively remove all empty directories within the given directories.\n\n\
                  If no directories are provided, the current directory is cleaned. \
                  The directories named on the command line are never removed themselves."
)]
pub struct Cli {
    /// Directories to clean (defaults to the current directory)
    pub targets: Vec<PathBuf>,

    /// Show directories being removed
    #[arg(short, long)]
    pub verbose: bool,

    /// Ask for confirmation before deleting each directory
    #[arg(short, long)]
    pub confirm: bool,

    /// Suppress the warning about cleaning the current directory
    #[arg(short, long)]
    pub suppress: bool,

    /// Number of passes to make
    #[arg(
        short,
        long,
        value_name = "N",
        allow_negative_numbers = true,
        default_value_t = DEFAULT_PASSES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub passes: u32,

    /// Diagnostic log output on stderr
    #[arg(long, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

impl Cli {
    /// Parse `std::env::args`, exiting on error. A bad pass count is
    /// followed by the full help text.
    pub fn parse_or_exit() -> Self {
        Self::try_parse().unwrap_or_else(|err| {
            if rejects_pass_count(&err) {
                let _ = err.print();
                let _ = Self::command().print_help();
                std::process::exit(err.exit_code());
            }
            err.exit()
        })
    }
}

fn rejects_pass_count(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::ValueValidation | ErrorKind::InvalidValue)
        && matches!(
            err.get(ContextKind::InvalidArg),
            Some(ContextValue::String(arg)) if arg.starts_with("--passes")
        )
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        RunConfig {
            passes: cli.passes,
            verbose: cli.verbose,
            confirm: cli.confirm,
            suppress: cli.suppress,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["dirclean"]).unwrap();
        assert!(cli.targets.is_empty());
        assert_eq!(RunConfig::from(&cli), RunConfig::default());
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn bundled_flags_and_targets() {
        let cli = Cli::try_parse_from(["dirclean", "-vcs", "build", "/tmp/out"]).unwrap();
        assert!(cli.verbose && cli.confirm && cli.suppress);
        assert_eq!(
            cli.targets,
            vec![PathBuf::from("build"), PathBuf::from("/tmp/out")]
        );
    }

    #[test]
    fn pass_count_follows_bundle() {
        let cli = Cli::try_parse_from(["dirclean", "-vp", "3", "dir"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.passes, 3);
        assert_eq!(cli.targets, vec![PathBuf::from("dir")]);
    }

    #[rstest]
    #[case("0")]
    #[case("-2")]
    #[case("three")]
    fn bad_pass_counts_are_rejected(#[case] value: &str) {
        assert!(Cli::try_parse_from(["dirclean", "-p", value]).is_err());
    }

    #[test]
    fn missing_pass_count_is_rejected() {
        assert!(Cli::try_parse_from(["dirclean", "-p"]).is_err());
    }

    #[rstest]
    #[case(&["-p", "0"])]
    #[case(&["-p", "-2"])]
    #[case(&["-vp", "three"])]
    #[case(&["-p"])]
    fn pass_count_errors_are_recognised(#[case] args: &[&str]) {
        let err = Cli::try_parse_from(std::iter::once(&"dirclean").chain(args)).unwrap_err();
        assert!(rejects_pass_count(&err), "{err}");
    }

    #[rstest]
    #[case(&["--log-level", "loud"])]
    #[case(&["--bogus"])]
    fn other_errors_keep_the_short_usage(#[case] args: &[&str]) {
        let err = Cli::try_parse_from(std::iter::once(&"dirclean").chain(args)).unwrap_err();
        assert!(!rejects_pass_count(&err));
    }

    #[rstest]
    #[case(LogLevel::Debug, Some(tracing::Level::DEBUG))]
    #[case(LogLevel::Error, Some(tracing::Level::ERROR))]
    #[case(LogLevel::Silent, None)]
    fn log_levels_map_to_tracing(#[case] level: LogLevel, #[case] expected: Option<tracing::Level>) {
        assert_eq!(level.to_tracing_level(), expected);
    }
}
