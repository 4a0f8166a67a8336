use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "refold CLI - inverse design of RNA sequences that fold into a target secondary structure.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for sequences whose predicted structure matches a target.
    Design(DesignArgs),
    /// Validate a dot-bracket structure and print a short summary.
    Check(CheckArgs),
}

/// Arguments for the `design` subcommand.
#[derive(Args, Debug)]
pub struct DesignArgs {
    // --- Core Arguments ---
    /// Target secondary structure in dot-bracket notation.
    #[arg(
        short = 't',
        long,
        value_name = "DOTBRACKET",
        required_unless_present = "target_file",
        conflicts_with = "target_file"
    )]
    pub target: Option<String>,

    /// Read the target structure from a file (first non-empty, non-'>' line).
    #[arg(long, value_name = "PATH")]
    pub target_file: Option<PathBuf>,

    /// Start sequence. Without it a random start of the target's length is drawn.
    #[arg(short = 's', long, value_name = "SEQUENCE")]
    pub start: Option<String>,

    /// Treat the start as a partial template: its `n` positions are filled randomly.
    #[arg(long, requires = "start")]
    pub partial: bool,

    /// Path to the main configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Search Overrides ---
    /// Override the number of designs to produce.
    #[arg(short = 'n', long, value_name = "INT")]
    pub count: Option<usize>,

    /// Override the inclusive structure-distance acceptance bound.
    #[arg(long, value_name = "FLOAT")]
    pub max_structure_distance: Option<f64>,

    /// Override how many positions may be freed at once.
    #[arg(long, value_name = "INT")]
    pub max_sequence_distance: Option<usize>,

    /// Override the retry budget per position combination.
    #[arg(long, value_name = "INT")]
    pub attempts: Option<usize>,

    // --- Backend Overrides ---
    /// Override the folding backend to search with.
    #[arg(short = 'b', long, value_name = "NAME")]
    pub backend: Option<String>,

    /// Seed for the stochastic backends and start providers.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    // --- Output ---
    /// Write the designs as a CSV report.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Structure to validate, in dot-bracket notation.
    #[arg(value_name = "DOTBRACKET")]
    pub structure: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn design_requires_a_target() {
        let result = Cli::try_parse_from(["refold", "design"]);
        assert!(result.is_err());
    }

    #[test]
    fn design_parses_overrides() {
        let cli = Cli::try_parse_from([
            "refold", "design", "-t", "(((...)))", "-n", "5", "--seed", "7", "-b", "random-fill",
        ])
        .unwrap();
        match cli.command {
            Commands::Design(args) => {
                assert_eq!(args.target.as_deref(), Some("(((...)))"));
                assert_eq!(args.count, Some(5));
                assert_eq!(args.seed, Some(7));
                assert_eq!(args.backend.as_deref(), Some("random-fill"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn partial_requires_a_start() {
        let result = Cli::try_parse_from(["refold", "design", "-t", "(...)", "--partial"]);
        assert!(result.is_err());
    }
}
