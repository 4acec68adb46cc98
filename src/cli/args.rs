//! Command-line argument definitions for the import processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::ImportProfile;
use crate::constants::DEFAULT_OUTPUT_DIR;

/// CLI arguments for the import processor
///
/// Validates and summarizes delimited tabular records, producing a
/// structured report of successes, per-record errors, and category totals.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "import-processor",
    version,
    about = "Validate and summarize delimited tabular records into a structured report",
    long_about = "A batch import tool that reads comma-delimited text, validates every record \
                  against a selected profile, and produces a report of processed counts, \
                  per-record errors, and category-wise totals. A record that fails validation \
                  is reported and skipped; the run itself only fails when the source cannot \
                  be read at all."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the import processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Import one source file with a selected profile
    Import(ImportArgs),
    /// Regenerate the bundled sample files and import them all
    Demo(DemoArgs),
}

/// Console output format for the finished report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored human-readable summary
    Human,
    /// Raw report JSON
    Json,
}

/// Arguments for the import command
#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    /// Source file to import
    ///
    /// UTF-8 text, comma-delimited, first non-blank line is the header row.
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// Validation/aggregation profile to apply
    #[arg(short = 'p', long = "profile", value_name = "PROFILE", value_enum)]
    pub profile: ImportProfile,

    /// Where to write the report JSON
    ///
    /// Defaults to `output/<source stem>.report.json`.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Console output format
    #[arg(long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress console narration (the report file is still written)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Enable verbose logging (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the demo command
#[derive(Debug, Clone, Parser)]
pub struct DemoArgs {
    /// Directory for generated sample files and their reports
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR
    )]
    pub output_dir: PathBuf,

    /// Suppress console narration
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Enable verbose logging (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ImportArgs {
    /// Map verbosity flags to a tracing level name
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }
}

impl DemoArgs {
    /// Map verbosity flags to a tracing level name
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }
}

fn log_level(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_args_parse() {
        let args = Args::parse_from([
            "import-processor",
            "import",
            "--input",
            "alunos.csv",
            "--profile",
            "roster",
        ]);

        match args.command {
            Some(Commands::Import(import)) => {
                assert_eq!(import.input, PathBuf::from("alunos.csv"));
                assert_eq!(import.profile, ImportProfile::Roster);
                assert_eq!(import.format, OutputFormat::Human);
                assert!(import.output.is_none());
            }
            other => panic!("Unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_demo_args_default_output_dir() {
        let args = Args::parse_from(["import-processor", "demo"]);

        match args.command {
            Some(Commands::Demo(demo)) => {
                assert_eq!(demo.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
            }
            other => panic!("Unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_verbosity_maps_to_log_levels() {
        assert_eq!(log_level(false, 0), "info");
        assert_eq!(log_level(false, 1), "debug");
        assert_eq!(log_level(false, 2), "trace");
        assert_eq!(log_level(true, 0), "warn");
    }
}
