//! Import command implementation
//!
//! Runs one engine pass over a source file with the selected profile,
//! writes the report JSON to the sink path, and narrates the outcome.
//! Invalid records do not make the command fail: whether a non-empty error
//! list is a problem is the caller's call, so the exit code stays zero.

use tracing::{debug, info};

use super::shared::{print_report_summary, write_report};
use crate::Result;
use crate::cli::args::{ImportArgs, OutputFormat};
use crate::config::RunConfig;

/// Run the import command
pub fn run_import(args: ImportArgs) -> Result<()> {
    debug!("Import arguments: {:?}", args);

    let config = RunConfig::resolve(args.input, args.profile, args.output)?;
    info!(
        "Importing '{}' with the {} profile",
        config.source.display(),
        config.profile.display_name()
    );

    let engine = config.profile.build_engine();
    let report = engine.execute(&config.source.to_string_lossy())?;

    write_report(&report, &config.report_path)?;

    if !args.quiet {
        match args.format {
            OutputFormat::Human => {
                print_report_summary(config.profile.display_name(), &report);
                println!("\nReport written to {}", config.report_path.display());
            }
            OutputFormat::Json => println!("{}", report.to_json()?),
        }
    }

    Ok(())
}
