//! Command implementations for the import processor CLI
//!
//! This module dispatches parsed arguments to the individual command
//! implementations and owns logging setup.

pub mod demo;
pub mod import;
pub mod shared;

use tracing::debug;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the import processor
///
/// Sets up logging for the selected command, then runs it. Record-level
/// validation failures never surface here; only engine-level conditions
/// (unreadable source, bad configuration) produce an `Err`.
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Import(import_args)) => {
            setup_logging(import_args.get_log_level())?;
            import::run_import(import_args)
        }
        Some(Commands::Demo(demo_args)) => {
            setup_logging(demo_args.get_log_level())?;
            demo::run_demo(demo_args)
        }
        None => unreachable!("main shows help when no subcommand is given"),
    }
}

/// Set up structured logging on stderr at the requested level
fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("import_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
