//! Demo command implementation
//!
//! Regenerates the two bundled sample files and imports each with its
//! matching profile, writing one report per profile. Both samples contain
//! deliberately failing rows so a demo shows the full report shape.

use std::path::Path;
use tracing::info;

use super::shared::{print_report_summary, write_report};
use crate::app::services::sample_data;
use crate::cli::args::DemoArgs;
use crate::config::ImportProfile;
use crate::constants::REPORT_FILE_SUFFIX;
use crate::{Report, Result};

/// Run the demo command
pub fn run_demo(args: DemoArgs) -> Result<()> {
    info!(
        "Running demo imports into {}",
        args.output_dir.display()
    );

    let sources = [
        (
            ImportProfile::Roster,
            sample_data::write_roster_sample(&args.output_dir)?,
        ),
        (
            ImportProfile::Catalog,
            sample_data::write_catalog_sample(&args.output_dir)?,
        ),
    ];

    for (profile, source) in sources {
        let report = run_profile(profile, &source, &args.output_dir)?;
        if !args.quiet {
            print_report_summary(profile.display_name(), &report);
        }
    }

    if !args.quiet {
        println!(
            "\nSample files and reports written to {}",
            args.output_dir.display()
        );
    }
    Ok(())
}

fn run_profile(profile: ImportProfile, source: &Path, output_dir: &Path) -> Result<Report> {
    let engine = profile.build_engine();
    let report = engine.execute(&source.to_string_lossy())?;

    let report_path =
        output_dir.join(format!("{}.{REPORT_FILE_SUFFIX}", profile.display_name()));
    write_report(&report, &report_path)?;
    Ok(report)
}
