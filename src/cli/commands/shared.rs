//! Shared components for CLI commands
//!
//! Report sink and console presentation used by both the import and demo
//! commands. The engine itself has no dependency on any of this; it only
//! hands over a finished report.

use colored::Colorize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::app::models::Report;
use crate::{Error, Result};

/// Write the report JSON to the sink path, creating parent directories
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| {
            Error::io(
                format!("Failed to create report directory '{}'", parent.display()),
                e,
            )
        })?;
    }

    let json = report.to_json()?;
    fs::write(path, json).map_err(|e| {
        Error::io(format!("Failed to write report '{}'", path.display()), e)
    })?;

    info!("Report written to {}", path.display());
    Ok(())
}

/// Print a colored human-readable summary of one report
pub fn print_report_summary(label: &str, report: &Report) {
    println!();
    println!("{}", format!("Import results: {label}").bold());

    println!(
        "  Processed: {}   With errors: {}",
        report.total_processed.to_string().green(),
        if report.total_with_error > 0 {
            report.total_with_error.to_string().red()
        } else {
            report.total_with_error.to_string().green()
        }
    );

    if !report.category_totals.is_empty() {
        println!("  Totals by category:");
        for (category, count) in &report.category_totals {
            println!("    {} {}", format!("{category}:").cyan(), count);
        }
    }

    if !report.errors.is_empty() {
        println!("  Errors:");
        for error in &report.errors {
            println!("    {}", error.red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_report_round_trips_through_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports").join("roster.report.json");

        let mut report = Report::new();
        report.total_processed = 2;
        report.tally_category("101", "(sem turma)");
        report.tally_category("102", "(sem turma)");

        write_report(&report, &path).unwrap();

        let parsed = Report::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, report);
    }
}
