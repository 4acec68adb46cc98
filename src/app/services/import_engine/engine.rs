//! Core import orchestration
//!
//! One `ImportEngine` run is single-threaded, synchronous, and single-pass:
//! the source is read in full, each data line is validated and either
//! recorded as an error or aggregated, and the finished report is returned.
//! A failing record never aborts the run; only engine-level conditions
//! (empty identifier, missing source) do.

use tracing::{debug, info};

use super::source::{FileSource, SourceReader};
use crate::Result;
use crate::app::models::{Record, Report};
use crate::app::services::policies::{AggregationPolicy, FinalizeHook, ValidationPolicy};
use crate::constants::{DELIMITER, LINE_PREFIX};

/// Fixed import algorithm with pluggable per-domain policies
///
/// The engine owns the orchestration and the report's counters; the
/// validation policy decides what is acceptable, the aggregation policy
/// decides how valid records are totalled, and an optional finalize hook
/// post-processes the report once the last line is done.
pub struct ImportEngine {
    validation: Box<dyn ValidationPolicy>,
    aggregation: Box<dyn AggregationPolicy>,
    finalize: Option<Box<dyn FinalizeHook>>,
    reader: Box<dyn SourceReader>,
}

impl ImportEngine {
    /// Create an engine with the given policy pairing, no finalize hook,
    /// and the filesystem source reader.
    pub fn new(
        validation: impl ValidationPolicy + 'static,
        aggregation: impl AggregationPolicy + 'static,
    ) -> Self {
        Self {
            validation: Box::new(validation),
            aggregation: Box::new(aggregation),
            finalize: None,
            reader: Box::new(FileSource),
        }
    }

    /// Register a finalize hook, run once after the last line
    pub fn with_finalize(mut self, hook: impl FinalizeHook + 'static) -> Self {
        self.finalize = Some(Box::new(hook));
        self
    }

    /// Replace the source reader (tests, alternative storage)
    pub fn with_reader(mut self, reader: impl SourceReader + 'static) -> Self {
        self.reader = Box::new(reader);
        self
    }

    /// Run one import over the given source identifier.
    ///
    /// Fails only for engine-level conditions: an empty identifier or one
    /// that does not resolve. Validation failures are data and end up in
    /// the returned report.
    pub fn execute(&self, source: &str) -> Result<Report> {
        let lines = self.reader.read_lines(source)?;
        info!("Importing {} lines from '{}'", lines.len(), source);

        let report = self.import_lines(&lines);
        info!(
            "Import of '{}' complete: {} processed, {} with errors",
            source, report.total_processed, report.total_with_error
        );
        Ok(report)
    }

    /// Run one import over in-memory text, bypassing the source reader
    pub fn import_text(&self, text: &str) -> Report {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        self.import_lines(&lines)
    }

    /// The fixed algorithm: header, then one record per non-blank line.
    ///
    /// Error messages carry the line's 1-based position in the original
    /// source, counting the header and any blank lines, so a reported
    /// number always matches what an editor shows for that file.
    pub fn import_lines(&self, lines: &[String]) -> Report {
        let mut report = Report::new();

        // Blank lines are invisible: not counted, not errors
        let mut rows = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        // Header-only and fully blank sources yield an empty report
        let Some((_, header_line)) = rows.next() else {
            debug!("Source has no content lines; returning empty report");
            return report;
        };

        let header: Vec<String> = header_line
            .split(DELIMITER)
            .map(|name| name.trim().to_string())
            .collect();
        debug!("Header columns: {:?}", header);

        for (index, line) in rows {
            let line_number = index + 1;
            let record = Record::from_line(&header, line);

            let errors = self.validation.validate(&record);
            report.total_processed += 1;

            if errors.is_empty() {
                self.aggregation.aggregate(&record, &mut report);
            } else {
                report.total_with_error += 1;
                for message in errors {
                    report
                        .errors
                        .push(format!("{LINE_PREFIX} {line_number}: {message}"));
                }
            }
        }

        if let Some(hook) = &self.finalize {
            hook.finalize(&mut report);
        }

        report
    }
}
