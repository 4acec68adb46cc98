//! Core data models for the import processor
//!
//! This module defines the two data types every import run revolves around:
//! [`Record`], one parsed data row, and [`Report`], the accumulated outcome
//! of a run. Both are self-contained and carry no policy logic.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::Result;
use crate::constants::DELIMITER;

/// One parsed data row: a case-insensitive mapping from column name to
/// cell value.
///
/// A record is built positionally from the header columns and the split
/// cells of one line. It is immutable after creation and is discarded once
/// validation and aggregation for its line have completed.
///
/// Missing trailing cells leave their columns absent rather than defaulted,
/// and cells beyond the header length are ignored. Absence surfaces later
/// as a failed "field required" validation, never as a parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Column values keyed by lower-cased column name
    fields: HashMap<String, String>,
}

impl Record {
    /// Build a record by zipping header columns with the cells of one line.
    ///
    /// The line is split on the fixed delimiter and each cell is trimmed.
    /// Column name lookups are case-insensitive from here on.
    pub fn from_line(header: &[String], line: &str) -> Self {
        let mut fields = HashMap::new();
        for (column, cell) in header.iter().zip(line.split(DELIMITER)) {
            fields.insert(column.to_lowercase(), cell.trim().to_string());
        }
        Self { fields }
    }

    /// Get the value of a column, or `""` when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.fields
            .get(&column.to_lowercase())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Whether the column was present in both header and line
    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(&column.to_lowercase())
    }

    /// Number of populated columns
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no columns were populated
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The structured outcome of one import run
///
/// Created empty at the start of a run, mutated line by line by the engine
/// (counters, errors) and the aggregation policy (category totals), and
/// sealed once returned to the caller.
///
/// The serialized field names (`totalProcessados`, `totalComErro`, `erros`,
/// `totaisPorCategoria`) are a stable external contract; downstream
/// consumers parse reports by these names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Count of data lines seen, valid or not
    #[serde(rename = "totalProcessados")]
    pub total_processed: u64,

    /// Count of data lines that failed validation
    #[serde(rename = "totalComErro")]
    pub total_with_error: u64,

    /// Human-readable messages, one or more per failing line, each prefixed
    /// with its original line position
    #[serde(rename = "erros")]
    pub errors: Vec<String>,

    /// Category label to record count; a category appears only once it has
    /// been incremented, so every count is at least 1
    #[serde(rename = "totaisPorCategoria")]
    pub category_totals: BTreeMap<String, u64>,
}

impl Report {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the category counter for `raw_key`, substituting `sentinel`
    /// when the key is blank.
    ///
    /// This is the one piece of shared aggregation logic: every reference
    /// policy uses the same blank-to-sentinel, increment-or-initialize rule.
    pub fn tally_category(&mut self, raw_key: &str, sentinel: &str) {
        let key = if raw_key.trim().is_empty() {
            sentinel
        } else {
            raw_key
        };
        *self.category_totals.entry(key.to_string()).or_insert(0) += 1;
    }

    /// Sum of all category counters
    pub fn aggregated_total(&self) -> u64 {
        self.category_totals.values().sum()
    }

    /// Check the run invariant: every processed line either errored or
    /// contributed exactly one category increment.
    pub fn is_consistent(&self) -> bool {
        self.total_processed == self.total_with_error + self.aggregated_total()
            && (self.total_with_error > 0) == !self.errors.is_empty()
            && self.category_totals.values().all(|&count| count >= 1)
    }

    /// Serialize the report as indented JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| crate::Error::report_serialization("Failed to serialize report", e))
    }

    /// Parse a report back from its JSON serialization
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| crate::Error::report_serialization("Failed to parse report", e))
    }
}
