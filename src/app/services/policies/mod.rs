//! Pluggable validation and aggregation policies
//!
//! The import engine runs a fixed algorithm; everything domain-specific is
//! injected through the three capability traits defined here. Two reference
//! rule sets ship with the crate:
//! - [`roster`] - class roster imports keyed by `Turma`
//! - [`catalog`] - product catalog imports keyed by `Categoria`
//!
//! Policies are stateless across a run: anything a policy accumulates (the
//! category totals) lives on the [`Report`], never on the policy itself.

pub mod catalog;
pub mod roster;

#[cfg(test)]
pub mod tests;

// Re-export the reference variants for easy access
pub use catalog::{CatalogAggregation, CatalogValidation};
pub use roster::{RosterAggregation, RosterValidation};

use crate::app::models::{Record, Report};

/// Decides whether a record is acceptable.
///
/// Returns one message per rule violation, in field declaration order, so a
/// record can report several simultaneous problems. An empty list means the
/// record passed. Implementations must be pure: no mutation of the record,
/// no external state.
pub trait ValidationPolicy {
    fn validate(&self, record: &Record) -> Vec<String>;
}

/// Folds one validated record into the report's category totals.
///
/// Invoked only for records that passed validation, exactly once per record.
/// Implementations mutate `report.category_totals` only; the processed and
/// error counters belong to the engine. Aggregation has no failure mode by
/// contract: anything that could fail must be rejected by validation first.
pub trait AggregationPolicy {
    fn aggregate(&self, record: &Record, report: &mut Report);
}

/// Optional post-processing step, run once after the last line.
///
/// Absent by default; a domain that needs derived totals registers one
/// instead of every domain declaring an empty override.
pub trait FinalizeHook {
    fn finalize(&self, report: &mut Report);
}

/// Collect one "{field} ausente" message per blank required field.
///
/// Shared by both reference validations: checks run in declaration order and
/// never short-circuit across fields.
pub(crate) fn require_fields(record: &Record, fields: &[&str], errors: &mut Vec<String>) {
    for field in fields {
        if record.get(field).trim().is_empty() {
            errors.push(format!("{field} ausente"));
        }
    }
}
