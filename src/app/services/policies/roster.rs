//! Roster rule set: class roster imports keyed by `Turma`

use super::{AggregationPolicy, ValidationPolicy, require_fields};
use crate::app::models::{Record, Report};
use crate::constants::{ROSTER_CATEGORY_FIELD, ROSTER_REQUIRED_FIELDS, ROSTER_SENTINEL};

/// Requires non-blank `Id`, `Nome`, and `Turma`
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterValidation;

impl ValidationPolicy for RosterValidation {
    fn validate(&self, record: &Record) -> Vec<String> {
        let mut errors = Vec::new();
        require_fields(record, ROSTER_REQUIRED_FIELDS, &mut errors);
        errors
    }
}

/// Counts records per `Turma`, grouping blank classes under `(sem turma)`
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterAggregation;

impl AggregationPolicy for RosterAggregation {
    fn aggregate(&self, record: &Record, report: &mut Report) {
        report.tally_category(record.get(ROSTER_CATEGORY_FIELD), ROSTER_SENTINEL);
    }
}
