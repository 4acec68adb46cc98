//! Generic single-pass import engine for delimited tabular text
//!
//! This is the fixed orchestration at the center of the crate: read a
//! source, split it into header and data lines, build one record per line,
//! validate, accumulate a report, aggregate, finalize. Every domain-specific
//! decision is deferred to the policy traits in
//! [`policies`](crate::app::services::policies).
//!
//! ## Usage
//!
//! ```rust
//! use import_processor::app::services::import_engine::ImportEngine;
//! use import_processor::app::services::policies::{RosterAggregation, RosterValidation};
//!
//! let engine = ImportEngine::new(RosterValidation, RosterAggregation);
//! let report = engine.import_text("Id,Nome,Turma\n1,Ana,101\n");
//!
//! assert_eq!(report.total_processed, 1);
//! ```

pub mod engine;
pub mod source;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use engine::ImportEngine;
pub use source::{FileSource, SourceReader};
