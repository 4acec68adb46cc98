//! Import Processor Library
//!
//! A Rust library for validating and summarizing delimited tabular records
//! supplied as UTF-8 text, producing a structured report of successes,
//! per-record errors, and category-wise totals.
//!
//! This library provides tools for:
//! - Parsing header + body delimited text with permissive cell handling
//! - Running a fixed single-pass import algorithm over each data line
//! - Injecting domain-specific validation and aggregation policies
//! - Accumulating a serializable report of counts, errors, and totals
//! - Generating the bundled sample data sets for demonstration runs

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod import_engine;
        pub mod policies;
        pub mod sample_data;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Record, Report};
pub use app::services::import_engine::{FileSource, ImportEngine, SourceReader};
pub use app::services::policies::{AggregationPolicy, FinalizeHook, ValidationPolicy};
pub use config::ImportProfile;

/// Result type alias for the import processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for import processing operations
///
/// Per-record validation failures are deliberately absent here: they are
/// data, collected into the report's error list, and never abort a run.
/// Only engine-level conditions surface as `Error`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Source identifier was empty or otherwise unusable before reading
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Source identifier did not resolve to readable content
    #[error("Source not found: {source_id}")]
    SourceNotFound { source_id: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Report could not be serialized or parsed
    #[error("Report serialization error: {message}")]
    ReportSerialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a source not found error
    pub fn source_not_found(source_id: impl Into<String>) -> Self {
        Self::SourceNotFound {
            source_id: source_id.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a report serialization error with context
    pub fn report_serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ReportSerialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::ReportSerialization {
            message: "Report serialization failed".to_string(),
            source: error,
        }
    }
}
