//! Unit tests for the reference validation and aggregation policies

pub mod catalog_tests;

use crate::app::models::Record;

/// Build a record from literal header and line text
pub fn record(header: &[&str], line: &str) -> Record {
    let header: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    Record::from_line(&header, line)
}
