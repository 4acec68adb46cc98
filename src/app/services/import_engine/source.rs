//! Source readers: how the engine obtains raw lines for an identifier
//!
//! The engine is indifferent to where its text comes from; it only needs a
//! line sequence for a source identifier. [`FileSource`] is the production
//! reader; tests substitute their own implementations to drive the engine
//! from in-memory text.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::{Error, Result};

/// Supplies the raw line sequence for a source identifier.
///
/// Implementations must distinguish the two fatal conditions the engine
/// propagates: an empty identifier (`InvalidArgument`) and an identifier
/// that does not resolve (`SourceNotFound`).
pub trait SourceReader {
    fn read_lines(&self, source: &str) -> Result<Vec<String>>;
}

/// Reads a source identifier as a UTF-8 file path on the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl SourceReader for FileSource {
    fn read_lines(&self, source: &str) -> Result<Vec<String>> {
        if source.trim().is_empty() {
            return Err(Error::invalid_argument("source path must not be empty"));
        }

        let path = Path::new(source);
        if !path.exists() {
            return Err(Error::source_not_found(source));
        }

        let text = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read source '{source}'"), e))?;

        debug!("Read {} bytes from {}", text.len(), path.display());
        Ok(text.lines().map(str::to_string).collect())
    }
}
