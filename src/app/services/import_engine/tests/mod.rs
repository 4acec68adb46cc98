//! Unit tests for the import engine and source readers
