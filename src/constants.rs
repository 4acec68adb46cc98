//! Application constants for the import processor
//!
//! This module contains the fixed format constants, sentinel labels, and
//! default file names used throughout the import processor application.

// =============================================================================
// Input Format
// =============================================================================

/// Fixed field delimiter for all supported sources
pub const DELIMITER: char = ',';

/// Prefix template applied to every recorded validation message.
/// `{n}` is the 1-based line position in the original source, header and
/// blank lines included.
pub const LINE_PREFIX: &str = "Line";

// =============================================================================
// Roster Profile
// =============================================================================

/// Required columns for the roster rule set, in declaration order
pub const ROSTER_REQUIRED_FIELDS: &[&str] = &["Id", "Nome", "Turma"];

/// Aggregation key column for roster imports
pub const ROSTER_CATEGORY_FIELD: &str = "Turma";

/// Category label substituted when a roster record has a blank class
pub const ROSTER_SENTINEL: &str = "(sem turma)";

// =============================================================================
// Catalog Profile
// =============================================================================

/// Required columns for the catalog rule set, in declaration order
pub const CATALOG_REQUIRED_FIELDS: &[&str] = &["Id", "Nome", "Categoria", "Preco"];

/// Aggregation key column for catalog imports
pub const CATALOG_CATEGORY_FIELD: &str = "Categoria";

/// Category label substituted when a catalog record has a blank category
pub const CATALOG_SENTINEL: &str = "(sem categoria)";

/// Price column for catalog imports
pub const CATALOG_PRICE_FIELD: &str = "Preco";

// =============================================================================
// Output Defaults
// =============================================================================

/// Default directory for generated reports and sample files
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Sample source file name for the roster profile
pub const ROSTER_SAMPLE_FILE: &str = "alunos.csv";

/// Sample source file name for the catalog profile
pub const CATALOG_SAMPLE_FILE: &str = "produtos.csv";

/// Suffix appended to a source file stem to name its report
pub const REPORT_FILE_SUFFIX: &str = "report.json";
