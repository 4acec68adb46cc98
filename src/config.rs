//! Run configuration and profile selection
//!
//! A profile names one validation/aggregation pairing; the run
//! configuration ties a profile to a source and a report destination and
//! is validated before the engine is built.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::app::services::import_engine::ImportEngine;
use crate::app::services::policies::{
    CatalogAggregation, CatalogValidation, RosterAggregation, RosterValidation,
};
use crate::constants::{
    CATALOG_SAMPLE_FILE, DEFAULT_OUTPUT_DIR, REPORT_FILE_SUFFIX, ROSTER_SAMPLE_FILE,
};
use crate::{Error, Result};

/// Which reference policy pairing to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportProfile {
    /// Class roster imports: requires Id, Nome, Turma; totals by Turma
    Roster,
    /// Product catalog imports: requires Id, Nome, Categoria, Preco;
    /// totals by Categoria
    Catalog,
}

impl ImportProfile {
    /// Build an import engine wired with this profile's policies
    pub fn build_engine(&self) -> ImportEngine {
        match self {
            Self::Roster => ImportEngine::new(RosterValidation, RosterAggregation),
            Self::Catalog => ImportEngine::new(CatalogValidation, CatalogAggregation),
        }
    }

    /// File name of this profile's bundled sample source
    pub fn sample_file_name(&self) -> &'static str {
        match self {
            Self::Roster => ROSTER_SAMPLE_FILE,
            Self::Catalog => CATALOG_SAMPLE_FILE,
        }
    }

    /// Display name used in console narration
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Roster => "roster",
            Self::Catalog => "catalog",
        }
    }
}

/// Fully resolved configuration for one import run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Source file to import
    pub source: PathBuf,
    /// Policy pairing to run
    pub profile: ImportProfile,
    /// Where the report JSON is written
    pub report_path: PathBuf,
}

impl RunConfig {
    /// Resolve a configuration from CLI inputs.
    ///
    /// An absent report path defaults to
    /// `<output dir>/<source stem>.report.json`.
    pub fn resolve(
        source: PathBuf,
        profile: ImportProfile,
        report_path: Option<PathBuf>,
    ) -> Result<Self> {
        let report_path = report_path.unwrap_or_else(|| {
            let stem = source
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| profile.display_name().to_string());
            PathBuf::from(DEFAULT_OUTPUT_DIR).join(format!("{stem}.{REPORT_FILE_SUFFIX}"))
        });

        let config = Self {
            source,
            profile,
            report_path,
        };
        config.validate()?;
        debug!("Resolved run configuration: {:?}", config);
        Ok(config)
    }

    /// Reject configurations the engine would fail on anyway, with a
    /// clearer message at the configuration boundary.
    pub fn validate(&self) -> Result<()> {
        if self.source.as_os_str().is_empty() {
            return Err(Error::configuration("source path must not be empty"));
        }
        if self.report_path.as_os_str().is_empty() {
            return Err(Error::configuration("report path must not be empty"));
        }
        if self.source == self.report_path {
            return Err(Error::configuration(
                "source and report paths must differ",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report_path_uses_source_stem() {
        let config = RunConfig::resolve(
            PathBuf::from("data/alunos.csv"),
            ImportProfile::Roster,
            None,
        )
        .unwrap();

        assert_eq!(
            config.report_path,
            PathBuf::from("output/alunos.report.json")
        );
    }

    #[test]
    fn test_explicit_report_path_wins() {
        let config = RunConfig::resolve(
            PathBuf::from("alunos.csv"),
            ImportProfile::Roster,
            Some(PathBuf::from("custom.json")),
        )
        .unwrap();

        assert_eq!(config.report_path, PathBuf::from("custom.json"));
    }

    #[test]
    fn test_empty_source_is_rejected() {
        let result = RunConfig::resolve(PathBuf::new(), ImportProfile::Catalog, None);
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_source_equal_to_report_path_is_rejected() {
        let result = RunConfig::resolve(
            PathBuf::from("same.json"),
            ImportProfile::Catalog,
            Some(PathBuf::from("same.json")),
        );
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_profiles_build_engines() {
        // Smoke check: both pairings wire up and run
        let report = ImportProfile::Roster
            .build_engine()
            .import_text("Id,Nome,Turma\n1,Ana,101\n");
        assert_eq!(report.total_processed, 1);

        let report = ImportProfile::Catalog
            .build_engine()
            .import_text("Id,Nome,Categoria,Preco\n1,Caneta,Papelaria,2.5\n");
        assert_eq!(report.total_processed, 1);
    }
}
