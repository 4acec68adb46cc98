//! Bundled sample data sets for demonstration runs
//!
//! The `demo` command regenerates these two files and imports them with
//! their matching profiles. Both deliberately contain failing rows so a
//! demo run exercises the whole report, errors included.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::{CATALOG_SAMPLE_FILE, ROSTER_SAMPLE_FILE};
use crate::{Error, Result};

/// Roster sample: rows 5 and 6 are missing a required field
pub const ROSTER_SAMPLE: &str = "Id,Nome,Turma\n\
                                 1,Ana,101\n\
                                 2,Bruno,101\n\
                                 3,Carla,102\n\
                                 4,,102\n\
                                 5,Diego,\n";

/// Catalog sample: row 4 has a negative price, row 6 a blank category
pub const CATALOG_SAMPLE: &str = "Id,Nome,Categoria,Preco\n\
                                  1,Caneta,Papelaria,2.5\n\
                                  2,Caderno,Papelaria,15.0\n\
                                  3,Mouse,Eletronicos,-10\n\
                                  4,Monitor,Eletronicos,500\n\
                                  5,Lapis,,1.2\n";

/// Write the roster sample file into `dir`, returning its path
pub fn write_roster_sample(dir: &Path) -> Result<PathBuf> {
    write_sample(dir, ROSTER_SAMPLE_FILE, ROSTER_SAMPLE)
}

/// Write the catalog sample file into `dir`, returning its path
pub fn write_catalog_sample(dir: &Path) -> Result<PathBuf> {
    write_sample(dir, CATALOG_SAMPLE_FILE, CATALOG_SAMPLE)
}

fn write_sample(dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| {
        Error::io(
            format!("Failed to create sample directory '{}'", dir.display()),
            e,
        )
    })?;

    let path = dir.join(file_name);
    fs::write(&path, content).map_err(|e| {
        Error::io(
            format!("Failed to write sample file '{}'", path.display()),
            e,
        )
    })?;

    info!("Wrote sample file {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_samples_are_written_to_disk() {
        let dir = TempDir::new().unwrap();

        let roster = write_roster_sample(dir.path()).unwrap();
        let catalog = write_catalog_sample(dir.path()).unwrap();

        assert_eq!(fs::read_to_string(roster).unwrap(), ROSTER_SAMPLE);
        assert_eq!(fs::read_to_string(catalog).unwrap(), CATALOG_SAMPLE);
    }

    #[test]
    fn test_sample_directory_is_created_if_missing() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested").join("deeper");

        let path = write_roster_sample(&nested).unwrap();
        assert!(path.exists());
    }
}
