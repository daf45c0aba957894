//! Phase catalog backed by a TOML file.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::domain::{AppError, Phase};
use crate::ports::PhaseCatalog;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    phases: Vec<Phase>,
}

/// Phases parsed from a catalog file with `[[phases]]` tables.
#[derive(Debug, Clone)]
pub struct TomlPhaseCatalog {
    source: PathBuf,
    phases: Vec<Phase>,
}

impl TomlPhaseCatalog {
    /// Read and parse the catalog at `path`.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Err(AppError::CatalogNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let catalog = Self::parse(&content, path.to_path_buf())?;
        debug!(path = %path.display(), phases = catalog.phases.len(), "loaded phase catalog");
        Ok(catalog)
    }

    /// Parse catalog content; `source` is only used in diagnostics.
    pub fn parse(content: &str, source: PathBuf) -> Result<Self, AppError> {
        let file: CatalogFile = toml::from_str(content)?;

        let mut seen = HashSet::new();
        for phase in &file.phases {
            if !seen.insert(phase.id) {
                return Err(AppError::config_error(format!(
                    "Duplicate phase id {} in {}",
                    phase.id,
                    source.display()
                )));
            }
        }

        Ok(Self { source, phases: file.phases })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl PhaseCatalog for TomlPhaseCatalog {
    fn phases(&self) -> Result<Vec<Phase>, AppError> {
        Ok(self.phases.clone())
    }
}
