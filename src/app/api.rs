//! API Facade for the application.
//!
//! Glues configuration, the TOML phase catalog and the commands together for
//! callers working from a directory on disk.

use std::path::{Path, PathBuf};

use crate::adapters::TomlPhaseCatalog;
use crate::app::commands::{check, phases, render};
use crate::app::config::{catalog_path, load_config};
use crate::domain::{AppError, FormSubmission, Phase, PhaseId};

pub use crate::app::commands::check::PhaseReport;

/// Where to find configuration and the phase catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogOptions {
    /// Explicit config file; defaults to `phase-prompt.toml` in the working directory.
    pub config: Option<PathBuf>,
    /// Catalog path overriding the configured one.
    pub catalog: Option<PathBuf>,
}

/// Resolve configuration and open the phase catalog relative to `work_dir`.
pub fn open_catalog_at(
    work_dir: &Path,
    options: &CatalogOptions,
) -> Result<TomlPhaseCatalog, AppError> {
    let config = load_config(options.config.as_deref(), work_dir)?;
    let path = catalog_path(&config, options.catalog.as_deref(), work_dir);
    TomlPhaseCatalog::load(&path)
}

/// Active phases in workflow order.
pub fn list_phases_at(work_dir: &Path, options: &CatalogOptions) -> Result<Vec<Phase>, AppError> {
    let catalog = open_catalog_at(work_dir, options)?;
    phases::list_active(&catalog)
}

/// Assemble the prompt of a phase for a form submission.
pub fn render_at(
    work_dir: &Path,
    options: &CatalogOptions,
    phase: PhaseId,
    form: &FormSubmission,
) -> Result<String, AppError> {
    let catalog = open_catalog_at(work_dir, options)?;
    render::execute(&catalog, phase, form)
}

/// Definition diagnostics for all phases or a single one.
pub fn check_at(
    work_dir: &Path,
    options: &CatalogOptions,
    phase: Option<PhaseId>,
) -> Result<Vec<PhaseReport>, AppError> {
    let catalog = open_catalog_at(work_dir, options)?;
    check::execute(&catalog, phase)
}

/// Read a form submission from a JSON file and apply `name=value` overrides.
pub fn read_form(path: Option<&Path>, pairs: &[String]) -> Result<FormSubmission, AppError> {
    let form = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            FormSubmission::from_json(&content)
                .map_err(|err| AppError::parse_error(format!("form {}", path.display()), err))?
        }
        None => FormSubmission::new(),
    };
    render::apply_pairs(form, pairs)
}
