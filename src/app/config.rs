//! Configuration loading from the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::configuration::{AppConfig, CONFIG_FILE, parse_config_content};
use crate::domain::AppError;

/// Load `phase-prompt.toml`.
///
/// An explicitly named file must exist. Without one, `work_dir/phase-prompt.toml`
/// is used when present and defaults apply otherwise.
pub fn load_config(explicit: Option<&Path>, work_dir: &Path) -> Result<AppConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::ConfigMissing(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let path = work_dir.join(CONFIG_FILE);
            if !path.exists() {
                debug!(work_dir = %work_dir.display(), "no config file, using defaults");
                return Ok(AppConfig::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path)?;
    let config = parse_config_content(&content)?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Catalog path to read: the override if given, else the configured one,
/// resolved against `work_dir` when relative.
pub fn catalog_path(config: &AppConfig, override_path: Option<&Path>, work_dir: &Path) -> PathBuf {
    let path = override_path.unwrap_or(&config.catalog.path);
    if path.is_absolute() { path.to_path_buf() } else { work_dir.join(path) }
}
