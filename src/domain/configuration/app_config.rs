//! Application configuration loaded from `phase-prompt.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "phase-prompt.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Phase catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.catalog.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Where phase definitions are read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Path to the TOML phase catalog, relative to the working directory.
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { path: default_catalog_path() }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.path.as_os_str().is_empty() {
            return Err(AppError::config_error("catalog.path must not be empty"));
        }
        Ok(())
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("phases.toml")
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_filter() }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.filter.trim().is_empty() {
            return Err(AppError::config_error("logging.filter must not be empty"));
        }
        Ok(())
    }
}

fn default_filter() -> String {
    "info".to_string()
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.catalog.path, PathBuf::from("phases.toml"));
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn app_config_parses_from_toml() {
        let config = parse_config_content(
            r#"
[catalog]
path = "config/phases.toml"

[logging]
filter = "phase_prompt=debug"
"#,
        )
        .unwrap();
        assert_eq!(config.catalog.path, PathBuf::from("config/phases.toml"));
        assert_eq!(config.logging.filter, "phase_prompt=debug");
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = parse_config_content("[logging]\nfilter = \"warn\"\n").unwrap();
        assert_eq!(config.catalog, CatalogConfig::default());
    }

    #[test]
    fn rejects_unknown_keys() {
        let result = parse_config_content("[catalog]\nfile = \"x.toml\"\n");
        assert!(matches!(result, Err(AppError::TomlParseError(_))));
    }

    #[test]
    fn rejects_empty_catalog_path() {
        let result = parse_config_content("[catalog]\npath = \"\"\n");
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }
}
