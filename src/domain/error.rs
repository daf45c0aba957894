use std::io;

use thiserror::Error;

use super::{PhaseId, ProjectId};

/// Library-wide error type for phase-prompt operations.
///
/// Prompt assembly itself never fails; these errors come from loading
/// catalogs and configuration and from the response workflow around it.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// Phase catalog file missing.
    #[error("Phase catalog not found: {0}")]
    CatalogNotFound(String),

    /// Phase unknown or inactive.
    #[error("Phase {0} not found")]
    PhaseNotFound(PhaseId),

    /// Project unknown.
    #[error("Project {0} not found")]
    ProjectNotFound(ProjectId),

    /// Project exists but belongs to another user.
    #[error("Project {0} does not belong to the current user")]
    ProjectAccessDenied(ProjectId),

    /// Operation requires a role the actor does not have.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn parse_error(what: impl Into<String>, details: impl ToString) -> Self {
        AppError::ParseError { what: what.into(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::ParseError { .. }
            | AppError::TomlParseError(_)
            | AppError::JsonParseError(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigMissing(_)
            | AppError::CatalogNotFound(_)
            | AppError::PhaseNotFound(_)
            | AppError::ProjectNotFound(_) => io::ErrorKind::NotFound,
            AppError::ProjectAccessDenied(_) | AppError::PermissionDenied(_) => {
                io::ErrorKind::PermissionDenied
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_group_errors() {
        assert_eq!(AppError::PhaseNotFound(PhaseId::new(1)).kind(), io::ErrorKind::NotFound);
        assert_eq!(
            AppError::ProjectAccessDenied(ProjectId::new(2)).kind(),
            io::ErrorKind::PermissionDenied
        );
        assert_eq!(AppError::config_error("bad").kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn messages_name_the_record() {
        assert_eq!(AppError::PhaseNotFound(PhaseId::new(9)).to_string(), "Phase 9 not found");
        assert_eq!(
            AppError::parse_error("form pair", "missing '='").to_string(),
            "Failed to parse form pair: missing '='"
        );
    }
}
