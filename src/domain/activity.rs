//! Audit trail entries.

use std::fmt;
use std::net::IpAddr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ActorId;

/// Kind of audited event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityAction {
    CreateProject,
    GeneratePrompt,
}

impl ActivityAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityAction::CreateProject => "CREATE_PROJECT",
            ActivityAction::GeneratePrompt => "GENERATE_PROMPT",
        }
    }
}

impl fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One audited action performed by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Acting user; `None` once the user has been removed.
    pub actor: Option<ActorId>,
    pub action: ActivityAction,
    pub details: String,
    pub timestamp: DateTime<Utc>,
    pub ip_address: Option<IpAddr>,
}

impl ActivityEntry {
    /// Entry for a newly created project.
    pub fn project_created(
        actor: ActorId,
        project_name: &str,
        timestamp: DateTime<Utc>,
        ip_address: Option<IpAddr>,
    ) -> Self {
        Self {
            actor: Some(actor),
            action: ActivityAction::CreateProject,
            details: format!("Proyecto creado: {}", project_name),
            timestamp,
            ip_address,
        }
    }

    /// Entry for a prompt generated for `phase_title` inside `project_name`.
    pub fn prompt_generated(
        actor: ActorId,
        phase_title: &str,
        project_name: &str,
        timestamp: DateTime<Utc>,
        ip_address: Option<IpAddr>,
    ) -> Self {
        Self {
            actor: Some(actor),
            action: ActivityAction::GeneratePrompt,
            details: format!(
                "Prompt generado para fase: {} en proyecto: {}",
                phase_title, project_name
            ),
            timestamp,
            ip_address,
        }
    }
}
