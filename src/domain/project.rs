use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use super::{ActorId, ProjectId};

/// Role granted to an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    /// Authors phases and reads the activity log.
    Administrator,
    /// Owns projects and submits phase forms.
    #[default]
    Consumer,
}

/// The authenticated user on whose behalf an operation runs.
///
/// Passed explicitly to every operation that records activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: ActorId,
    pub username: String,
    pub role: ActorRole,
    /// Network address the request originated from, when known.
    pub ip_address: Option<IpAddr>,
}

impl Actor {
    pub fn new(id: ActorId, username: impl Into<String>, role: ActorRole) -> Self {
        Self { id, username: username.into(), role, ip_address: None }
    }

    pub fn with_ip(mut self, ip_address: IpAddr) -> Self {
        self.ip_address = Some(ip_address);
        self
    }

    pub fn is_administrator(&self) -> bool {
        self.role == ActorRole::Administrator
    }
}

/// A user project grouping phase responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub owner: ActorId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Project {
    pub fn new(id: ProjectId, owner: ActorId, name: impl Into<String>) -> Self {
        Self { id, owner, name: name.into(), description: None }
    }

    pub fn is_owned_by(&self, actor: &Actor) -> bool {
        self.owner == actor.id
    }
}

/// A project ready to be persisted; the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub owner: ActorId,
    pub name: String,
    pub description: Option<String>,
}

impl NewProject {
    pub fn into_stored(self, id: ProjectId) -> Project {
        Project { id, owner: self.owner, name: self.name, description: self.description }
    }
}
