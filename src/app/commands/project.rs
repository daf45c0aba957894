//! User projects.

use chrono::Utc;
use tracing::info;

use crate::app::AppContext;
use crate::domain::{ActivityEntry, Actor, AppError, NewProject, Project};
use crate::ports::{ActivityLog, PhaseCatalog, ProjectStore, ResponseStore};

/// Submitted data for a new project. The owner is always the acting user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Create a project owned by `actor` and audit it.
pub fn create<C, S, L>(
    ctx: &AppContext<C, S, L>,
    actor: &Actor,
    request: CreateProjectRequest,
) -> Result<Project, AppError>
where
    C: PhaseCatalog,
    S: ProjectStore + ResponseStore,
    L: ActivityLog,
{
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::parse_error("project name", "must not be blank"));
    }

    let project = ctx.store().save_project(NewProject {
        owner: actor.id,
        name: name.to_string(),
        description: request.description,
    })?;

    ctx.activity().record(ActivityEntry::project_created(
        actor.id,
        &project.name,
        Utc::now(),
        actor.ip_address,
    ))?;

    info!(actor = %actor.id, project = %project.id, "created project");
    Ok(project)
}

/// Projects owned by `actor`.
pub fn list<C, S, L>(ctx: &AppContext<C, S, L>, actor: &Actor) -> Result<Vec<Project>, AppError>
where
    C: PhaseCatalog,
    S: ProjectStore + ResponseStore,
    L: ActivityLog,
{
    ctx.store().list_projects_for_owner(actor.id)
}
