use crate::domain::{ActorId, AppError, NewProject, Project, ProjectId};

/// Port for user projects.
pub trait ProjectStore {
    fn project(&self, id: ProjectId) -> Result<Option<Project>, AppError>;

    /// Persist a new project and return it with its assigned id.
    fn save_project(&self, project: NewProject) -> Result<Project, AppError>;

    /// Projects owned by `owner`, in id order.
    fn list_projects_for_owner(&self, owner: ActorId) -> Result<Vec<Project>, AppError>;
}
