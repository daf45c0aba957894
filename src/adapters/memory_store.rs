use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{
    ActivityEntry, ActorId, AppError, NewPhaseResponse, NewProject, Phase, PhaseResponse, Project,
    ProjectId, ResponseId,
};
use crate::ports::{ActivityLog, PhaseCatalog, ProjectStore, ResponseStore};

#[derive(Debug, Default)]
struct MemoryState {
    phases: Vec<Phase>,
    projects: BTreeMap<ProjectId, Project>,
    responses: Vec<PhaseResponse>,
    activity: Vec<ActivityEntry>,
    next_project_id: u64,
    next_response_id: u64,
}

/// In-memory implementation of every storage port.
///
/// Clones share state, so a test can hand one clone to the application and
/// inspect another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a phase, replacing any phase with the same id.
    pub fn insert_phase(&self, phase: Phase) {
        let mut state = self.state();
        match state.phases.iter_mut().find(|existing| existing.id == phase.id) {
            Some(existing) => *existing = phase,
            None => state.phases.push(phase),
        }
    }

    /// Register a project with a fixed id. Later saved projects get higher ids.
    pub fn insert_project(&self, project: Project) {
        let mut state = self.state();
        state.next_project_id = state.next_project_id.max(project.id.get());
        state.projects.insert(project.id, project);
    }
}

impl PhaseCatalog for MemoryStore {
    fn phases(&self) -> Result<Vec<Phase>, AppError> {
        Ok(self.state().phases.clone())
    }
}

impl ProjectStore for MemoryStore {
    fn project(&self, id: ProjectId) -> Result<Option<Project>, AppError> {
        Ok(self.state().projects.get(&id).cloned())
    }

    fn save_project(&self, project: NewProject) -> Result<Project, AppError> {
        let mut state = self.state();
        state.next_project_id += 1;
        let stored = project.into_stored(ProjectId::new(state.next_project_id));
        state.projects.insert(stored.id, stored.clone());
        Ok(stored)
    }

    fn list_projects_for_owner(&self, owner: ActorId) -> Result<Vec<Project>, AppError> {
        let state = self.state();
        Ok(state.projects.values().filter(|project| project.owner == owner).cloned().collect())
    }
}

impl ResponseStore for MemoryStore {
    fn save_response(&self, response: NewPhaseResponse) -> Result<PhaseResponse, AppError> {
        let mut state = self.state();
        state.next_response_id += 1;
        let stored = response.into_stored(ResponseId::new(state.next_response_id));
        state.responses.push(stored.clone());
        Ok(stored)
    }

    fn responses_for_owner(&self, owner: ActorId) -> Result<Vec<PhaseResponse>, AppError> {
        let state = self.state();
        Ok(state
            .responses
            .iter()
            .filter(|response| {
                state.projects.get(&response.project).is_some_and(|project| project.owner == owner)
            })
            .cloned()
            .collect())
    }
}

impl ActivityLog for MemoryStore {
    fn record(&self, entry: ActivityEntry) -> Result<(), AppError> {
        self.state().activity.push(entry);
        Ok(())
    }

    fn entries(&self) -> Result<Vec<ActivityEntry>, AppError> {
        let mut entries = self.state().activity.clone();
        // Stable sort keeps insertion order for equal timestamps; reverse makes it newest first.
        entries.sort_by_key(|entry| entry.timestamp);
        entries.reverse();
        Ok(entries)
    }
}
