use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::form::FormSubmission;
use super::{PhaseId, ProjectId, ResponseId};

/// A user's answers for one phase of a project, with the generated prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseResponse {
    pub id: ResponseId,
    pub project: ProjectId,
    pub phase: PhaseId,
    pub form_data: FormSubmission,
    pub generated_prompt: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A response not yet persisted; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPhaseResponse {
    pub project: ProjectId,
    pub phase: PhaseId,
    pub form_data: FormSubmission,
    pub generated_prompt: String,
    pub created_at: DateTime<Utc>,
}

impl NewPhaseResponse {
    /// Attach the identifier assigned by storage.
    pub fn into_stored(self, id: ResponseId) -> PhaseResponse {
        PhaseResponse {
            id,
            project: self.project,
            phase: self.phase,
            form_data: self.form_data,
            generated_prompt: self.generated_prompt,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}
