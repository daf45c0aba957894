use crate::domain::{ActorId, AppError, NewPhaseResponse, PhaseResponse};

/// Port for persisting phase responses.
pub trait ResponseStore {
    /// Persist a response and return it with its assigned id.
    fn save_response(&self, response: NewPhaseResponse) -> Result<PhaseResponse, AppError>;

    /// Responses belonging to projects owned by `owner`, oldest first.
    fn responses_for_owner(&self, owner: ActorId) -> Result<Vec<PhaseResponse>, AppError>;
}
