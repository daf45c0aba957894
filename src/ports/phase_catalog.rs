use crate::domain::{AppError, Phase, PhaseId};

/// Port for reading authored phases.
///
/// Phase authoring is external; this port is read-only.
pub trait PhaseCatalog {
    /// All phases in catalog order, active or not.
    fn phases(&self) -> Result<Vec<Phase>, AppError>;

    /// Look up a phase by id, active or not.
    fn phase(&self, id: PhaseId) -> Result<Option<Phase>, AppError> {
        Ok(self.phases()?.into_iter().find(|phase| phase.id == id))
    }
}
