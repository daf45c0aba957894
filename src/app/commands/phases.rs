//! Phase lookup shared by the commands.

use crate::domain::{AppError, Phase, PhaseId, phase};
use crate::ports::PhaseCatalog;

/// Active phases in workflow order.
pub fn list_active<C: PhaseCatalog + ?Sized>(catalog: &C) -> Result<Vec<Phase>, AppError> {
    let phases = catalog.phases()?;
    Ok(phase::active_in_order(&phases).into_iter().cloned().collect())
}

/// Fetch an active phase; inactive phases are treated as missing.
pub fn active_phase<C: PhaseCatalog + ?Sized>(catalog: &C, id: PhaseId) -> Result<Phase, AppError> {
    catalog
        .phase(id)?
        .filter(|phase| phase.is_active)
        .ok_or(AppError::PhaseNotFound(id))
}
