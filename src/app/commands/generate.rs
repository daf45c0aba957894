//! Phase response generation.
//!
//! Wraps prompt assembly with the surrounding workflow: ownership checks,
//! persisting the response and recording the audit entry.

use chrono::Utc;
use tracing::info;

use super::phases::active_phase;
use crate::app::AppContext;
use crate::domain::{
    ActivityEntry, Actor, AppError, FormSubmission, NewPhaseResponse, PhaseId, PhaseResponse,
    ProjectId, assemble_phase,
};
use crate::ports::{ActivityLog, PhaseCatalog, ProjectStore, ResponseStore};

/// A validated submission of a phase form for a project.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub project: ProjectId,
    pub phase: PhaseId,
    pub form_data: FormSubmission,
}

/// Generate, store and audit the prompt for a phase submission.
pub fn execute<C, S, L>(
    ctx: &AppContext<C, S, L>,
    actor: &Actor,
    request: GenerateRequest,
) -> Result<PhaseResponse, AppError>
where
    C: PhaseCatalog,
    S: ProjectStore + ResponseStore,
    L: ActivityLog,
{
    let project =
        ctx.store().project(request.project)?.ok_or(AppError::ProjectNotFound(request.project))?;
    if !project.is_owned_by(actor) {
        return Err(AppError::ProjectAccessDenied(project.id));
    }

    let phase = active_phase(ctx.catalog(), request.phase)?;
    let generated_prompt = assemble_phase(&phase.definition, &request.form_data);

    let now = Utc::now();
    let response = ctx.store().save_response(NewPhaseResponse {
        project: project.id,
        phase: phase.id,
        form_data: request.form_data,
        generated_prompt,
        created_at: now,
    })?;

    ctx.activity().record(ActivityEntry::prompt_generated(
        actor.id,
        &phase.title,
        &project.name,
        now,
        actor.ip_address,
    ))?;

    info!(
        actor = %actor.id,
        project = %project.id,
        phase = %phase.id,
        response = %response.id,
        prompt_len = response.generated_prompt.len(),
        "generated phase prompt"
    );
    Ok(response)
}

/// Responses of the projects the actor owns.
pub fn list_responses<C, S, L>(
    ctx: &AppContext<C, S, L>,
    actor: &Actor,
) -> Result<Vec<PhaseResponse>, AppError>
where
    C: PhaseCatalog,
    S: ProjectStore + ResponseStore,
    L: ActivityLog,
{
    ctx.store().responses_for_owner(actor.id)
}

/// The audit trail, newest first. Administrators only.
pub fn list_activity<C, S, L>(
    ctx: &AppContext<C, S, L>,
    actor: &Actor,
) -> Result<Vec<ActivityEntry>, AppError>
where
    C: PhaseCatalog,
    S: ProjectStore + ResponseStore,
    L: ActivityLog,
{
    if !actor.is_administrator() {
        return Err(AppError::PermissionDenied(format!(
            "user '{}' cannot read the activity log",
            actor.username
        )));
    }
    ctx.activity().entries()
}
