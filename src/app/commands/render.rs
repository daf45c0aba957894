//! Render a phase prompt without storing a response.

use tracing::debug;

use super::phases::active_phase;
use crate::domain::{AppError, FormSubmission, PhaseDefinition, PhaseId, assemble_phase};
use crate::ports::PhaseCatalog;

/// Assemble the prompt of an active phase for `form`.
pub fn execute<C: PhaseCatalog + ?Sized>(
    catalog: &C,
    phase_id: PhaseId,
    form: &FormSubmission,
) -> Result<String, AppError> {
    let phase = active_phase(catalog, phase_id)?;
    let undeclared = undeclared_fields(&phase.definition, form);
    if !undeclared.is_empty() {
        debug!(phase = %phase.id, fields = ?undeclared, "ignoring undeclared form fields");
    }
    let prompt = assemble_phase(&phase.definition, form);
    debug!(
        phase = %phase.id,
        chunks = phase.definition.chunks().len(),
        fields = phase.definition.fields().len(),
        submitted = form.len(),
        "rendered phase prompt"
    );
    Ok(prompt)
}

/// Submitted names the definition does not declare; assembly never reads them.
pub fn undeclared_fields<'a>(
    definition: &PhaseDefinition,
    form: &'a FormSubmission,
) -> Vec<&'a str> {
    form.iter()
        .map(|(name, _)| name)
        .filter(|name| definition.field(name).is_none())
        .collect()
}

/// Apply `name=value` pairs on top of `form`. Values are taken as text.
pub fn apply_pairs(mut form: FormSubmission, pairs: &[String]) -> Result<FormSubmission, AppError> {
    for pair in pairs {
        let (name, value) = pair.split_once('=').ok_or_else(|| {
            AppError::parse_error("form value", format!("expected name=value, got '{}'", pair))
        })?;
        let name = name.trim();
        if name.is_empty() {
            let details = format!("missing field name in '{}'", pair);
            return Err(AppError::parse_error("form value", details));
        }
        form.insert(name, value);
    }
    Ok(form)
}
