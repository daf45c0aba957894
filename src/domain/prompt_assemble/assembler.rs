use crate::domain::form::{FormSubmission, FormValue};
use crate::domain::phase::{Field, PhaseDefinition, PromptChunk};

/// Assemble the prompt for a phase definition and a form submission.
pub fn assemble_phase(definition: &PhaseDefinition, form: &FormSubmission) -> String {
    assemble(definition.chunks(), definition.fields(), form)
}

/// Interleave chunks and field values by position.
///
/// Position `i` emits chunk `i` followed by the value of field `i`. Optional
/// chunks are dropped when their gating field was not supplied. Nothing is
/// inserted between fragments.
pub fn assemble(chunks: &[PromptChunk], fields: &[Field], form: &FormSubmission) -> String {
    let mut prompt = String::new();

    for index in 0..chunks.len().max(fields.len()) {
        if let Some(chunk) = chunks.get(index)
            && includes_chunk(chunk, gating_field(fields, index), form)
        {
            prompt.push_str(&chunk.content);
        }

        if let Some(value) = fields.get(index).and_then(|field| supplied_value(form, field)) {
            prompt.push_str(&value.to_string());
        }
    }

    prompt
}

/// The field whose value decides whether the chunk at `index` is emitted.
///
/// Chunks and fields are paired purely by position.
pub fn gating_field(fields: &[Field], index: usize) -> Option<&Field> {
    fields.get(index)
}

fn includes_chunk(chunk: &PromptChunk, gate: Option<&Field>, form: &FormSubmission) -> bool {
    if !chunk.is_optional {
        return true;
    }
    // An optional chunk without a paired field has nothing to check against.
    gate.is_none_or(|field| form.is_supplied(&field.name))
}

fn supplied_value<'a>(form: &'a FormSubmission, field: &Field) -> Option<&'a FormValue> {
    form.get(&field.name).filter(|value| value.is_truthy())
}
