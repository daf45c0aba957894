//! Innovation phases and their prompt templates.

mod chunk;
mod definition;
mod field;

pub use chunk::PromptChunk;
pub use definition::{DefinitionIssue, PhaseDefinition};
pub use field::{Field, FieldType};

use serde::{Deserialize, Serialize};

use super::PhaseId;

/// A stage of the innovation workflow with its form and prompt template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub id: PhaseId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Position of the phase in the workflow.
    #[serde(default)]
    pub order: i64,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(flatten)]
    pub definition: PhaseDefinition,
}

fn default_active() -> bool {
    true
}

impl Phase {
    pub fn new(id: PhaseId, title: impl Into<String>, definition: PhaseDefinition) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            order: 0,
            is_active: default_active(),
            definition,
        }
    }
}

/// Active phases sorted by workflow order, ties kept in catalog order.
pub fn active_in_order<'a>(phases: impl IntoIterator<Item = &'a Phase>) -> Vec<&'a Phase> {
    let mut active: Vec<&Phase> = phases.into_iter().filter(|phase| phase.is_active).collect();
    active.sort_by_key(|phase| phase.order);
    active
}
