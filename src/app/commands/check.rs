//! Definition diagnostics for authored phases.

use tracing::warn;

use crate::domain::{AppError, DefinitionIssue, PhaseId};
use crate::ports::PhaseCatalog;

/// Diagnostics for one phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseReport {
    pub id: PhaseId,
    pub title: String,
    pub issues: Vec<DefinitionIssue>,
}

impl PhaseReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check every phase, or only `only` when given. Inactive phases are included.
pub fn execute<C: PhaseCatalog + ?Sized>(
    catalog: &C,
    only: Option<PhaseId>,
) -> Result<Vec<PhaseReport>, AppError> {
    let phases = match only {
        Some(id) => vec![catalog.phase(id)?.ok_or(AppError::PhaseNotFound(id))?],
        None => catalog.phases()?,
    };

    let reports: Vec<PhaseReport> = phases
        .into_iter()
        .map(|phase| PhaseReport {
            issues: phase.definition.issues(),
            id: phase.id,
            title: phase.title,
        })
        .collect();

    for report in &reports {
        for issue in &report.issues {
            warn!(phase = %report.id, "{}", issue);
        }
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;
    use crate::domain::{Field, Phase, PhaseDefinition, PromptChunk};
    use crate::testing;

    #[test]
    fn clean_phase_has_no_issues() {
        let store = MemoryStore::new();
        store.insert_phase(testing::innovation_phase());

        let reports = execute(&store, None).unwrap();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].is_clean());
    }

    #[test]
    fn reports_issues_for_requested_phase() {
        let store = MemoryStore::new();
        store.insert_phase(testing::innovation_phase());
        store.insert_phase(Phase::new(
            PhaseId::new(2),
            "Broken",
            PhaseDefinition::new(
                vec![PromptChunk::new("a", 0), PromptChunk::new("b", 0)],
                vec![Field::new("x", 0)],
            ),
        ));

        let reports = execute(&store, Some(PhaseId::new(2))).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].issues, vec![DefinitionIssue::DuplicateChunkOrder { order: 0 }]);
    }

    #[test]
    fn unknown_phase_is_an_error() {
        let store = MemoryStore::new();
        assert!(matches!(execute(&store, Some(PhaseId::new(3))), Err(AppError::PhaseNotFound(_))));
    }
}
