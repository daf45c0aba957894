//! Shared fixtures for unit tests.

use crate::domain::{
    Actor, ActorId, ActorRole, Field, Phase, PhaseDefinition, PhaseId, Project, ProjectId,
    PromptChunk,
};

pub const PHASE_ID: PhaseId = PhaseId::new(1);
pub const PROJECT_ID: ProjectId = ProjectId::new(1);
pub const CONSUMER_ID: ActorId = ActorId::new(1);
pub const ADMIN_ID: ActorId = ActorId::new(2);

/// Catalog file equivalent to [`innovation_phase`] plus an archived phase.
pub const CATALOG_TOML: &str = r#"
[[phases]]
id = 1
title = "Fase de Prueba"
description = "Descripción de prueba"
order = 1

[[phases.fields]]
name = "campo_1"
label = "Campo 1"
order = 0

[[phases.fields]]
name = "campo_2"
label = "Campo 2"
order = 1

[[phases.chunks]]
content = "Introduce tu idea: "
order = 0

[[phases.chunks]]
content = " con enfoque en: "
order = 1

[[phases.chunks]]
content = " resultado esperado."
order = 2

[[phases]]
id = 2
title = "Fase Archivada"
is_active = false
"#;

/// Two text fields interleaved with three required chunks.
pub fn innovation_phase() -> Phase {
    let definition = PhaseDefinition::new(
        vec![
            PromptChunk::new("Introduce tu idea: ", 0),
            PromptChunk::new(" con enfoque en: ", 1),
            PromptChunk::new(" resultado esperado.", 2),
        ],
        vec![
            Field::new("campo_1", 0).with_label("Campo 1"),
            Field::new("campo_2", 1).with_label("Campo 2"),
        ],
    );
    let mut phase = Phase::new(PHASE_ID, "Fase de Prueba", definition);
    phase.description = "Descripción de prueba".to_string();
    phase.order = 1;
    phase
}

pub fn consumer() -> Actor {
    Actor::new(CONSUMER_ID, "consumer_user", ActorRole::Consumer)
}

pub fn admin() -> Actor {
    Actor::new(ADMIN_ID, "admin_user", ActorRole::Administrator)
}

/// Project owned by [`consumer`].
pub fn project() -> Project {
    Project::new(PROJECT_ID, CONSUMER_ID, "Proyecto de Prueba")
}

#[test]
fn catalog_fixture_matches_phase_fixture() {
    let catalog = crate::adapters::TomlPhaseCatalog::parse(CATALOG_TOML, "fixture".into()).unwrap();
    let phases = crate::ports::PhaseCatalog::phases(&catalog).unwrap();
    assert_eq!(phases[0], innovation_phase());
}
