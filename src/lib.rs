//! phase-prompt: assemble innovation phase prompts from authored chunks and form answers.
//!
//! The core is [`assemble`]: it interleaves a phase's static chunks with the
//! submitted field values by position. The `app` layer wraps it with catalog
//! loading, response storage and the audit trail.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::{MemoryStore, TomlPhaseCatalog};
pub use app::AppContext;
pub use app::api::{CatalogOptions, PhaseReport, check_at, list_phases_at, read_form, render_at};
pub use app::commands::generate::{
    GenerateRequest, execute as generate_response, list_activity, list_responses,
};
pub use app::commands::project::{
    CreateProjectRequest, create as create_project, list as list_projects,
};
pub use domain::{
    ActivityAction, ActivityEntry, Actor, ActorId, ActorRole, AppConfig, AppError,
    DefinitionIssue, Field, FieldType, FormSubmission, FormValue, NewProject, Phase,
    PhaseDefinition, PhaseId, PhaseResponse, Project, ProjectId, PromptChunk, ResponseId, assemble,
    assemble_phase,
};
