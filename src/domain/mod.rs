pub mod activity;
pub mod configuration;
pub mod error;
pub mod form;
pub mod identifiers;
pub mod phase;
pub mod project;
pub mod prompt_assemble;
pub mod response;

pub use activity::{ActivityAction, ActivityEntry};
pub use configuration::{AppConfig, CONFIG_FILE};
pub use error::AppError;
pub use form::{FormSubmission, FormValue};
pub use identifiers::{ActorId, PhaseId, ProjectId, ResponseId};
pub use phase::{DefinitionIssue, Field, FieldType, Phase, PhaseDefinition, PromptChunk};
pub use project::{Actor, ActorRole, NewProject, Project};
pub use prompt_assemble::{assemble, assemble_phase};
pub use response::{NewPhaseResponse, PhaseResponse};
