mod activity_log;
mod phase_catalog;
mod project_store;
mod response_store;

pub use activity_log::ActivityLog;
pub use phase_catalog::PhaseCatalog;
pub use project_store::ProjectStore;
pub use response_store::ResponseStore;
