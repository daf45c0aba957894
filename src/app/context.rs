use crate::ports::{ActivityLog, PhaseCatalog, ProjectStore, ResponseStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<C, S, L>
where
    C: PhaseCatalog,
    S: ProjectStore + ResponseStore,
    L: ActivityLog,
{
    catalog: C,
    store: S,
    activity: L,
}

impl<C, S, L> AppContext<C, S, L>
where
    C: PhaseCatalog,
    S: ProjectStore + ResponseStore,
    L: ActivityLog,
{
    /// Create a new application context.
    pub fn new(catalog: C, store: S, activity: L) -> Self {
        Self { catalog, store, activity }
    }

    /// Get a reference to the phase catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Get a reference to the project and response store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the audit trail.
    pub fn activity(&self) -> &L {
        &self.activity
    }
}
