use crate::domain::{ActivityEntry, AppError};

/// Port for the audit trail.
pub trait ActivityLog {
    fn record(&self, entry: ActivityEntry) -> Result<(), AppError>;

    /// All entries, newest first.
    fn entries(&self) -> Result<Vec<ActivityEntry>, AppError>;
}
