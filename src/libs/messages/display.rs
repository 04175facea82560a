//! Display implementation for taskd messages.
//!
//! All user-facing message text lives here, so response bodies and log
//! lines stay consistent and the wording can be changed in one place.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated => "Task created successfully!".to_string(),
            Message::TaskUpdated => "Task updated successfully".to_string(),
            Message::TaskDeleted => "Task deleted successfully".to_string(),
            Message::TasksDeletedCount(count) => format!("Deleted {} task(s)", count),

            // === SERVER MESSAGES ===
            Message::ServerStarting(addr) => format!("Starting server on {}", addr),
            Message::ServerStopped => "Server shutdown complete".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => {
                format!("Running migration {}: {}", version, name)
            }
            Message::MigrationCompleted(version) => format!("Migration {} completed", version),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs migration".to_string(),
        };
        write!(f, "{}", text)
    }
}
