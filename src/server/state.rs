//! Shared application state for request handlers.

use crate::db::db::Db;
use crate::db::tasks::Tasks;
use crate::libs::error::TaskError;

/// Holds the store handle shared by all handlers.
///
/// rusqlite connections are synchronous, so store closures hop onto the
/// blocking thread pool; the async runtime never waits on SQLite
/// directly and no transaction spans an await point.
#[derive(Clone)]
pub struct AppState {
    db: Db,
}

impl AppState {
    pub fn new(db: Db) -> Self {
        AppState { db }
    }

    /// Runs a store operation on the blocking pool with a connection
    /// checked out for exactly the closure's duration.
    pub async fn with_tasks<T, F>(&self, f: F) -> Result<T, TaskError>
    where
        F: FnOnce(&mut Tasks) -> Result<T, TaskError> + Send + 'static,
        T: Send + 'static,
    {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let mut tasks = db.tasks()?;
            f(&mut tasks)
        })
        .await
        .map_err(|join_err| TaskError::Runtime(join_err.to_string()))?
    }

    pub async fn ping(&self) -> Result<(), TaskError> {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || db.ping())
            .await
            .map_err(|join_err| TaskError::Runtime(join_err.to_string()))?
    }
}
