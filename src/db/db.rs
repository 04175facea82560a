use crate::db::migrations;
use crate::db::tasks::Tasks;
use crate::libs::error::TaskError;
use anyhow::{Context, Result};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::fs;
use std::path::Path;

pub const DB_FILE_NAME: &str = "taskd.db";

/// Shared handle to the SQLite store.
///
/// Cloning is cheap (the pool is reference-counted); every request
/// checks a connection out of the pool for the duration of exactly one
/// service operation.
#[derive(Clone)]
pub struct Db {
    pool: Pool<SqliteConnectionManager>,
}

impl Db {
    /// Opens the database file, creating parent directories if needed,
    /// and applies any pending schema migrations.
    pub fn open(path: &Path) -> Result<Db> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        // WAL lets pooled readers proceed while a writer holds the lock;
        // the busy timeout covers the remaining writer-vs-writer window.
        let manager = SqliteConnectionManager::file(path).with_init(|conn| {
            conn.execute_batch(
                "PRAGMA journal_mode = WAL;
                 PRAGMA foreign_keys = ON;
                 PRAGMA busy_timeout = 5000;",
            )
        });
        let pool = Pool::builder()
            .build(manager)
            .with_context(|| format!("Failed to open database at {}", path.display()))?;

        let mut conn = pool.get().context("Failed to check out a connection")?;
        migrations::init_with_migrations(&mut conn).context("Database migration failed")?;

        Ok(Db { pool })
    }

    /// Checks a connection out of the pool and wraps it in the task store.
    pub fn tasks(&self) -> Result<Tasks, TaskError> {
        Ok(Tasks::new(self.pool.get()?))
    }

    /// Round trip to the store, used by the health endpoint.
    pub fn ping(&self) -> Result<(), TaskError> {
        let conn = self.pool.get()?;
        conn.query_row("SELECT 1", [], |_| Ok(()))?;
        Ok(())
    }
}
