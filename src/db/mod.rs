//! Database layer for the taskd service.
//!
//! Provides the persistence layer built on SQLite: connection pooling,
//! schema migrations, and the transactional task store. Each service
//! operation checks a connection out of the pool and executes within
//! exactly one transaction.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskd::db::db::Db;
//! use taskd::libs::task::NewTask;
//!
//! let db = Db::open(std::path::Path::new("taskd.db"))?;
//! let mut tasks = db.tasks()?;
//! let task = tasks.create(NewTask::new("Review code", Some("Check PR #123")))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Core database connection and pooling module.
///
/// Provides the `Db` handle that opens the SQLite file, configures the
/// connection pool, and applies migrations at startup.
pub mod db;

/// Database schema migration system.
///
/// Handles versioned schema changes and tracks applied versions.
pub mod migrations;

/// Core task management operations.
///
/// CRUD, filtering, pagination, and bulk deletion for task records.
pub mod tasks;
