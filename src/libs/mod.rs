//! Core library modules for the taskd service.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Domain Model**: Task records, filters, pagination, update patches
//! - **Validation**: Field-level constraints checked before persistence
//! - **Error Handling**: Typed outcomes for every service operation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskd::db::db::Db;
//! use taskd::libs::task::NewTask;
//!
//! let db = Db::open(std::path::Path::new("taskd.db"))?;
//! let task = db.tasks()?.create(NewTask::new("Review code", None))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod task;
pub mod validation;
