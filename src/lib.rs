//! # Taskd - Task Tracking Service
//!
//! A minimal HTTP service for tracking tasks, backed by SQLite.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, complete, and delete tasks
//! - **Filtering & Pagination**: Status filter, title search, paged listing
//! - **Bulk Operations**: Duplicate-safe bulk deletion by id
//! - **Typed Errors**: Validation, not-found, and store failures are
//!   distinct outcomes mapped to distinct HTTP status codes
//! - **Schema Migrations**: Versioned schema applied at startup
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskd::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
pub mod server;
