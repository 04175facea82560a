//! Typed error values for the task service.
//!
//! Every service operation returns one of these variants instead of a
//! free-form error, so callers must handle each outcome explicitly:
//! a validation failure names the offending field and rule, a missing
//! id is distinct from a store failure, and store failures always mean
//! the transaction rolled back.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// Client supplied malformed or out-of-range data.
    #[error("{field} {rule}")]
    Validation { field: &'static str, rule: String },

    /// The referenced task id does not exist.
    #[error("Task with id {0} not found")]
    NotFound(i64),

    /// A bulk operation where none of the requested ids exist.
    #[error("None of the requested task ids exist")]
    NoneExist { missing: Vec<i64> },

    /// The underlying store rejected or failed the operation.
    #[error("Database operation failed: {0}")]
    Store(#[from] rusqlite::Error),

    /// No connection could be checked out of the pool.
    #[error("Database connection unavailable: {0}")]
    Pool(#[from] r2d2::Error),

    /// The blocking task running the store operation was lost.
    #[error("Store task failed: {0}")]
    Runtime(String),
}

impl TaskError {
    pub fn validation(field: &'static str, rule: impl Into<String>) -> Self {
        TaskError::Validation {
            field,
            rule: rule.into(),
        }
    }

    /// True for errors caused by the request rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            TaskError::Validation { .. } | TaskError::NotFound(_) | TaskError::NoneExist { .. }
        )
    }
}
