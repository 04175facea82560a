use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A persisted task row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub created_at: NaiveDateTime,
}

/// Candidate payload for task creation.
///
/// `title` stays optional here so the validation layer owns the
/// required-field check instead of the deserializer.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl NewTask {
    pub fn new(title: &str, description: Option<&str>) -> Self {
        NewTask {
            title: Some(title.to_string()),
            description: description.map(str::to_string),
        }
    }
}

/// Partial update: absent fields leave the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_completed: Option<bool>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.is_completed.is_none()
    }
}

/// Listing filter; both criteria are optional and combine with AND.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub completed: Option<bool>,
    pub search_term: Option<String>,
}

/// One-based page selector.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub number: u32,
    pub size: u32,
}

impl Default for Page {
    fn default() -> Self {
        Page {
            number: crate::libs::validation::DEFAULT_PAGE,
            size: crate::libs::validation::DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results together with the pagination-independent total.
#[derive(Debug, Clone, Serialize)]
pub struct TaskPage {
    pub total: u64,
    pub page: u32,
    pub size: u32,
    pub tasks: Vec<Task>,
}

/// Result of a bulk delete: ids removed and ids that did not exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkDeleteOutcome {
    pub deleted: Vec<i64>,
    pub not_found: Vec<i64>,
}
