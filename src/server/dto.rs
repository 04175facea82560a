//! Request and response bodies for the HTTP surface.

use crate::libs::task::{NewTask, Task, TaskFilter, TaskPatch};
use crate::libs::validation;
use serde::{Deserialize, Serialize};

// --- Requests ---

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl From<CreateTaskRequest> for NewTask {
    fn from(body: CreateTaskRequest) -> Self {
        NewTask {
            title: body.title,
            description: body.description,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_completed: Option<bool>,
}

impl From<UpdateTaskRequest> for TaskPatch {
    fn from(body: UpdateTaskRequest) -> Self {
        TaskPatch {
            title: body.title,
            description: body.description,
            is_completed: body.is_completed,
        }
    }
}

/// Query string for `GET /tasks/`; missing pagination fields take the
/// documented defaults, everything else is validated by the service.
#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    pub is_completed: Option<bool>,
    pub q: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
}

impl ListTasksQuery {
    pub fn filter(&self) -> TaskFilter {
        TaskFilter {
            completed: self.is_completed,
            search_term: self.q.clone(),
        }
    }
}

fn default_page() -> u32 {
    validation::DEFAULT_PAGE
}

fn default_size() -> u32 {
    validation::DEFAULT_PAGE_SIZE
}

#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    pub task_ids: Vec<i64>,
}

// --- Responses ---

#[derive(Debug, Serialize)]
pub struct CreateTaskResponse {
    pub message: String,
    pub task_id: i64,
}

#[derive(Debug, Serialize)]
pub struct UpdateTaskResponse {
    pub message: String,
    pub task: Task,
}

#[derive(Debug, Serialize)]
pub struct DeleteTaskResponse {
    pub message: String,
    pub deleted_task_id: i64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}
