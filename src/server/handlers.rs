//! HTTP handlers mapping the task endpoints onto the task store.
//!
//! Handlers contain no business logic beyond parameter shaping: each one
//! forwards to a store operation and wraps the outcome in the documented
//! response body. Error translation lives in [`crate::server::error`].

use crate::libs::messages::Message;
use crate::libs::task::{BulkDeleteOutcome, Page, Task, TaskPage};
use crate::server::dto::{
    BulkDeleteRequest, CreateTaskRequest, CreateTaskResponse, DeleteTaskResponse, HealthResponse,
    ListTasksQuery, UpdateTaskRequest, UpdateTaskResponse,
};
use crate::server::error::ApiError;
use crate::server::state::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;

/// `POST /tasks/`: create a task.
///
/// Returns 200 with the new task id, 400 on validation failure.
pub async fn create_task(
    State(state): State<AppState>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<Json<CreateTaskResponse>, ApiError> {
    let task = state.with_tasks(move |tasks| tasks.create(body.into())).await?;

    tracing::info!(task_id = task.id, "task created");

    Ok(Json(CreateTaskResponse {
        message: Message::TaskCreated.to_string(),
        task_id: task.id,
    }))
}

/// `GET /tasks/`: list tasks, filtered and paginated.
///
/// `is_completed`, `q`, `page` and `size` are optional and combine with
/// logical AND; a page past the end returns an empty list with the
/// correct total.
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<TaskPage>, ApiError> {
    let filter = query.filter();
    let page = Page {
        number: query.page,
        size: query.size,
    };
    let page = state.with_tasks(move |tasks| tasks.list(&filter, page)).await?;

    Ok(Json(page))
}

/// `GET /tasks/{id}/`: fetch one task.
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, ApiError> {
    let task = state.with_tasks(move |tasks| tasks.get(id)).await?;

    Ok(Json(task))
}

/// `PUT /tasks/{id}/`: partial update.
///
/// Fields absent from the body keep their stored values.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTaskRequest>,
) -> Result<Json<UpdateTaskResponse>, ApiError> {
    let task = state.with_tasks(move |tasks| tasks.update(id, body.into())).await?;

    tracing::info!(task_id = id, "task updated");

    Ok(Json(UpdateTaskResponse {
        message: Message::TaskUpdated.to_string(),
        task,
    }))
}

/// `DELETE /tasks/{id}/`: delete one task.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteTaskResponse>, ApiError> {
    let deleted_task_id = state.with_tasks(move |tasks| tasks.delete(id)).await?;

    tracing::info!(task_id = deleted_task_id, "task deleted");

    Ok(Json(DeleteTaskResponse {
        message: Message::TaskDeleted.to_string(),
        deleted_task_id,
    }))
}

/// `DELETE /tasks/bulk-delete`: delete many tasks by id.
///
/// Absent ids are reported in `not_found`; the request only fails with
/// 404 when none of the ids exist.
pub async fn bulk_delete_tasks(
    State(state): State<AppState>,
    Json(body): Json<BulkDeleteRequest>,
) -> Result<Json<BulkDeleteOutcome>, ApiError> {
    let outcome = state
        .with_tasks(move |tasks| tasks.delete_many(&body.task_ids))
        .await?;

    tracing::info!("{}", Message::TasksDeletedCount(outcome.deleted.len()));

    Ok(Json(outcome))
}

/// `GET /health`: store connectivity probe.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    state.ping().await?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}
