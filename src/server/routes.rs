//! Route table for the task API.

use crate::server::handlers;
use crate::server::state::AppState;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

/// Builds the router with all endpoints and request tracing.
///
/// Paths keep their trailing slashes; `/tasks/bulk-delete` is registered
/// alongside `/tasks/{id}/` and the two never overlap because only the
/// id routes carry the trailing segment.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/tasks/", post(handlers::create_task).get(handlers::list_tasks))
        .route("/tasks/bulk-delete", delete(handlers::bulk_delete_tasks))
        .route(
            "/tasks/{id}/",
            get(handlers::get_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
