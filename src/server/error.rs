//! Translation of service errors into HTTP responses.

use crate::libs::error::TaskError;
use crate::server::dto::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Wrapper carrying a `TaskError` across the handler boundary.
///
/// Validation failures map to 400 with the offending field, missing ids
/// to 404, and store-side failures to 500. Store failures are logged
/// here so no failure path is silently swallowed.
#[derive(Debug)]
pub struct ApiError(TaskError);

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            TaskError::Validation { .. } => StatusCode::BAD_REQUEST,
            TaskError::NotFound(_) | TaskError::NoneExist { .. } => StatusCode::NOT_FOUND,
            TaskError::Store(_) | TaskError::Pool(_) | TaskError::Runtime(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match &self.0 {
            TaskError::Validation { .. } => "VALIDATION_ERROR",
            TaskError::NotFound(_) | TaskError::NoneExist { .. } => "TASK_NOT_FOUND",
            TaskError::Store(_) | TaskError::Pool(_) | TaskError::Runtime(_) => "STORE_ERROR",
        }
    }

    fn field(&self) -> Option<&'static str> {
        match &self.0 {
            TaskError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("{}", self.0);
        }

        let body = ErrorResponse {
            error: self.error_code().to_string(),
            message: self.0.to_string(),
            field: self.field().map(str::to_string),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400_with_field() {
        let err = ApiError::from(TaskError::validation("title", "is required"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.field(), Some("title"));
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::from(TaskError::NotFound(42));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.field(), None);
    }

    #[test]
    fn none_exist_maps_to_404() {
        let err = ApiError::from(TaskError::NoneExist { missing: vec![1, 2] });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_failure_maps_to_500() {
        let err = ApiError::from(TaskError::Runtime("worker gone".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "STORE_ERROR");
    }
}
