use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use taskd::db::db::Db;
use taskd::server::routes::create_router;
use taskd::server::state::AppState;
use tempfile::TempDir;
use tower::ServiceExt;

fn test_app() -> (TempDir, Router) {
    let temp_dir = tempfile::tempdir().unwrap();
    let db = Db::open(&temp_dir.path().join("taskd.db")).unwrap();
    (temp_dir, create_router(AppState::new(db)))
}

async fn request(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_task(router: &Router, title: &str) -> i64 {
    let (status, body) = request(router, "POST", "/tasks/", Some(json!({ "title": title }))).await;
    assert_eq!(status, StatusCode::OK);
    body["task_id"].as_i64().unwrap()
}

#[tokio::test]
async fn create_returns_message_and_id() {
    let (_guard, router) = test_app();

    let (status, body) = request(
        &router,
        "POST",
        "/tasks/",
        Some(json!({ "title": "Buy milk", "description": "Two liters" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("created"));
    assert!(body["task_id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn create_without_title_is_rejected() {
    let (_guard, router) = test_app();

    let (status, body) = request(&router, "POST", "/tasks/", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["field"], "title");
}

#[tokio::test]
async fn create_with_short_title_is_rejected() {
    let (_guard, router) = test_app();

    let (status, body) =
        request(&router, "POST", "/tasks/", Some(json!({ "title": "ab" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "title");
}

#[tokio::test]
async fn get_returns_full_task_object() {
    let (_guard, router) = test_app();
    let id = create_task(&router, "Buy milk").await;

    let (status, body) = request(&router, "GET", &format!("/tasks/{}/", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"].as_i64().unwrap(), id);
    assert_eq!(body["title"], "Buy milk");
    assert_eq!(body["description"], Value::Null);
    assert_eq!(body["is_completed"], false);
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn get_missing_task_is_404() {
    let (_guard, router) = test_app();

    let (status, body) = request(&router, "GET", "/tasks/999/", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "TASK_NOT_FOUND");
}

#[tokio::test]
async fn list_defaults_on_empty_store() {
    let (_guard, router) = test_app();

    let (status, body) = request(&router, "GET", "/tasks/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["page"], 1);
    assert_eq!(body["size"], 5);
    assert_eq!(body["tasks"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn list_filters_and_paginates() {
    let (_guard, router) = test_app();

    let milk = create_task(&router, "Buy milk").await;
    create_task(&router, "buy bread").await;
    create_task(&router, "Clean house").await;

    let (status, _) = request(
        &router,
        "PUT",
        &format!("/tasks/{}/", milk),
        Some(json!({ "is_completed": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = request(&router, "GET", "/tasks/?q=buy", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);

    let (status, body) = request(&router, "GET", "/tasks/?is_completed=true&q=buy", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["tasks"][0]["id"].as_i64().unwrap(), milk);

    let (status, body) = request(&router, "GET", "/tasks/?page=2&size=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["page"], 2);
    assert_eq!(body["size"], 2);
    assert_eq!(body["tasks"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn list_page_beyond_end_is_empty_not_an_error() {
    let (_guard, router) = test_app();
    create_task(&router, "Only task").await;

    let (status, body) = request(&router, "GET", "/tasks/?page=50", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["tasks"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn list_rejects_short_search_term() {
    let (_guard, router) = test_app();

    let (status, body) = request(&router, "GET", "/tasks/?q=a", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "q");
}

#[tokio::test]
async fn list_rejects_out_of_range_size() {
    let (_guard, router) = test_app();

    let (status, body) = request(&router, "GET", "/tasks/?size=101", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "size");

    let (status, _) = request(&router, "GET", "/tasks/?page=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_applies_only_supplied_fields() {
    let (_guard, router) = test_app();
    let id = create_task(&router, "Buy milk").await;

    let (status, body) = request(
        &router,
        "PUT",
        &format!("/tasks/{}/", id),
        Some(json!({ "is_completed": true })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("updated"));
    assert_eq!(body["task"]["title"], "Buy milk");
    assert_eq!(body["task"]["is_completed"], true);
}

#[tokio::test]
async fn update_missing_task_is_404() {
    let (_guard, router) = test_app();

    let (status, _) = request(
        &router,
        "PUT",
        "/tasks/999/",
        Some(json!({ "title": "New title" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_with_invalid_field_is_400() {
    let (_guard, router) = test_app();
    let id = create_task(&router, "Buy milk").await;

    let (status, body) = request(
        &router,
        "PUT",
        &format!("/tasks/{}/", id),
        Some(json!({ "title": "ab" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "title");
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let (_guard, router) = test_app();
    let id = create_task(&router, "Buy milk").await;

    let (status, body) = request(&router, "DELETE", &format!("/tasks/{}/", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted_task_id"].as_i64().unwrap(), id);

    let (status, _) = request(&router, "GET", &format!("/tasks/{}/", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_task_is_404() {
    let (_guard, router) = test_app();

    let (status, _) = request(&router, "DELETE", "/tasks/999/", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bulk_delete_reports_deleted_and_missing() {
    let (_guard, router) = test_app();
    let a = create_task(&router, "Task one").await;
    let b = create_task(&router, "Task two").await;

    let (status, body) = request(
        &router,
        "DELETE",
        "/tasks/bulk-delete",
        Some(json!({ "task_ids": [a, b, b, 999] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], json!([a, b]));
    assert_eq!(body["not_found"], json!([999]));

    let (_, listing) = request(&router, "GET", "/tasks/", None).await;
    assert_eq!(listing["total"], 0);
}

#[tokio::test]
async fn bulk_delete_with_no_existing_ids_is_404() {
    let (_guard, router) = test_app();
    create_task(&router, "Untouched task").await;

    let (status, body) = request(
        &router,
        "DELETE",
        "/tasks/bulk-delete",
        Some(json!({ "task_ids": [997, 998, 999] })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "TASK_NOT_FOUND");

    let (_, listing) = request(&router, "GET", "/tasks/", None).await;
    assert_eq!(listing["total"], 1);
}

#[tokio::test]
async fn health_reports_ok() {
    let (_guard, router) = test_app();

    let (status, body) = request(&router, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
