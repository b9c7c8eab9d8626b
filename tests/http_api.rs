//! End-to-End API Tests
//!
//! Drives the assembled router with in-process requests. Covers the five
//! CRUD endpoints, the error paths, and the informational routes.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use bookdb::http_server::{HttpServer, HttpServerConfig};
use bookdb::storage::{BookStore, ID_LEN};

// =============================================================================
// Test Utilities
// =============================================================================

fn test_router(dir: &TempDir) -> Router {
    let store = BookStore::open(dir.path().join("db.json")).unwrap();
    HttpServer::new(HttpServerConfig::default(), store).router()
}

async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

fn as_json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

// =============================================================================
// CRUD Scenario
// =============================================================================

/// POST -> GET -> PUT -> GET -> DELETE -> 404, all against one router.
#[tokio::test]
async fn test_full_crud_scenario() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir);

    // Create
    let (status, body) = send(
        &router,
        "POST",
        "/books",
        Some(json!({"title": "Dune", "author": "Herbert"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let created = as_json(&body);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), ID_LEN);
    assert_eq!(created["title"], "Dune");
    assert_eq!(created["author"], "Herbert");

    // Fetch it back
    let (status, body) = send(&router, "GET", &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), created);

    // Shallow merge
    let (status, body) = send(
        &router,
        "PUT",
        &format!("/books/{id}"),
        Some(json!({"author": "F. Herbert"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated = as_json(&body);
    assert_eq!(updated["id"], json!(id));
    assert_eq!(updated["title"], "Dune");
    assert_eq!(updated["author"], "F. Herbert");

    let (status, body) = send(&router, "GET", &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), updated);

    // Delete, then the record is gone
    let (status, body) = send(&router, "DELETE", &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (status, _) = send(&router, "GET", &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_starts_empty() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir);

    let (status, body) = send(&router, "GET", "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!([]));
}

#[tokio::test]
async fn test_list_preserves_insertion_order() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir);

    for title in ["Dune", "Hyperion", "Solaris"] {
        let (status, _) = send(&router, "POST", "/books", Some(json!({"title": title}))).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&router, "GET", "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    let books = as_json(&body);
    let titles: Vec<_> = books
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["Dune", "Hyperion", "Solaris"]);
}

#[tokio::test]
async fn test_client_supplied_id_is_ignored() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir);

    let (status, body) = send(
        &router,
        "POST",
        "/books",
        Some(json!({"id": "forged00", "title": "Dune"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_ne!(as_json(&body)["id"], json!("forged00"));

    let (status, _) = send(&router, "GET", "/books/forged00", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Error Paths
// =============================================================================

#[tokio::test]
async fn test_get_unknown_id_is_404_with_error_body() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir);

    let (status, body) = send(&router, "GET", "/books/missing0", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let error = as_json(&body);
    assert_eq!(error["code"], 404);
    assert_eq!(error["error"], "book not found");
}

#[tokio::test]
async fn test_put_unknown_id_is_404() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir);

    let (status, _) = send(
        &router,
        "PUT",
        "/books/missing0",
        Some(json!({"title": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_id_is_200() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir);

    let (status, body) = send(&router, "DELETE", "/books/missing0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_post_non_object_body_is_400() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir);

    for body in [json!([1, 2, 3]), json!("Dune"), json!(42)] {
        let (status, _) = send(&router, "POST", "/books", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
    assert_eq!(
        send(&router, "GET", "/books", None).await.1,
        b"[]".to_vec()
    );
}

#[tokio::test]
async fn test_post_malformed_json_is_rejected() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir);

    let request = Request::builder()
        .method("POST")
        .uri("/books")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Durability Through the API
// =============================================================================

#[tokio::test]
async fn test_records_survive_a_restart() {
    let dir = TempDir::new().unwrap();

    let created = {
        let router = test_router(&dir);
        let (status, body) = send(
            &router,
            "POST",
            "/books",
            Some(json!({"title": "Dune", "author": "Herbert"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        as_json(&body)
    };

    // A fresh store + router over the same file sees the record.
    let router = test_router(&dir);
    let id = created["id"].as_str().unwrap();
    let (status, body) = send(&router, "GET", &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), created);
}

// =============================================================================
// Informational Routes
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir);

    let (status, body) = send(&router, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body)["status"], "ok");
}

#[tokio::test]
async fn test_api_docs_endpoint() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir);

    let (status, body) = send(&router, "GET", "/api-docs", None).await;
    assert_eq!(status, StatusCode::OK);
    let doc = as_json(&body);
    assert_eq!(doc["openapi"], "3.0.0");
    assert!(doc["paths"]["/books"].is_object());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir);

    let request = Request::builder()
        .method("GET")
        .uri("/books")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
