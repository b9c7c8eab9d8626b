//! Book HTTP Routes
//!
//! The five CRUD endpoints over the book collection. Handlers delegate
//! directly to the record store; there is no intermediate business logic.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::Value;

use crate::storage::{Book, BookStore, Fields};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Book state shared across handlers
pub struct BooksState {
    pub store: BookStore,
}

impl BooksState {
    pub fn new(store: BookStore) -> Self {
        Self { store }
    }
}

/// Create book routes; the server mounts these under `/books`.
pub fn book_routes(state: Arc<BooksState>) -> Router {
    Router::new()
        .route("/", get(list_books_handler))
        .route("/", post(create_book_handler))
        .route("/:id", get(get_book_handler))
        .route("/:id", put(update_book_handler))
        .route("/:id", delete(delete_book_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// List the full collection, insertion order preserved
async fn list_books_handler(State(state): State<Arc<BooksState>>) -> Json<Vec<Book>> {
    Json(state.store.get_all())
}

/// Get a single book by id
async fn get_book_handler(
    State(state): State<Arc<BooksState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Book>> {
    let book = state.store.find_by_id(&id)?;
    Ok(Json(book))
}

/// Create a book from an arbitrary JSON object body
async fn create_book_handler(
    State(state): State<Arc<BooksState>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Book>> {
    let fields = object_fields(body)?;
    let book = state.store.insert(fields)?;
    tracing::debug!(id = book.id(), "book created");
    Ok(Json(book))
}

/// Shallow-merge the body into an existing book
async fn update_book_handler(
    State(state): State<Arc<BooksState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Book>> {
    let fields = object_fields(body)?;
    let book = state.store.update(&id, fields)?;
    tracing::debug!(id = %id, "book updated");
    Ok(Json(book))
}

/// Delete a book. Idempotent: deleting an unknown id still returns 200
/// with an empty body.
async fn delete_book_handler(
    State(state): State<Arc<BooksState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.store.delete(&id)?;
    tracing::debug!(id = %id, "book deleted");
    Ok(StatusCode::OK)
}

/// Require the request body to be a JSON object. Its fields pass through
/// verbatim; there is no schema.
fn object_fields(body: Value) -> ApiResult<Fields> {
    match body {
        Value::Object(fields) => Ok(fields),
        _ => Err(ApiError::InvalidBody(
            "expected a JSON object".to_string(),
        )),
    }
}
