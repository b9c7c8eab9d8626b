//! Documentation & Health Routes
//!
//! Informational endpoints: a liveness probe and a generated OpenAPI
//! description of the book API. Neither is part of the functional CRUD
//! contract.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check route, mounted at the root
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// API description route, mounted at the root
pub fn docs_routes() -> Router {
    Router::new().route("/api-docs", get(api_docs_handler))
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Serve the OpenAPI 3.0 description of the book API
async fn api_docs_handler() -> Json<Value> {
    Json(api_description())
}

/// Build the OpenAPI document describing the five book endpoints.
fn api_description() -> Value {
    let book_schema = json!({
        "type": "object",
        "properties": {
            "id": {
                "type": "string",
                "description": "Server-generated id for the book"
            }
        },
        "additionalProperties": true,
        "example": {
            "id": "V1StGXR8",
            "title": "Dune",
            "author": "Herbert"
        }
    });

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Books API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "A simple library book API"
        },
        "components": {
            "schemas": { "Book": book_schema }
        },
        "paths": {
            "/books": {
                "get": {
                    "summary": "Returns the list of all the books",
                    "responses": {
                        "200": { "description": "List of all books" }
                    }
                },
                "post": {
                    "summary": "Create a new book",
                    "requestBody": { "required": true },
                    "responses": {
                        "200": { "description": "The created book" },
                        "400": { "description": "Body is not a JSON object" },
                        "500": { "description": "Store write failure" }
                    }
                }
            },
            "/books/{id}": {
                "get": {
                    "summary": "Get a book by id",
                    "responses": {
                        "200": { "description": "The book with the given id" },
                        "404": { "description": "The book was not found" }
                    }
                },
                "put": {
                    "summary": "Update a book (shallow merge)",
                    "requestBody": { "required": true },
                    "responses": {
                        "200": { "description": "The updated book" },
                        "404": { "description": "The book was not found" },
                        "500": { "description": "Store write failure" }
                    }
                },
                "delete": {
                    "summary": "Delete a book (idempotent)",
                    "responses": {
                        "200": { "description": "Deleted, or id did not exist" }
                    }
                }
            }
        }
    })
}
