//! # HTTP Router
//!
//! Maps the book API endpoints to record store operations and formats
//! JSON responses. Route modules follow one convention: each exposes a
//! `*_routes()` constructor returning an axum `Router`, and the server
//! merges them.

pub mod book_routes;
pub mod config;
pub mod docs_routes;
pub mod errors;
pub mod server;

pub use book_routes::{book_routes, BooksState};
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
