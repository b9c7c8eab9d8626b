//! # HTTP Server
//!
//! Assembles the book, health, and documentation routers into one
//! service with CORS and request tracing applied.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::storage::BookStore;

use super::book_routes::{book_routes, BooksState};
use super::config::HttpServerConfig;
use super::docs_routes::{docs_routes, health_routes};

/// HTTP server for the book API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over an opened store
    pub fn new(config: HttpServerConfig, store: BookStore) -> Self {
        let router = Self::build_router(store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(store: BookStore) -> Router {
        let books_state = Arc::new(BooksState::new(store));

        // All origins are permitted; the service has no notion of a
        // trusted frontend.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            // Health check at root level
            .merge(health_routes())
            // API description at root level
            .merge(docs_routes())
            // Book CRUD endpoints under /books
            .nest("/books", book_routes(books_state))
            .layer(cors)
            // Access log
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(address = %addr, "listening");

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
