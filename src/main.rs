//! bookdb entry point
//!
//! Initializes logging, reads the port from the environment, opens the
//! record store, and serves the book API. A store that cannot be opened
//! is fatal; the process refuses to start.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookdb::http_server::{HttpServer, HttpServerConfig};
use bookdb::storage::BookStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookdb=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = HttpServerConfig::from_env();

    let store = match BookStore::open(&config.data_path) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(path = %config.data_path.display(), error = %e, "failed to open store");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        path = %store.path().display(),
        records = store.len(),
        "store opened"
    );

    let server = HttpServer::new(config, store);
    if let Err(e) = server.start().await {
        tracing::error!(error = %e, "server error");
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
