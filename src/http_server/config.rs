//! HTTP Server Configuration
//!
//! Host, port, and backing-file settings. The port can come from the
//! `PORT` environment variable; nothing else is read from the
//! environment and no command-line arguments are recognized.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 4000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path of the backing JSON document (default: "db.json")
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_data_path() -> PathBuf {
    PathBuf::from("db.json")
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_path: default_data_path(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with the specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Default config with the port taken from the `PORT` environment
    /// variable when present and parseable.
    pub fn from_env() -> Self {
        match std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            Some(port) => Self::with_port(port),
            None => Self::default(),
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
