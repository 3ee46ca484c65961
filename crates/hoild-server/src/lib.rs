//! HTTP API server for the Hoild site engine.
//!
//! Serves assembled pages as JSON render sequences; the frontend maps each
//! instruction's renderer id to its visual component.
//!
//! # Quick Start
//!
//! ```ignore
//! use hoild_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 7878,
//!         base_url: "https://cms.example.com/wp-json/wp/v2".to_string(),
//!         namespace: "hoild/v1".to_string(),
//!         extra_media_fields: Vec::new(),
//!         version: "1.0.0".to_string(),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Frontend ──HTTP──► axum server (hoild-server)
//!                        │
//!                        ├─► page routes ──► PageAssembler
//!                        │                       │
//!                        │                       ├─► WpClient (CMS reads)
//!                        │                       └─► resolver + dispatcher
//!                        │
//!                        └─► /api/chrome ──► menu + footer loads
//! ```

mod app;
mod error;
mod handlers;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use hoild_content::MediaFields;
use hoild_site::PageAssembler;
use hoild_wp::WpClient;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// WordPress core API base URL (`wp/v2` route).
    pub base_url: String,
    /// Custom REST namespace for chrome endpoints.
    pub namespace: String,
    /// Field names added to the media-id allow-list.
    pub extra_media_fields: Vec<String>,
    /// Application version.
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
            base_url: "http://localhost:8000/wp-json/wp/v2".to_owned(),
            namespace: "hoild/v1".to_owned(),
            extra_media_fields: Vec::new(),
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the listener
/// fails to bind.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let source = Arc::new(WpClient::new(&config.base_url, &config.namespace)?);

    let mut media_fields = MediaFields::new();
    media_fields.extend(config.extra_media_fields.iter().cloned());

    let assembler = PageAssembler::new(source).with_media_fields(media_fields);

    let state = Arc::new(AppState {
        assembler,
        version: config.version.clone(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from Hoild config.
#[must_use]
pub fn server_config_from_config(config: &hoild_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        base_url: config.wordpress.base_url.clone(),
        namespace: config.wordpress.namespace.clone(),
        extra_media_fields: config.resolver.extra_media_fields.clone(),
        version,
    }
}
