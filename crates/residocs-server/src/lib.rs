//! HTTP server for the GestRésidence documentation site.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - Server-rendered documentation pages under `/documentation/{section}`
//! - JSON API endpoints for navigation and site configuration
//! - Static assets (stylesheet, script) under `/assets/`
//!
//! # Static Asset Modes
//!
//! - **Development** (default): Serves files from the workspace `assets/`
//!   directory
//! - **Production** (`embed` feature): Embeds assets in the binary
//!
//! # Quick Start
//!
//! ```ignore
//! use residocs_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 7979,
//!         version: "1.0.0".to_string(),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► Rust axum server (residocs-server)
//!                        │
//!                        ├─► Page routes ──► residocs-renderer (HTML per request)
//!                        │
//!                        ├─► API routes (navigation, config)
//!                        │
//!                        └─► Static assets (embedded or filesystem)
//! ```

mod app;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use residocs_renderer::SiteLinks;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Site title, shown in the shell and page titles.
    pub site_title: String,
    /// Source-control hosting page, linked from the footer.
    pub repository_url: String,
    /// Support contact address, linked from the Support section.
    pub support_email: String,
    /// Application version (for cache invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let links = SiteLinks::default();
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            site_title: "GestRésidence".to_string(),
            repository_url: links.repository_url,
            support_email: links.support_email,
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState {
        site_title: config.site_title.clone(),
        links: SiteLinks {
            repository_url: config.repository_url.clone(),
            support_email: config.support_email.clone(),
        },
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

/// Create server configuration from the application config.
///
/// # Arguments
///
/// * `config` - Application configuration
/// * `version` - Application version
#[must_use]
pub fn server_config_from_config(
    config: &residocs_config::Config,
    version: String,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        site_title: config.site.title.clone(),
        repository_url: config.site.repository_url.clone(),
        support_email: config.site.support_email.clone(),
        version,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_server_config_from_config_maps_all_fields() {
        let app_config = residocs_config::Config::default();
        let config = server_config_from_config(&app_config, "2.0.0".to_owned());

        assert_eq!(config.host, app_config.server.host);
        assert_eq!(config.port, app_config.server.port);
        assert_eq!(config.site_title, app_config.site.title);
        assert_eq!(config.repository_url, app_config.site.repository_url);
        assert_eq!(config.support_email, app_config.site.support_email);
        assert_eq!(config.version, "2.0.0");
    }

    #[test]
    fn test_default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.site_title, "GestRésidence");
    }
}
