//! HTTP server implementation using Axum
//!
//! Wraps an Axum router with bind, serve, and graceful shutdown handling
//! behind the [`Server`](crate::Server) trait.

use async_trait::async_trait;
use axum::Router;
use parking_lot::RwLock;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::error::{Result, ServerError};
use crate::traits::Server;

/// HTTP server over an application-provided router.
///
/// # Example
///
/// ```ignore
/// use server::{HttpServer, ServerConfig, ServerExt};
///
/// let config = ServerConfig::new("127.0.0.1", 8080);
/// let server = HttpServer::new(config, router);
/// server.run_with_ctrl_c().await?;
/// ```
#[derive(Clone)]
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
    running: Arc<AtomicBool>,
    bound_addr: Arc<RwLock<Option<SocketAddr>>>,
}

impl HttpServer {
    /// Create a new HTTP server serving the given router
    pub fn new(config: ServerConfig, router: Router) -> Self {
        Self {
            config,
            router,
            running: Arc::new(AtomicBool::new(false)),
            bound_addr: Arc::new(RwLock::new(None)),
        }
    }

    /// Get the server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the router (for testing or inspection)
    pub fn router(&self) -> &Router {
        &self.router
    }
}

#[async_trait]
impl Server for HttpServer {
    fn name(&self) -> &str {
        "http"
    }

    fn address(&self) -> Option<SocketAddr> {
        *self.bound_addr.read()
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    async fn run(&self, shutdown: CancellationToken) -> Result<()> {
        let addr = self.config.socket_addr()?;

        info!(%addr, "Starting HTTP server");

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::bind(addr.to_string(), e))?;

        let local_addr = listener.local_addr().map_err(ServerError::Io)?;
        *self.bound_addr.write() = Some(local_addr);

        info!(%local_addr, "HTTP server listening");

        self.running.store(true, Ordering::SeqCst);

        let result = axum::serve(listener, self.router.clone())
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                info!("HTTP server received shutdown signal");
            })
            .await;

        self.running.store(false, Ordering::SeqCst);
        *self.bound_addr.write() = None;

        match result {
            Ok(()) => {
                info!("HTTP server shutdown complete");
                Ok(())
            }
            Err(e) => {
                error!(%e, "HTTP server error");
                Err(ServerError::Io(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ServerExt;
    use axum::routing::get;
    use std::time::Duration;

    fn test_router() -> Router {
        Router::new().route("/", get(|| async { "ok" }))
    }

    #[tokio::test]
    async fn test_http_server_shutdown() {
        // Ephemeral port
        let config = ServerConfig::new("127.0.0.1", 0);
        let server = HttpServer::new(config, test_router());
        let (handle, token) = server.spawn();

        tokio::time::sleep(Duration::from_millis(100)).await;

        token.cancel();

        let result = tokio::time::timeout(Duration::from_secs(5), handle).await;
        assert!(result.is_ok(), "Server should shutdown within timeout");
    }

    #[test]
    fn test_http_server_name() {
        let config = ServerConfig::new("127.0.0.1", 8080);
        let server = HttpServer::new(config, test_router());
        assert_eq!(server.name(), "http");
        assert!(!server.is_running());
    }
}
