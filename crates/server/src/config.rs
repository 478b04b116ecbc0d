//! Server configuration

use crate::error::{Result, ServerError};
use std::net::SocketAddr;

/// Default HTTP port for the service
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Bind configuration for the HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to (e.g., "0.0.0.0" or "127.0.0.1")
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Parse the configured host and port into a socket address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ServerError::InvalidAddress(format!("{}:{}", self.host, self.port)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new("0.0.0.0", DEFAULT_HTTP_PORT)
    }
}
