//! Server infrastructure for OrderTrack
//!
//! HTTP server with unified lifecycle management and graceful shutdown.
//!
//! The [`Server`] trait provides a consistent interface for running and
//! monitoring servers; [`ServerExt`] adds `spawn()` and `run_with_ctrl_c()`.
//! Shutdown coordination uses `CancellationToken` from `tokio_util`, so
//! cancelling a parent token cancels all child tokens.
//!
//! # Quick Start
//!
//! ```ignore
//! use server::{HttpServer, ServerConfig, ServerExt};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::new("0.0.0.0", 8080);
//!     let server = HttpServer::new(config, router);
//!     server.run_with_ctrl_c().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod shutdown;
pub mod traits;

pub use config::{ServerConfig, DEFAULT_HTTP_PORT};
pub use error::{Result, ServerError};
pub use http::HttpServer;
pub use shutdown::ShutdownController;
pub use traits::{Server, ServerExt};
