//! Server lifecycle traits
//!
//! The [`Server`] trait gives every listener a uniform start/stop surface,
//! and [`ServerExt`] adds spawn and Ctrl+C helpers on top of it.

use async_trait::async_trait;
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;

use crate::error::Result;

/// Core server trait.
///
/// Implementations bind a listener, serve requests until the shutdown
/// token is cancelled, then drain and return.
#[async_trait]
pub trait Server: Send + Sync + 'static {
    /// Returns the server's name for logging and identification.
    fn name(&self) -> &str;

    /// Returns the address the server is bound to, if running.
    fn address(&self) -> Option<SocketAddr>;

    /// Returns true if the server is currently running.
    fn is_running(&self) -> bool;

    /// Runs the server until the shutdown token is cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind or encounters a
    /// fatal error while serving.
    async fn run(&self, shutdown: CancellationToken) -> Result<()>;
}

/// Extension trait providing convenience methods for servers.
///
/// Automatically implemented for all [`Server`] types.
pub trait ServerExt: Server + Sized {
    /// Spawns the server on a new task and returns a handle and shutdown token.
    fn spawn(self) -> (tokio::task::JoinHandle<Result<()>>, CancellationToken) {
        let token = CancellationToken::new();
        let token_clone = token.clone();
        let handle = tokio::spawn(async move { self.run(token_clone).await });
        (handle, token)
    }

    /// Runs the server with automatic Ctrl+C handling.
    fn run_with_ctrl_c(self) -> impl std::future::Future<Output = Result<()>> + Send {
        async move {
            let shutdown = crate::shutdown::ShutdownController::with_ctrl_c();
            self.run(shutdown.token()).await
        }
    }
}

impl<T: Server + Sized> ServerExt for T {}
