//! Graceful shutdown coordination
//!
//! Built on `tokio_util::sync::CancellationToken` so one trigger (Ctrl+C
//! or a manual call) can fan out to every task holding a child token.

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Coordinates graceful shutdown across tasks.
#[derive(Clone)]
pub struct ShutdownController {
    token: CancellationToken,
}

impl Default for ShutdownController {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownController {
    /// Create a new shutdown controller
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Create a controller that cancels its token when Ctrl+C is received
    pub fn with_ctrl_c() -> Self {
        let controller = Self::new();
        let token = controller.token.clone();

        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C, initiating graceful shutdown...");
                    token.cancel();
                }
                Err(e) => {
                    warn!("Failed to listen for Ctrl+C: {}", e);
                }
            }
        });

        controller
    }

    /// Get a child token, cancelled when this controller is cancelled.
    ///
    /// Child tokens can also be cancelled independently of the parent.
    pub fn child_token(&self) -> CancellationToken {
        self.token.child_token()
    }

    /// Get a clone of the main token
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Trigger shutdown manually
    pub fn shutdown(&self) {
        info!("Manual shutdown triggered");
        self.token.cancel();
    }

    /// Check if shutdown has been triggered
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait for shutdown to be triggered
    pub async fn wait_for_shutdown(&self) {
        self.token.cancelled().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_manual_shutdown() {
        let controller = ShutdownController::new();
        let token = controller.child_token();

        assert!(!controller.is_cancelled());
        assert!(!token.is_cancelled());

        controller.shutdown();

        assert!(controller.is_cancelled());
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn test_child_token_independence() {
        let controller = ShutdownController::new();
        let child1 = controller.child_token();
        let child2 = controller.child_token();

        child1.cancel();

        assert!(child1.is_cancelled());
        assert!(!child2.is_cancelled());
        assert!(!controller.is_cancelled());

        controller.shutdown();

        assert!(child2.is_cancelled());
    }
}
