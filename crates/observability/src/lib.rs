//! Observability infrastructure for OrderTrack
//!
//! This crate provides structured logging via tracing.
//!
//! # Quick Start
//!
//! ```ignore
//! use observability::{init_logging, LogFormat};
//!
//! init_logging("ordertrack", LogFormat::Pretty)?;
//! tracing::info!("Service started");
//! ```

pub mod logging;

pub use logging::{init_default_logging, init_logging, LogFormat};
