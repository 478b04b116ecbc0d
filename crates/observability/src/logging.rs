//! Logging initialization
//!
//! Sets up the tracing subscriber for the service. The output format is
//! chosen at startup (CLI flag) and the level comes from `RUST_LOG`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    #[default]
    Pretty,
    /// JSON format for log aggregation
    Json,
    /// Single-line compact format
    Compact,
}

impl LogFormat {
    /// Parse from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Some(Self::Pretty),
            "json" => Some(Self::Json),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown log format: {}", s))
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the logging system
///
/// Log level is controlled via the `RUST_LOG` environment variable
/// (e.g., `info`, `debug`, `orders=debug,info`). Defaults to `info`.
pub fn init_logging(service_name: &str, format: LogFormat) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter());

    match format {
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(true);
            registry.with(layer).init();
        }
        LogFormat::Json => {
            registry.with(fmt::layer().json()).init();
        }
        LogFormat::Compact => {
            registry.with(fmt::layer().compact()).init();
        }
    }

    tracing::info!(
        service = service_name,
        format = ?format,
        "Logging initialized"
    );

    Ok(())
}

/// Initialize logging with default settings (pretty format, info level)
pub fn init_default_logging(service_name: &str) -> anyhow::Result<()> {
    init_logging(service_name, LogFormat::default())
}
