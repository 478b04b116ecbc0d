//! OrderTrack CLI and server binary
//!
//! Entry point for the OrderTrack service. Provides commands for
//! initializing, validating, and starting the service.

use anyhow::{Context, Result};
use cli::{Cli, Commands};
use config::{generate_default_config, load_config, save_config, validate_config, AppConfig};
use observability::{init_default_logging, init_logging, LogFormat};
use orders::api::{create_api_state, create_router};
use orders::{InMemoryOrderStore, OrderManager};
use server::{HttpServer, ServerConfig, ServerExt};
use std::path::Path;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Start {
            config,
            host,
            port,
            log_format,
        } => {
            let format: LogFormat = log_format
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            init_logging("ordertrack", format)?;

            info!("Executing 'start' command");
            start_service(config, host, port).await
        }
        Commands::Validate { config } => {
            init_default_logging("ordertrack")?;

            info!("Executing 'validate' command");
            validate_command(config).await
        }
        Commands::Init { output } => {
            init_default_logging("ordertrack")?;

            info!("Executing 'init' command");
            init_command(output).await
        }
    }
}

async fn start_service<P: AsRef<Path>>(
    config_path: P,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    let config_path = config_path.as_ref();

    let config = load_config(config_path)?;
    let report = validate_config(&config);

    if !report.warnings.is_empty() {
        warn!("Configuration warnings:");
        for warning in &report.warnings {
            warn!(field = %warning.field, message = %warning.message);
        }
    }

    if !report.is_valid() {
        error!(
            error_count = report.errors.len(),
            "Configuration validation failed"
        );
        for err in &report.errors {
            error!("{}", err);
        }
        anyhow::bail!("Cannot start service due to configuration errors");
    }

    // Apply CLI overrides over the loaded configuration
    let host = host_override.unwrap_or_else(|| config.http.host.clone());
    let port = port_override.unwrap_or(config.http.port);

    if port_override.is_none() {
        debug!(port, "Using configured HTTP port");
    }

    info!(service = %config.service.name, %host, port, "Starting service");

    run_http_server(&config, host, port).await
}

async fn run_http_server(config: &AppConfig, host: String, port: u16) -> Result<()> {
    let store = Arc::new(InMemoryOrderStore::new());
    let manager = OrderManager::new(store);

    let router = create_router(create_api_state(manager)).layer(TraceLayer::new_for_http());

    let server_config = ServerConfig::new(host, port);
    let server = HttpServer::new(server_config, router);

    info!(service = %config.service.name, "HTTP API ready");

    server.run_with_ctrl_c().await?;

    Ok(())
}

async fn validate_command<P: AsRef<Path>>(config_path: P) -> Result<()> {
    info!(path = ?config_path.as_ref(), "Validating configuration");

    let config = match load_config(&config_path) {
        Ok(c) => c,
        Err(e) => {
            error!(%e, "Failed to load configuration");
            anyhow::bail!(e);
        }
    };

    let report = validate_config(&config);

    println!("\n=== Configuration Validation Report ===\n");

    if !report.warnings.is_empty() {
        println!("Warnings ({}):", report.warnings.len());
        for warning in &report.warnings {
            println!("  [warn] [{}] {}", warning.field, warning.message);
        }
        println!();
    }

    if !report.errors.is_empty() {
        println!("Errors ({}):", report.errors.len());
        for err in &report.errors {
            println!("  [error] {}", err);
        }
        println!();
        anyhow::bail!("Configuration validation failed");
    }

    println!("[ok] Configuration is valid!");
    println!();
    println!("Service: {}", config.service.name);
    println!("Version: {}", config.service.version);
    println!("Bind address: {}:{}", config.http.host, config.http.port);

    Ok(())
}

async fn init_command<P: AsRef<Path>>(output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    info!(?output_path, "Initializing new configuration file");

    let config = generate_default_config();

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    save_config(&config, output_path)?;

    println!("[ok] Configuration file created successfully!");
    println!();
    println!("Location: {:?}", output_path);
    println!();
    println!("Next steps:");
    println!("  1. Edit the configuration file to customize settings");
    println!(
        "  2. Run 'ordertrack validate --config {:?}' to check configuration",
        output_path
    );
    println!(
        "  3. Run 'ordertrack start --config {:?}' to start the service",
        output_path
    );

    Ok(())
}
