use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ordertrack")]
#[command(about = "OrderTrack - an order lifecycle tracking service")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the service with the given configuration
    Start {
        /// Path to the configuration file
        #[arg(short, long, default_value = "config/ordertrack.yaml")]
        config: PathBuf,

        /// Override the bind host from the configuration
        #[arg(long)]
        host: Option<String>,

        /// Override the HTTP port from the configuration
        #[arg(short, long)]
        port: Option<u16>,

        /// Log output format (pretty, json, or compact)
        #[arg(long, default_value = "pretty")]
        log_format: String,
    },

    /// Validate configuration without starting the service
    Validate {
        /// Path to the configuration file
        #[arg(short, long, default_value = "config/ordertrack.yaml")]
        config: PathBuf,
    },

    /// Initialize a new configuration file with defaults
    Init {
        /// Output path for the new configuration file
        #[arg(short, long, default_value = "ordertrack.yaml")]
        output: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
