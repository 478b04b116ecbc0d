use crate::*;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

#[instrument(skip(path))]
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    info!("Loading configuration from: {:?}", path);

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    debug!("Config file content length: {} bytes", content.len());

    // Perform environment variable substitution
    let substituted = substitution::substitute_env_vars(&content)?;
    debug!("Environment variable substitution completed");

    // Parse YAML
    let config: AppConfig = serde_yaml::from_str(&substituted)
        .with_context(|| "Failed to parse YAML configuration")?;

    info!("Configuration loaded successfully");
    Ok(config)
}

#[instrument]
pub fn generate_default_config() -> AppConfig {
    AppConfig {
        service: ServiceConfig {
            name: "OrderTrack".to_string(),
            description: "Order lifecycle tracking service".to_string(),
            version: "1.0.0".to_string(),
        },
        http: HttpConfig::default(),
    }
}

#[instrument]
pub fn save_config<P: AsRef<Path> + std::fmt::Debug>(config: &AppConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    info!("Saving configuration to: {:?}", path);

    let yaml = serde_yaml::to_string(config)
        .with_context(|| "Failed to serialize configuration to YAML")?;

    fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    info!("Configuration saved successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_config() {
        let config = generate_default_config();
        assert_eq!(config.service.name, "OrderTrack");
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.http.host, "0.0.0.0");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let config = generate_default_config();
        save_config(&config, &path).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.service.name, config.service.name);
        assert_eq!(loaded.http.port, config.http.port);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = load_config("/nonexistent/config.yaml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_applies_http_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("minimal.yaml");
        fs::write(
            &path,
            "service:\n  name: OrderTrack\n  version: 1.0.0\n",
        )
        .unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.http.host, "0.0.0.0");
        assert_eq!(loaded.http.port, 8080);
    }
}
