use crate::*;
use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    #[error("Service name is required")]
    MissingServiceName,

    #[error("Invalid version format: {0}. Must be in format X.Y.Z (e.g., 1.0.0)")]
    InvalidVersionFormat(String),

    #[error("HTTP host is required")]
    MissingHttpHost,

    #[error("HTTP port must be non-zero")]
    InvalidHttpPort,

    #[error("Unresolved environment variable in field '{field}': {value}")]
    UnresolvedEnvVar { field: String, value: String },
}

#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, field: &str, message: &str) {
        self.warnings.push(ValidationWarning {
            field: field.to_string(),
            message: message.to_string(),
        });
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

pub fn validate_config(config: &AppConfig) -> ValidationReport {
    let mut report = ValidationReport::new();

    validate_service(&config.service, &mut report);
    validate_http(&config.http, &mut report);

    report
}

fn validate_service(service: &ServiceConfig, report: &mut ValidationReport) {
    if service.name.is_empty() {
        report.add_error(ValidationError::MissingServiceName);
    }

    if service.description.is_empty() {
        report.add_warning("service.description", "Service description is empty");
    }

    let version_regex = Regex::new(r"^\d+\.\d+\.\d+$").unwrap();
    if !version_regex.is_match(&service.version) {
        report.add_error(ValidationError::InvalidVersionFormat(
            service.version.clone(),
        ));
    }
}

fn validate_http(http: &HttpConfig, report: &mut ValidationReport) {
    if http.host.is_empty() {
        report.add_error(ValidationError::MissingHttpHost);
    }

    if substitution::has_unresolved_env_vars(&http.host) {
        report.add_error(ValidationError::UnresolvedEnvVar {
            field: "http.host".to_string(),
            value: http.host.clone(),
        });
    }

    if http.port == 0 {
        report.add_error(ValidationError::InvalidHttpPort);
    }

    if http.port < 1024 && http.port != 0 {
        report.add_warning(
            "http.port",
            "Ports below 1024 typically require elevated privileges",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        generate_default_config()
    }

    #[test]
    fn test_default_config_is_valid() {
        let report = validate_config(&valid_config());
        assert!(report.is_valid(), "errors: {:?}", report.errors);
    }

    #[test]
    fn test_missing_service_name() {
        let mut config = valid_config();
        config.service.name = String::new();
        let report = validate_config(&config);
        assert!(!report.is_valid());
        assert!(matches!(
            report.errors[0],
            ValidationError::MissingServiceName
        ));
    }

    #[test]
    fn test_invalid_version_format() {
        let mut config = valid_config();
        config.service.version = "1.0".to_string();
        let report = validate_config(&config);
        assert!(report
            .errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidVersionFormat(_))));
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut config = valid_config();
        config.http.port = 0;
        let report = validate_config(&config);
        assert!(report
            .errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidHttpPort)));
    }

    #[test]
    fn test_unresolved_env_var_in_host() {
        let mut config = valid_config();
        config.http.host = "${ORDERTRACK_HOST}".to_string();
        let report = validate_config(&config);
        assert!(report
            .errors
            .iter()
            .any(|e| matches!(e, ValidationError::UnresolvedEnvVar { .. })));
    }

    #[test]
    fn test_privileged_port_warns() {
        let mut config = valid_config();
        config.http.port = 80;
        let report = validate_config(&config);
        assert!(report.is_valid());
        assert!(!report.warnings.is_empty());
    }
}
