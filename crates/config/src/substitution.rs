use anyhow::Result;
use regex::Regex;
use std::env;
use tracing::{debug, warn};

/// Substitute environment variables in the format ${VAR_NAME} or $VAR_NAME
///
/// Unset variables keep their placeholder; the validator reports them later.
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{(\w+)\}|\$(\w+)").expect("env var pattern is valid");
    let mut result = content.to_string();

    for caps in re.captures_iter(content) {
        let var_name = caps
            .get(1)
            .or(caps.get(2))
            .expect("one capture group matches")
            .as_str();
        let placeholder = caps.get(0).expect("whole match").as_str();

        match env::var(var_name) {
            Ok(value) => {
                debug!("Substituting environment variable: {}", var_name);
                result = result.replace(placeholder, &value);
            }
            Err(_) => {
                warn!("Environment variable '{}' not set", var_name);
            }
        }
    }

    Ok(result)
}

/// Check if a string contains unresolved environment variable placeholders
pub fn has_unresolved_env_vars(content: &str) -> bool {
    let re = Regex::new(r"\$\{(\w+)\}|\$(\w+)").expect("env var pattern is valid");
    re.is_match(content)
}
