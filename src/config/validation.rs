use crate::config::types::{BatchConfig, Config, FetchConfig, ReasoningConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_reasoning_config(&config.reasoning)?;
    validate_batch_config(&config.batch)?;
    validate_fetch_config(&config.fetch)?;
    Ok(())
}

/// Validates reasoning-service configuration
fn validate_reasoning_config(config: &ReasoningConfig) -> Result<(), ConfigError> {
    if config.endpoint.trim().is_empty() {
        return Err(ConfigError::Validation(
            "reasoning endpoint must not be empty".to_string(),
        ));
    }

    if Url::parse(&config.endpoint).is_err() {
        return Err(ConfigError::Validation(format!(
            "reasoning endpoint is not a valid URL: {}",
            config.endpoint
        )));
    }

    if config.model.trim().is_empty() {
        return Err(ConfigError::Validation(
            "reasoning model must not be empty".to_string(),
        ));
    }

    if config.api_key_env.trim().is_empty() {
        return Err(ConfigError::Validation(
            "api-key-env must name an environment variable".to_string(),
        ));
    }

    Ok(())
}

/// Validates batch configuration
fn validate_batch_config(config: &BatchConfig) -> Result<(), ConfigError> {
    if config.max_urls < 1 {
        return Err(ConfigError::Validation(format!(
            "max-urls must be >= 1, got {}",
            config.max_urls
        )));
    }

    if config.max_concurrent < 1 || config.max_concurrent > 100 {
        return Err(ConfigError::Validation(format!(
            "max-concurrent must be between 1 and 100, got {}",
            config.max_concurrent
        )));
    }

    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "fetch timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "fetch user-agent must not be empty".to_string(),
        ));
    }

    Ok(())
}
