use crate::config::types::{Config, FetcherConfig, MatcherConfig};
use crate::ConfigError;

/// Longest fetch timeout accepted, in seconds
const MAX_TIMEOUT_SECS: u64 = 120;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetcher_config(&config.fetcher)?;
    validate_matcher_config(&config.matcher)?;
    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and {}, got {}",
            MAX_TIMEOUT_SECS, config.timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.user_agent.chars().any(|c| c.is_control()) {
        return Err(ConfigError::Validation(format!(
            "user-agent must not contain control characters, got '{}'",
            config.user_agent.escape_debug()
        )));
    }

    Ok(())
}

/// Validates matcher configuration
fn validate_matcher_config(config: &MatcherConfig) -> Result<(), ConfigError> {
    if config.max_candidates < 1 {
        return Err(ConfigError::Validation(format!(
            "max-candidates must be >= 1, got {}",
            config.max_candidates
        )));
    }

    Ok(())
}
