//! Engine configuration with environment overrides.

use std::time::Duration;

use crate::client::retry::RetryPolicy;
use crate::error::{FormFlowError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Base URL of the workflow engine's REST API.
    pub base_url: String,
    pub request_timeout_ms: u64,
    /// Attempts for the fetch-next-task retry contract.
    pub fetch_retry_attempts: u32,
    /// Fixed delay between ambiguous fetch outcomes.
    pub fetch_retry_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/engine-rest".to_string(),
            request_timeout_ms: 30_000,
            fetch_retry_attempts: 3,
            fetch_retry_delay_ms: 500,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("FORMFLOW_ENGINE_URL") {
            config.base_url = base_url;
        }
        if let Ok(timeout) = std::env::var("FORMFLOW_REQUEST_TIMEOUT_MS") {
            config.request_timeout_ms = timeout.parse().map_err(|e| {
                FormFlowError::Configuration {
                    message: format!("invalid FORMFLOW_REQUEST_TIMEOUT_MS: {e}"),
                }
            })?;
        }
        if let Ok(attempts) = std::env::var("FORMFLOW_FETCH_RETRY_ATTEMPTS") {
            config.fetch_retry_attempts = attempts.parse().map_err(|e| {
                FormFlowError::Configuration {
                    message: format!("invalid FORMFLOW_FETCH_RETRY_ATTEMPTS: {e}"),
                }
            })?;
        }
        if let Ok(delay) = std::env::var("FORMFLOW_FETCH_RETRY_DELAY_MS") {
            config.fetch_retry_delay_ms = delay.parse().map_err(|e| {
                FormFlowError::Configuration {
                    message: format!("invalid FORMFLOW_FETCH_RETRY_DELAY_MS: {e}"),
                }
            })?;
        }

        Ok(config)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.fetch_retry_attempts,
            delay: Duration::from_millis(self.fetch_retry_delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_retry_contract() {
        let config = EngineConfig::default();
        let policy = config.retry_policy();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.delay, Duration::from_millis(500));
    }
}
