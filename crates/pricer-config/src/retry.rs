//! Retry settings for the item fetch path.
//!
//! The defaults reproduce the fixed behavior: three attempts, no delay between
//! them, and every non-success status treated as retryable.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_max_attempts() -> u32 {
    3
}

const fn default_max_delay_ms() -> u64 {
    2_000
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first one.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Initial delay before the first retry. `0` disables backoff.
    #[serde(default)]
    pub base_delay_ms: u64,

    /// Cap for exponential backoff.
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    /// Whether 4xx responses are retried like 5xx responses.
    #[serde(default = "default_true")]
    pub retry_client_errors: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_ms: 0,
            max_delay_ms: default_max_delay_ms(),
            retry_client_errors: true,
        }
    }
}

impl RetryConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::invalid("retry.max_attempts", "must be at least 1"));
        }
        if self.base_delay_ms > self.max_delay_ms {
            return Err(ConfigError::invalid(
                "retry.base_delay_ms",
                format!("must not exceed retry.max_delay_ms ({})", self.max_delay_ms),
            ));
        }
        Ok(())
    }
}
