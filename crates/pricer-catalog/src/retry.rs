//! Retry policy for idempotent catalog reads.
//!
//! Attempts run strictly one after another. The default policy is three
//! attempts with no delay in between, retrying on every non-success status.

use std::time::Duration;

use pricer_config::RetryConfig;

/// Delay schedule between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// Retry immediately.
    None,
    /// Wait the same amount before every retry.
    Fixed(Duration),
    /// `base * 2^(attempt - 1)`, capped at `max`.
    Exponential { base: Duration, max: Duration },
}

/// How many times, and how eagerly, a failed read is attempted again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first one.
    pub max_attempts: u32,
    pub backoff: Backoff,
    /// When `false`, 4xx responses end the loop immediately.
    pub retry_client_errors: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Backoff::None,
            retry_client_errors: true,
        }
    }
}

impl RetryPolicy {
    /// A policy that makes exactly one attempt.
    #[must_use]
    pub const fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            backoff: Backoff::None,
            retry_client_errors: false,
        }
    }

    /// Attempts actually made; never less than one.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Delay to wait after failed attempt `attempt` (1-based).
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        match self.backoff {
            Backoff::None => Duration::ZERO,
            Backoff::Fixed(delay) => delay,
            Backoff::Exponential { base, max } => {
                let factor = 2_u32.saturating_pow(attempt.saturating_sub(1));
                base.saturating_mul(factor).min(max)
            }
        }
    }

    /// Whether a non-success status should trigger another attempt.
    #[must_use]
    pub fn should_retry_status(&self, status: u16) -> bool {
        self.retry_client_errors || !(400..500).contains(&status)
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        let backoff = if config.base_delay_ms == 0 {
            Backoff::None
        } else {
            Backoff::Exponential {
                base: Duration::from_millis(config.base_delay_ms),
                max: Duration::from_millis(config.max_delay_ms),
            }
        };
        Self {
            max_attempts: config.max_attempts,
            backoff,
            retry_client_errors: config.retry_client_errors,
        }
    }
}
