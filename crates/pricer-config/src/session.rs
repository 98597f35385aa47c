//! Session lifetime settings for the CLI session store.

use serde::{Deserialize, Serialize};
use std::time::Duration;

const fn default_idle_timeout_mins() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Minutes of inactivity after which a stored session is discarded.
    #[serde(default = "default_idle_timeout_mins")]
    pub idle_timeout_mins: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_mins: default_idle_timeout_mins(),
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub const fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_mins.saturating_mul(60))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_idle_window_is_thirty_minutes() {
        assert_eq!(SessionConfig::default().idle_timeout(), Duration::from_secs(1800));
    }
}
