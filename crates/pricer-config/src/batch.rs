//! Batch update settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BatchConfig {
    /// Cap on concurrently in-flight item updates. `0` means unbounded.
    #[serde(default)]
    pub max_concurrency: usize,
}

impl BatchConfig {
    /// The concurrency cap, or `None` when every update may run at once.
    #[must_use]
    pub const fn concurrency_limit(&self) -> Option<usize> {
        if self.max_concurrency == 0 {
            None
        } else {
            Some(self.max_concurrency)
        }
    }
}
