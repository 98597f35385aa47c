//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_category() -> String {
    String::from("smartphones")
}

/// Default result limit.
const fn default_limit() -> u32 {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Category fetched when a command does not name one.
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Default number of items fetched and repriced.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            default_limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_category, "smartphones");
        assert_eq!(config.default_limit, 3);
    }
}
