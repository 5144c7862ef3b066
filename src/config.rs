//! Search configuration.

use std::env;

use serde::Deserialize;

/// Upper bound on node expansions for a single search when nothing else
/// is configured.
pub const DEFAULT_MAX_EXPANSIONS: usize = 10_000;

/// Environment variable read by [`SearchConfig::from_env`].
pub const MAX_EXPANSIONS_ENV: &str = "MEETUP_MAX_EXPANSIONS";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Expansions allowed across both sides of a search before it gives
    /// up with [`SearchFailure::Exhausted`](crate::errors::SearchFailure).
    pub max_expansions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }
}

impl SearchConfig {
    /// Reads the configuration from the environment. Missing or
    /// unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let max_expansions = env::var(MAX_EXPANSIONS_ENV)
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_EXPANSIONS);

        Self { max_expansions }
    }

    /// Returns a copy with a different expansion bound.
    pub fn with_max_expansions(self, max_expansions: usize) -> Self {
        Self { max_expansions }
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(SearchConfig::default().max_expansions, DEFAULT_MAX_EXPANSIONS);
    }

    #[test]
    fn test_with_max_expansions() {
        let config = SearchConfig::default().with_max_expansions(3);
        assert_eq!(config.max_expansions, 3);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SearchConfig::default());

        let config: SearchConfig = serde_json::from_str(r#"{"max_expansions": 42}"#).unwrap();
        assert_eq!(config.max_expansions, 42);
    }
}
