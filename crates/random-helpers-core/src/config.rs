//! Generator configuration.

use serde::{Deserialize, Serialize};

/// How a generator is seeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngConfig {
    /// Fixed seed for a reproducible sequence. `None` seeds from the
    /// operating system.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RngConfig {
    /// Configuration producing the same sequence on every run.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_seed() {
        assert_eq!(RngConfig::default().seed, None);
    }

    #[test]
    fn test_seeded_sets_seed() {
        assert_eq!(RngConfig::seeded(42).seed, Some(42));
    }

    #[test]
    fn test_deserialize_missing_seed_defaults_to_none() {
        let config: RngConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RngConfig::default());
    }

    #[test]
    fn test_deserialize_seed() {
        let config: RngConfig = serde_json::from_value(serde_json::json!({ "seed": 7 })).unwrap();
        assert_eq!(config, RngConfig::seeded(7));
    }
}
