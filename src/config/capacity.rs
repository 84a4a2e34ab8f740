//! Capacity configuration module.
//!
//! Defines how large the trie is allowed to grow and how it enforces that
//! ceiling once reached.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Capacity configuration for a [`crate::data_structures::niihau_trie::NiihauTrie`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityConfig {
    /// Maximum number of trie nodes (not bound keys — internal nodes count
    /// too) before eviction kicks in.
    pub max_count: usize,

    /// Maximum length, in bytes, of any single key.
    pub max_key_len: usize,

    /// Whether eviction runs on a dedicated background thread rather than
    /// synchronously on whichever thread performed the triggering insert.
    pub dedicated_agent: bool,
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            max_count: 100,
            max_key_len: crate::data_structures::niihau_trie::DEFAULT_MAX_KEY,
            dedicated_agent: false,
        }
    }
}

impl Validate for CapacityConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_count == 0 {
            return Err(ConfigError::ValidationError(
                "max_count must be greater than 0".to_string(),
            ));
        }
        if self.max_key_len <= 1 {
            return Err(ConfigError::ValidationError(
                "max_key_len must be greater than 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(CapacityConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_max_count() {
        let config = CapacityConfig {
            max_count: 0,
            ..CapacityConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_max_key_len_of_one() {
        let config = CapacityConfig {
            max_key_len: 1,
            ..CapacityConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
