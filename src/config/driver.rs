//! Driver configuration module.
//!
//! Defines the simulated concurrent workload that exercises the trie: how
//! many worker threads hammer it, for how long, and with what seed.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Configuration for the worker-thread simulation driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Number of concurrent worker threads inserting, looking up, and
    /// removing keys.
    pub worker_count: usize,

    /// How long, in seconds, the simulation runs before workers are told to
    /// stop.
    pub simulation_secs: u64,

    /// Seed for the deterministic per-worker PRNG, so a run can be
    /// reproduced exactly. `None` means "derive one from the current time"
    /// at the point the simulation is launched.
    pub seed: Option<u64>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            worker_count: num_cpus::get(),
            simulation_secs: 10,
            seed: None,
        }
    }
}

impl Validate for DriverConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.worker_count == 0 {
            return Err(ConfigError::ValidationError(
                "worker_count must be greater than 0".to_string(),
            ));
        }
        if self.simulation_secs == 0 {
            return Err(ConfigError::ValidationError(
                "simulation_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
