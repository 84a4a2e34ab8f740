//! Niihau trie library.
//!
//! This library contains the concurrent reverse compressed trie and its
//! supporting configuration, error handling, and workload-simulation
//! utilities. The library is designed to be used by the binary crate, but
//! can also be used as a dependency by other projects.
//!
//! # Architecture
//!
//! - Strict component boundaries between the trie core, capacity
//!   enforcement, and the ambient config/error/driver layers
//! - Hand-over-hand locking inside the trie rather than one coarse lock
//! - Comprehensive error handling and propagation

pub mod config;
pub mod data_structures;
pub mod error;
pub mod workload;

#[cfg(test)]
pub(crate) mod tests;

#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function: sets up the global error reporter and
/// default configuration. Call once, early in `main`.
pub fn init() -> error::AppResult<()> {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter::default()));
    config::init_default_config()?;
    Ok(())
}
