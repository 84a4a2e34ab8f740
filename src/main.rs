//! Niihau trie driver — main entrypoint.
//!
//! Builds a trie per the configured capacity policy, runs a simulated
//! concurrent workload against it for a fixed duration, then reports how
//! many entries survived.

use clap::Parser;
use mauka_trie_lib::data_structures::{CapacityMode, NiihauTrie};
use mauka_trie_lib::error::{set_error_reporter, AppError, AppResult, TracingErrorReporter};
use mauka_trie_lib::{config, workload};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

/// Command line arguments for the Niihau trie driver.
#[derive(Parser, Debug)]
#[clap(name = "Niihau Trie Driver", version, author, about)]
struct Args {
    /// Number of concurrent worker threads.
    #[clap(short = 'c', long = "clients", value_parser)]
    worker_count: Option<usize>,

    /// Run workers for this many seconds.
    #[clap(short = 'l', long = "length", value_parser)]
    simulation_secs: Option<u64>,

    /// Seed for the deterministic per-worker PRNG.
    #[clap(short = 's', long = "seed", value_parser)]
    seed: Option<u64>,

    /// Run capacity enforcement on a dedicated background thread rather than
    /// inline on whichever worker triggers it.
    #[clap(short = 't', long = "dedicated-agent")]
    dedicated_agent: bool,

    /// Path to a configuration file.
    #[clap(long, value_parser)]
    config: Option<std::path::PathBuf>,
}

/// Initialize the logging system.
fn init_logging() -> AppResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_line_number(true)
        .with_file(true)
        .with_thread_names(true)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::Custom(format!("failed to set global tracing subscriber: {e}")))
}

/// Resolves the configured seed, deriving one from the current time when
/// none was given so unseeded runs are still distinct from each other.
fn resolve_seed(configured: Option<u64>) -> u64 {
    configured.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock is before the Unix epoch")
            .as_nanos() as u64
    })
}

fn main() {
    if let Err(e) = run() {
        tracing::error!("{e}");
        process::exit(1);
    }
}

fn run() -> AppResult<()> {
    init_logging()?;
    set_error_reporter(std::sync::Arc::new(TracingErrorReporter));

    let args = <Args as clap::Parser>::parse();

    let env_prefix = "NIIHAU";
    let config_loader = config::ConfigLoader::new(args.config.as_deref(), env_prefix);
    let mut app_config = config_loader.load()?;

    if let Some(worker_count) = args.worker_count {
        app_config.driver.worker_count = worker_count;
    }
    if let Some(simulation_secs) = args.simulation_secs {
        app_config.driver.simulation_secs = simulation_secs;
    }
    if let Some(seed) = args.seed {
        app_config.driver.seed = seed;
    }
    if args.dedicated_agent {
        app_config.capacity.dedicated_agent = true;
    }

    let seed = resolve_seed(app_config.driver.seed);

    info!(
        workers = app_config.driver.worker_count,
        simulation_secs = app_config.driver.simulation_secs,
        seed,
        max_count = app_config.capacity.max_count,
        dedicated_agent = app_config.capacity.dedicated_agent,
        "starting simulation"
    );

    let mode = if app_config.capacity.dedicated_agent {
        CapacityMode::Dedicated
    } else {
        CapacityMode::Inline
    };
    let trie = NiihauTrie::new(
        app_config.capacity.max_count,
        app_config.capacity.max_key_len,
        mode,
    );

    workload::run_simulation(
        &trie,
        app_config.driver.worker_count,
        app_config.driver.simulation_secs,
        seed,
        app_config.capacity.max_key_len,
    );

    trie.enforce_capacity();
    trie.shutdown_capacity_agent();

    info!(remaining_nodes = trie.count(), "simulation complete");

    Ok(())
}
