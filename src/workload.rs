//! Worker-thread simulation driver.
//!
//! Spawns `worker_count` threads that each hammer the trie with a random mix
//! of lookups, inserts, and removes for `simulation_secs`, then join. Each
//! worker gets its own seeded PRNG derived from the run's `seed`, so a given
//! `(seed, worker_count)` pair reproduces the exact same sequence of
//! operations on every run — useful for chasing down a concurrency bug
//! without fighting nondeterminism on top of it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::data_structures::NiihauTrie;

/// A small, fast, non-cryptographic PRNG (splitmix64) used purely for
/// reproducible workload generation — this crate has no use for a general
/// random-number crate, and a hand-rolled generator keeps the dependency
/// surface unchanged while still giving each worker an independent,
/// seed-derived stream.
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        SplitMix64 { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_range(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}

/// The three operations a worker performs, chosen uniformly at random.
enum Op {
    Lookup,
    Insert,
    Remove,
}

fn random_key(rng: &mut SplitMix64, max_len: usize) -> Vec<u8> {
    let len = 1 + rng.next_range(max_len.saturating_sub(1).max(1));
    (0..len).map(|_| b'a' + (rng.next_u32() % 26) as u8).collect()
}

fn random_op(rng: &mut SplitMix64) -> Op {
    match rng.next_range(3) {
        0 => Op::Lookup,
        1 => Op::Insert,
        _ => Op::Remove,
    }
}

fn worker_loop(trie: NiihauTrie, seed: u64, max_key_len: usize, stop: Arc<AtomicBool>) {
    let mut rng = SplitMix64::new(seed);
    while !stop.load(Ordering::Relaxed) {
        let key = random_key(&mut rng, max_key_len);
        match random_op(&mut rng) {
            Op::Lookup => {
                let _ = trie.lookup(&key);
            }
            Op::Insert => {
                let value = rng.next_u32().max(1);
                let _ = trie.insert(&key, value);
            }
            Op::Remove => {
                let _ = trie.remove(&key);
            }
        }
    }
}

/// Runs the simulated workload: spawns `worker_count` worker threads against
/// `trie`, lets them run for `simulation_secs`, then signals them to stop and
/// joins them. Each worker's PRNG is seeded from `seed` combined with its own
/// index, so the same `seed` reproduces the same per-worker operation
/// sequences across runs.
pub fn run_simulation(
    trie: &NiihauTrie,
    worker_count: usize,
    simulation_secs: u64,
    seed: u64,
    max_key_len: usize,
) {
    let stop = Arc::new(AtomicBool::new(false));
    let mut handles = Vec::with_capacity(worker_count);

    for worker_id in 0..worker_count {
        let trie = trie.clone();
        let stop = Arc::clone(&stop);
        let worker_seed = seed ^ (worker_id as u64).wrapping_mul(0x2545F4914F6CDD1D);
        handles.push(thread::spawn(move || {
            worker_loop(trie, worker_seed, max_key_len, stop);
        }));
    }

    thread::sleep(Duration::from_secs(simulation_secs));
    stop.store(true, Ordering::Relaxed);

    for handle in handles {
        let _ = handle.join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::CapacityMode;

    #[test]
    fn splitmix64_is_deterministic_for_a_given_seed() {
        let mut a = SplitMix64::new(42);
        let mut b = SplitMix64::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn simulation_runs_briefly_without_panicking() {
        let trie = NiihauTrie::new(1000, 64, CapacityMode::Inline);
        run_simulation(&trie, 4, 1, 7, 64);
    }
}
