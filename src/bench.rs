//! Benchmarking helpers for the Niihau trie.
//!
//! Exposes small helper functions the `benches/` criterion harness can call
//! into, so the harness doesn't need to duplicate key-generation logic.

use crate::data_structures::{CapacityMode, NiihauTrie};

/// Build a trie pre-populated with `count` sequentially generated keys.
///
/// Keys are derived from the index so lookups in the harness can regenerate
/// the exact same key deterministically without storing the whole key set.
pub fn populated_trie(count: usize, max_key_len: usize) -> NiihauTrie {
    let trie = NiihauTrie::new(count.max(1), max_key_len, CapacityMode::Inline);
    for i in 0..count {
        let key = bench_key(i, max_key_len);
        let _ = trie.insert(&key, (i as u32).wrapping_add(1));
    }
    trie
}

/// Deterministically derive a lowercase ASCII key from an index.
pub fn bench_key(index: usize, max_key_len: usize) -> Vec<u8> {
    let mut key = format!("{index:x}").into_bytes();
    key.truncate(max_key_len.max(1));
    key
}
