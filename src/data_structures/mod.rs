//! Data structures for the Niihau trie driver.

pub mod niihau_trie;

pub use niihau_trie::{CapacityMode, NiihauTrie, TrieError, DEFAULT_MAX_KEY};
