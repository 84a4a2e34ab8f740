//! Re-exports the trie's own error type into the crate-wide error taxonomy.

pub use crate::data_structures::niihau_trie::TrieError;
