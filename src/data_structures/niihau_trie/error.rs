//! Error types for the Niihau reverse trie.

/// Errors that can occur while operating on a [`super::NiihauTrie`].
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum TrieError {
    /// An empty key was passed to `insert` or used to reconstruct a key
    /// during eviction. The trie has no representation for the empty string.
    #[error("empty key not allowed")]
    EmptyKey,

    /// The key is longer than the trie's configured `max_key_len`.
    #[error("key exceeds the configured maximum length")]
    KeyTooLong,

    /// A node allocation failed. The only place this can happen in safe Rust
    /// is the fallible `Vec::try_reserve_exact` call backing a new node's key
    /// buffer; under ordinary conditions this should never be observed.
    #[error("failed to allocate a new trie node")]
    AllocationFailure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(TrieError::EmptyKey.to_string(), "empty key not allowed");
        assert_eq!(
            TrieError::KeyTooLong.to_string(),
            "key exceeds the configured maximum length"
        );
        assert_eq!(
            TrieError::AllocationFailure.to_string(),
            "failed to allocate a new trie node"
        );
    }
}
