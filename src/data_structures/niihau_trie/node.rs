//! Node store for the Niihau reverse trie.
//!
//! A [`Node`] is one edge-label in the compressed trie, plus an optional
//! stored value. Each node carries its own lock guarding the fields that
//! mutate (`key`, `value`, `child`, `next`); the lock is what makes
//! hand-over-hand traversal in [`super::core`] safe.

use std::num::NonZeroU32;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::Arc;

use parking_lot::Mutex;

use super::error::TrieError;

/// A single node in the compressed reverse trie.
///
/// Nodes are always reached through an [`Arc`] so that a thread descending
/// the trie can clone a reference to a neighbor, lock the neighbor, and only
/// then drop its predecessor's lock — the neighbor stays alive across that
/// handoff even if a concurrent writer splices it out of its parent's list at
/// the same moment; the node is only actually deallocated once the last such
/// `Arc` (ordinarily just the parent's own `child`/`next` slot) is dropped.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) state: Mutex<NodeState>,
}

/// The mutable fields of a [`Node`], protected by `Node::state`.
#[derive(Debug)]
pub(crate) struct NodeState {
    /// The edge label this node carries. Invariant: `0 < key.len() < MAX_KEY`.
    pub(crate) key: Vec<u8>,
    /// The bound value, or `None` meaning "no value here" (purely structural
    /// node). See `SPEC_FULL.md` Design Notes for why this is `NonZeroU32`
    /// rather than a raw `u32` with a magic zero.
    pub(crate) value: Option<NonZeroU32>,
    /// Head of this node's child sibling list.
    pub(crate) child: Option<Arc<Node>>,
    /// Next sibling in the parent's child list.
    pub(crate) next: Option<Arc<Node>>,
}

impl NodeState {
    /// A node with no value and no children is structural garbage: unreachable
    /// by design (`SPEC_FULL.md` §3 invariants) and eligible for elision.
    pub(crate) fn is_garbage(&self) -> bool {
        self.value.is_none() && self.child.is_none()
    }
}

impl Node {
    /// Allocates a new, fully detached leaf node carrying `key` and `value`,
    /// and bumps `counter`.
    ///
    /// The node is built fully detached — no `child`/`next`/parent links are
    /// set — before being returned, so that the caller can finish wiring it
    /// into the tree only once it already holds whatever locks the wiring
    /// requires (per `SPEC_FULL.md` §3 Lifecycle).
    ///
    /// Key-buffer reservation goes through `try_reserve_exact` so that the
    /// `AllocationFailure` error variant has a genuine, safe trigger: stable
    /// Rust has no general fallible heap allocation, but a `Vec`'s growth can
    /// be asked to fail gracefully instead of aborting the process.
    pub(crate) fn new_leaf(
        key: &[u8],
        value: Option<NonZeroU32>,
        counter: &AtomicUsize,
    ) -> Result<Arc<Node>, TrieError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(key.len())
            .map_err(|_| TrieError::AllocationFailure)?;
        buf.extend_from_slice(key);

        counter.fetch_add(1, AtomicOrdering::SeqCst);
        Ok(Arc::new(Node {
            state: Mutex::new(NodeState {
                key: buf,
                value,
                child: None,
                next: None,
            }),
        }))
    }

    /// Records that one node has been permanently released, decrementing the
    /// process-wide node counter. Deallocation of the `Node` itself happens
    /// when the caller drops its last `Arc` to it; this only keeps the
    /// counter in sync, mirroring the source's paired `free`+`node_count--`.
    pub(crate) fn release(counter: &AtomicUsize) {
        counter.fetch_sub(1, AtomicOrdering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_leaf_is_detached_and_counted() {
        let counter = AtomicUsize::new(0);
        let node = Node::new_leaf(b"com", NonZeroU32::new(5), &counter).unwrap();
        let state = node.state.lock();
        assert_eq!(state.key, b"com");
        assert_eq!(state.value, NonZeroU32::new(5));
        assert!(state.child.is_none());
        assert!(state.next.is_none());
        assert_eq!(counter.load(AtomicOrdering::SeqCst), 1);
    }

    #[test]
    fn garbage_detection() {
        let counter = AtomicUsize::new(0);
        let node = Node::new_leaf(b"com", None, &counter).unwrap();
        assert!(node.state.lock().is_garbage());

        let node = Node::new_leaf(b"com", NonZeroU32::new(1), &counter).unwrap();
        assert!(!node.state.lock().is_garbage());
    }
}
