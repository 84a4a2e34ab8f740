//! Niihau: a concurrent, in-memory reverse compressed trie mapping
//! byte-string keys to 32-bit values, with a capacity-enforcing eviction
//! controller.
//!
//! Keys are compared tail-first, so the trie naturally groups entries that
//! share a suffix the way DNS names share a domain — `"www.example.com"` and
//! `"example.com"` live on the same branch. See `key` for the comparator,
//! `node` for the per-node lock, `core` for the traversal/mutation
//! algorithms, and `capacity` for eviction.

mod capacity;
mod core;
mod error;
mod key;
mod node;

use std::num::NonZeroU32;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::Arc;

use parking_lot::Mutex;

pub use capacity::CapacityMode;
pub use error::TrieError;
pub use key::DEFAULT_MAX_KEY;

use core::Root;
use node::Node;

/// A concurrent reverse compressed trie.
///
/// Cloning a `NiihauTrie` is cheap and shares the same underlying data — all
/// the state that matters (`root`, the node counter, the capacity
/// controller) sits behind `Arc`, mirroring how the node this type is
/// modeled on is a single process-wide structure shared by every worker
/// thread rather than owned by any one of them.
#[derive(Clone)]
pub struct NiihauTrie {
    root: Arc<Root>,
    counter: Arc<AtomicUsize>,
    max_key_len: usize,
    capacity: Arc<capacity::CapacityController>,
}

impl NiihauTrie {
    /// Builds a new, empty trie with the given capacity ceiling and key
    /// length ceiling, enforced the way `mode` specifies.
    pub fn new(max_count: usize, max_key_len: usize, mode: CapacityMode) -> Self {
        let root: Arc<Root> = Arc::new(Mutex::new(None));
        let counter = Arc::new(AtomicUsize::new(0));
        let capacity = Arc::new(capacity::CapacityController::new(
            Arc::clone(&root),
            Arc::clone(&counter),
            max_count,
            max_key_len,
            mode,
        ));

        if mode == CapacityMode::Dedicated {
            capacity.spawn_agent();
        }

        NiihauTrie {
            root,
            counter,
            max_key_len,
            capacity,
        }
    }

    /// Looks up `key`, returning its bound value if present.
    pub fn lookup(&self, key: &[u8]) -> Option<u32> {
        self.capacity.sync_with_eviction();
        core::lookup(&self.root, key)
    }

    /// Returns whether `key` is currently bound to a value.
    pub fn contains(&self, key: &[u8]) -> bool {
        self.lookup(key).is_some()
    }

    /// Inserts `value` under `key`. Returns `Ok(true)` if this created a new
    /// binding, `Ok(false)` if `key` was already bound and the trie was left
    /// unchanged. After a successful insert, capacity is enforced per this
    /// trie's [`CapacityMode`] — synchronously in [`CapacityMode::Inline`],
    /// or by waking the dedicated agent in [`CapacityMode::Dedicated`].
    ///
    /// A `value` of `0` is indistinguishable from leaving the key valueless:
    /// the insert still succeeds and still occupies a node, but
    /// [`NiihauTrie::lookup`] on that key returns `None`, the same as it
    /// would for a purely structural node with no binding at all.
    pub fn insert(&self, key: &[u8], value: u32) -> Result<bool, TrieError> {
        self.capacity.sync_with_eviction();
        let value = NonZeroU32::new(value);
        let inserted = core::insert(&self.root, key, value, self.max_key_len, &self.counter)?;
        if inserted {
            self.capacity.on_insert();
        }
        Ok(inserted)
    }

    /// Removes the binding for `key`, if any. Returns `true` if a value was
    /// removed.
    pub fn remove(&self, key: &[u8]) -> bool {
        self.capacity.sync_with_eviction();
        core::remove(&self.root, key, &self.counter)
    }

    /// Evicts entries until the trie is at or under its configured capacity,
    /// or until it runs dry. Safe to call regardless of [`CapacityMode`].
    pub fn enforce_capacity(&self) {
        self.capacity.enforce_capacity();
    }

    /// Stops the dedicated capacity agent, if one is running, and waits for
    /// it to exit. A no-op for a trie built with [`CapacityMode::Inline`].
    pub fn shutdown_capacity_agent(&self) {
        self.capacity.shutdown_agent();
    }

    /// The number of nodes currently allocated. Not the same as the number
    /// of bound keys: internal, valueless nodes used to share a common
    /// suffix are counted too.
    pub fn count(&self) -> usize {
        self.counter.load(AtomicOrdering::SeqCst)
    }

    /// Whether the trie currently has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Renders the trie's structure to a string, one node per line, indented
    /// by depth — a debugging aid, not a stable format.
    pub fn print(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.root.lock().clone() {
            print_node(&root, 0, &mut out);
        }
        out
    }
}

fn print_node(node: &Arc<Node>, depth: usize, out: &mut String) {
    let guard = node.state.lock();
    out.push_str(&"  ".repeat(depth));
    out.push_str(&String::from_utf8_lossy(&guard.key));
    if let Some(value) = guard.value {
        out.push_str(&format!(" = {}", value.get()));
    }
    out.push('\n');

    if let Some(child) = guard.child.clone() {
        print_node(&child, depth + 1, out);
    }
    if let Some(next) = guard.next.clone() {
        print_node(&next, depth, out);
    }
}
