//! Capacity enforcement for the Niihau reverse trie.
//!
//! The node this module is modeled on (`check_max_nodes` in the C original)
//! can run two ways: called inline by whoever just inserted, or run forever
//! on a dedicated thread that blocks until capacity is exceeded. Both modes
//! are expressed here as [`CapacityController`] configurations rather than
//! two separate types, since the eviction loop itself (`while over capacity,
//! drop_one`) is identical either way — only who calls it, and when, differs.

use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::{Condvar, Mutex};

use super::core::{self, Root};

/// How a [`CapacityController`] reacts when an insert pushes the trie over
/// capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityMode {
    /// The thread that performed the insert evicts inline, synchronously,
    /// before returning.
    Inline,
    /// A dedicated background thread wakes up and evicts; inserts return
    /// immediately regardless of capacity pressure.
    Dedicated,
}

struct AgentState {
    shutdown: bool,
}

struct Agent {
    handle: JoinHandle<()>,
    state: Arc<Mutex<AgentState>>,
    pressure: Arc<Condvar>,
}

/// Enforces `max_count` against a trie's node counter, either inline on the
/// calling thread or via a dedicated background worker.
pub(crate) struct CapacityController {
    root: Arc<Root>,
    counter: Arc<AtomicUsize>,
    max_count: usize,
    max_key_len: usize,
    mode: CapacityMode,
    agent: Mutex<Option<Agent>>,
    /// Acquired (then released) by every public trie operation before it
    /// takes `root_lock`, and held by this controller for the whole of its
    /// tree walk in [`Self::enforce_capacity`]. Establishes a happens-before
    /// barrier between a live mutation and an in-progress eviction sweep,
    /// without serializing mutations against each other — the lock is never
    /// held across the mutation itself, only acquired and dropped at its
    /// start.
    capacity_lock: Arc<Mutex<()>>,
}

impl CapacityController {
    pub(crate) fn new(
        root: Arc<Root>,
        counter: Arc<AtomicUsize>,
        max_count: usize,
        max_key_len: usize,
        mode: CapacityMode,
    ) -> Self {
        CapacityController {
            root,
            counter,
            max_count,
            max_key_len,
            mode,
            agent: Mutex::new(None),
            capacity_lock: Arc::new(Mutex::new(())),
        }
    }

    pub(crate) fn mode(&self) -> CapacityMode {
        self.mode
    }

    /// Momentarily acquires and releases `capacity_lock`. Called by every
    /// public trie operation before it touches `root_lock`, so a thread can
    /// never observe the tree mid-walk by an eviction sweep that started
    /// before it and is still in progress.
    pub(crate) fn sync_with_eviction(&self) {
        drop(self.capacity_lock.lock());
    }

    /// Called after every successful insert. In [`CapacityMode::Inline`]
    /// this evicts synchronously; in [`CapacityMode::Dedicated`] it just
    /// wakes the background agent, if one is running, and returns at once.
    pub(crate) fn on_insert(&self) {
        match self.mode {
            CapacityMode::Inline => self.enforce_capacity(),
            CapacityMode::Dedicated => {
                if let Some(agent) = self.agent.lock().as_ref() {
                    agent.pressure.notify_one();
                }
            }
        }
    }

    /// Evicts entries until the trie is back at or under `max_count`, or
    /// until the trie runs dry. Safe to call regardless of mode — a
    /// dedicated-agent trie can still have `enforce_capacity` invoked
    /// directly by a caller that wants a synchronous guarantee.
    pub(crate) fn enforce_capacity(&self) {
        let _guard = self.capacity_lock.lock();
        while self.counter.load(AtomicOrdering::SeqCst) > self.max_count {
            if !core::drop_one(&self.root, self.max_key_len, &self.counter) {
                break;
            }
        }
    }

    /// Starts the dedicated background agent. A no-op if one is already
    /// running. Only meaningful in [`CapacityMode::Dedicated`], but callable
    /// either way: an inline controller that gets an agent spawned on it
    /// simply never has anything for the agent to do, since `on_insert`
    /// never notifies it.
    pub(crate) fn spawn_agent(&self) {
        let mut slot = self.agent.lock();
        if slot.is_some() {
            return;
        }

        let state = Arc::new(Mutex::new(AgentState { shutdown: false }));
        let pressure = Arc::new(Condvar::new());

        let root = Arc::clone(&self.root);
        let counter = Arc::clone(&self.counter);
        let max_count = self.max_count;
        let max_key_len = self.max_key_len;
        let thread_state = Arc::clone(&state);
        let thread_pressure = Arc::clone(&pressure);
        let capacity_lock = Arc::clone(&self.capacity_lock);

        let handle = thread::spawn(move || {
            loop {
                {
                    let mut guard = thread_state.lock();
                    while !guard.shutdown && counter.load(AtomicOrdering::SeqCst) <= max_count {
                        thread_pressure.wait(&mut guard);
                    }
                    if guard.shutdown {
                        break;
                    }
                }
                let _guard = capacity_lock.lock();
                while counter.load(AtomicOrdering::SeqCst) > max_count {
                    if !core::drop_one(&root, max_key_len, &counter) {
                        break;
                    }
                }
            }
        });

        *slot = Some(Agent {
            handle,
            state,
            pressure,
        });
    }

    /// Signals the dedicated agent to stop after its current wait and joins
    /// it. A no-op if no agent is running.
    pub(crate) fn shutdown_agent(&self) {
        let agent = self.agent.lock().take();
        if let Some(agent) = agent {
            agent.state.lock().shutdown = true;
            agent.pressure.notify_one();
            let _ = agent.handle.join();
        }
    }
}

impl Drop for CapacityController {
    fn drop(&mut self) {
        self.shutdown_agent();
    }
}
