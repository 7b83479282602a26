//! Registry mapping slot names to priority-ordered hook subtrees.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;

use super::HookError;
use crate::{Behavior, Outcome};

/// An externally-owned subtree registered into a hook slot.
///
/// Subtrees are shared by `Arc`; the `Arc` pointer is the subtree's
/// identity for duplicate detection and removal. The root sits behind a
/// `Mutex` because the registry's clients hold the subtree jointly while
/// the tick discipline still requires exclusive access during evaluation.
pub struct HookSubtree<C> {
    root: Mutex<Box<dyn Behavior<C>>>,
}

impl<C> HookSubtree<C> {
    /// Wraps a node as a registrable hook subtree.
    pub fn new(root: impl Behavior<C> + 'static) -> Arc<Self> {
        Arc::new(Self {
            root: Mutex::new(Box::new(root)),
        })
    }

    /// Evaluates the subtree for one tick.
    pub(crate) fn tick(&self, ctx: &mut C) -> Outcome {
        self.root.lock().expect("hook subtree lock poisoned").tick(ctx)
    }
}

/// Handle returned by [`HookRegistry::insert`], consumed by
/// [`HookRegistry::remove_hook`].
///
/// Carries the slot name plus the subtree identity; cloning the handle
/// does not clone the subtree.
pub struct HookHandle<C> {
    pub(crate) slot: String,
    pub(crate) subtree: Arc<HookSubtree<C>>,
}

// Manual impl: a handle is cloneable whether or not the context type is.
impl<C> Clone for HookHandle<C> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
            subtree: Arc::clone(&self.subtree),
        }
    }
}

// Manual impl: a handle is debug-printable whether or not the context type is.
impl<C> std::fmt::Debug for HookHandle<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookHandle")
            .field("slot", &self.slot)
            .field("subtree", &Arc::as_ptr(&self.subtree))
            .finish()
    }
}

struct HookEntry<C> {
    priority: i32,
    subtree: Arc<HookSubtree<C>>,
}

/// Keyed-by-name registry of ordered hook subtree lists.
///
/// Created once at process start and torn down never during normal
/// operation. Insertion and removal may happen from any thread between
/// ticks; a [`HookPoint`](super::HookPoint) evaluates against a snapshot,
/// so mutation never races an in-progress slot scan.
///
/// Within a slot, entries are kept sorted by ascending priority; entries
/// with equal priority stay in insertion order.
pub struct HookRegistry<C> {
    slots: Mutex<HashMap<String, Vec<HookEntry<C>>>>,
}

impl<C> HookRegistry<C> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Inserts `subtree` into `slot` at the given priority.
    ///
    /// Returns a handle for later removal. Fails with
    /// [`HookError::DuplicateHook`] if the same subtree identity is
    /// already present in that slot.
    pub fn insert(
        &self,
        slot: impl Into<String>,
        priority: i32,
        subtree: Arc<HookSubtree<C>>,
    ) -> Result<HookHandle<C>, HookError> {
        let slot = slot.into();
        let mut slots = self.lock_slots();
        let entries = slots.entry(slot.clone()).or_default();

        if entries.iter().any(|e| Arc::ptr_eq(&e.subtree, &subtree)) {
            return Err(HookError::DuplicateHook { slot });
        }

        entries.push(HookEntry {
            priority,
            subtree: Arc::clone(&subtree),
        });
        // Stable sort: equal priorities keep insertion order.
        entries.sort_by_key(|e| e.priority);

        debug!(
            target: "behavior_core::hooks",
            slot = %slot,
            priority,
            entries = entries.len(),
            "hook inserted"
        );

        Ok(HookHandle { slot, subtree })
    }

    /// Removes `subtree` from `slot` by identity.
    ///
    /// Removing an absent entry is a no-op, not an error, so teardown
    /// paths may call this unconditionally.
    pub fn remove(&self, slot: &str, subtree: &Arc<HookSubtree<C>>) {
        let mut slots = self.lock_slots();
        let Some(entries) = slots.get_mut(slot) else {
            return;
        };

        let before = entries.len();
        entries.retain(|e| !Arc::ptr_eq(&e.subtree, subtree));

        if entries.len() != before {
            debug!(
                target: "behavior_core::hooks",
                slot = %slot,
                entries = entries.len(),
                "hook removed"
            );
        }
        if entries.is_empty() {
            slots.remove(slot);
        }
    }

    /// Removes the entry identified by `handle`. Idempotent.
    pub fn remove_hook(&self, handle: &HookHandle<C>) {
        self.remove(&handle.slot, &handle.subtree);
    }

    /// Returns the subtrees of `slot` in evaluation order.
    ///
    /// This is a snapshot: the slot lock is released before any subtree
    /// is evaluated, so a hook that removes itself (or inserts others)
    /// mid-tick mutates the registry, not the scan in progress.
    pub fn snapshot(&self, slot: &str) -> Vec<Arc<HookSubtree<C>>> {
        self.lock_slots()
            .get(slot)
            .map(|entries| entries.iter().map(|e| Arc::clone(&e.subtree)).collect())
            .unwrap_or_default()
    }

    /// Returns the number of entries currently registered in `slot`.
    pub fn slot_len(&self, slot: &str) -> usize {
        self.lock_slots().get(slot).map_or(0, Vec::len)
    }

    fn lock_slots(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<HookEntry<C>>>> {
        self.slots.lock().expect("hook registry lock poisoned")
    }
}

impl<C> Default for HookRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}
