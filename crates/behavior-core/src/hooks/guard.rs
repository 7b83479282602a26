//! RAII pairing of hook insertion with guaranteed removal.

use std::sync::Arc;

use super::{HookError, HookHandle, HookRegistry, HookSubtree};

/// Scoped hook registration: the entry lives exactly as long as the guard.
///
/// Behaviors that splice subtrees into a host tree must remove them when
/// they stop; forgetting leaves a stale subtree running every tick.
/// `HookGuard` makes the acquire/release pairing structural -- dropping
/// the guard removes the entry, on every exit path including unwinds.
///
/// # Example
///
/// ```rust,ignore
/// use behavior_core::{HookGuard, HookSubtree};
///
/// let _combat = HookGuard::insert(
///     registry.clone(),
///     "combat-main",
///     0,
///     HookSubtree::new(my_combat_override()),
/// )?;
/// // ... behavior runs; entry removed when `_combat` goes out of scope
/// ```
pub struct HookGuard<C> {
    registry: Arc<HookRegistry<C>>,
    handle: Option<HookHandle<C>>,
}

impl<C> HookGuard<C> {
    /// Inserts `subtree` into `slot` and ties the registration's lifetime
    /// to the returned guard.
    pub fn insert(
        registry: Arc<HookRegistry<C>>,
        slot: impl Into<String>,
        priority: i32,
        subtree: Arc<HookSubtree<C>>,
    ) -> Result<Self, HookError> {
        let handle = registry.insert(slot, priority, subtree)?;
        Ok(Self {
            registry,
            handle: Some(handle),
        })
    }

    /// The handle of the guarded registration.
    pub fn handle(&self) -> &HookHandle<C> {
        self.handle
            .as_ref()
            .expect("handle present until guard drops")
    }
}

impl<C> Drop for HookGuard<C> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.registry.remove_hook(&handle);
        }
    }
}
