//! Hook point node: a named, mutable slot inside a tree.

use std::sync::Arc;

use tracing::trace;

use super::{HookRegistry, HookSubtree};
use crate::{Behavior, Outcome};

/// Node that evaluates whatever subtrees are currently registered in its
/// slot.
///
/// # Semantics
///
/// Ticking a `HookPoint` snapshots the slot, then evaluates the entries
/// in priority order like a
/// [`PrioritySelector`](crate::PrioritySelector): the first subtree
/// returning non-Failure is decisive. An empty slot, or one where every
/// subtree fails, yields `Failure` so the surrounding tree falls through
/// to its default branch.
pub struct HookPoint<C> {
    slot: String,
    registry: Arc<HookRegistry<C>>,
}

impl<C> HookPoint<C> {
    /// Creates a hook point reading `slot` from `registry`.
    ///
    /// Slot names are free-form strings agreed upon by convention between
    /// the tree's owner and the code that fills the slot (e.g.,
    /// `"combat-main"`, `"death-main"`).
    pub fn new(slot: impl Into<String>, registry: Arc<HookRegistry<C>>) -> Self {
        Self {
            slot: slot.into(),
            registry,
        }
    }

    /// The slot this hook point reads.
    pub fn slot(&self) -> &str {
        &self.slot
    }
}

impl<C> Behavior<C> for HookPoint<C> {
    fn tick(&mut self, ctx: &mut C) -> Outcome {
        let entries = self.registry.snapshot(&self.slot);
        trace!(
            target: "behavior_core::hooks",
            slot = %self.slot,
            entries = entries.len(),
            "evaluating hook point"
        );

        for subtree in &entries {
            match HookSubtree::tick(subtree, ctx) {
                Outcome::Failure => continue,
                decisive => return decisive,
            }
        }
        Outcome::Failure
    }
}
