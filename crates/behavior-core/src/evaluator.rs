//! Tick driver.

use tracing::trace;

use crate::{Behavior, Outcome};

/// Drives a behavior tree: one `tick` call per external clock pulse.
///
/// The evaluator owns the root and holds no other state; all progress
/// lives in the tree's nodes. Requiring `&mut self` to tick makes
/// concurrent evaluation of the same tree unrepresentable -- the one
/// guarantee the driver owes its tree.
///
/// A root that keeps returning `Failure` is the host's signal that the
/// behavior cannot make progress; whether to retry, rebuild, or abandon
/// the tree is the host's call.
pub struct Evaluator<C> {
    root: Box<dyn Behavior<C>>,
}

impl<C> Evaluator<C> {
    /// Creates an evaluator around the given root node.
    pub fn new(root: Box<dyn Behavior<C>>) -> Self {
        Self { root }
    }

    /// Evaluates the root exactly once against `ctx` and returns its
    /// outcome unchanged.
    ///
    /// A panic escaping a leaf propagates to the caller; the evaluator
    /// never converts faults into `Failure`.
    pub fn tick(&mut self, ctx: &mut C) -> Outcome {
        let outcome = self.root.tick(ctx);
        trace!(target: "behavior_core::evaluator", ?outcome, "tick complete");
        outcome
    }
}
