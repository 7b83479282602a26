//! Leaf nodes.
//!
//! Leaves are where domain logic runs. The engine supplies three shapes:
//! [`Action`] wraps a closure that does work and reports an [`Outcome`],
//! [`Condition`] maps a read-only predicate onto Success/Failure, and the
//! constant leaves [`ActionAlwaysSucceed`] / [`ActionAlwaysFail`] anchor
//! branches that must resolve unconditionally.

use crate::{Behavior, Outcome};

/// Closure-backed action leaf.
///
/// The closure is expected to be non-blocking per tick: work that spans
/// ticks reports `Running` and resumes from its own saved state on the
/// next evaluation.
///
/// # Example
///
/// ```rust,ignore
/// use behavior_core::{Action, Outcome};
///
/// let mut fired = false;
/// let cast = Action::new(move |_ctx: &mut Ctx| {
///     fired = true;
///     Outcome::Success
/// });
/// ```
pub struct Action<F> {
    action: F,
}

impl<F> Action<F> {
    /// Creates an action leaf from the given closure.
    pub fn new(action: F) -> Self {
        Self { action }
    }
}

impl<C, F> Behavior<C> for Action<F>
where
    F: FnMut(&mut C) -> Outcome + Send,
{
    fn tick(&mut self, ctx: &mut C) -> Outcome {
        (self.action)(ctx)
    }
}

/// Predicate leaf: Success when the predicate holds, Failure otherwise.
///
/// Predicates are side-effect-free by convention; the engine re-evaluates
/// them every tick and never caches the result.
pub struct Condition<F> {
    predicate: F,
}

impl<F> Condition<F> {
    /// Creates a condition leaf from the given predicate.
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<C, F> Behavior<C> for Condition<F>
where
    F: Fn(&C) -> bool + Send,
{
    fn tick(&mut self, ctx: &mut C) -> Outcome {
        if (self.predicate)(ctx) {
            Outcome::Success
        } else {
            Outcome::Failure
        }
    }
}

/// Leaf that always returns `Success`.
///
/// Useful as the terminal child of a wait ("once time elapses, report
/// success") or as a no-op branch anchor.
pub struct ActionAlwaysSucceed;

impl<C> Behavior<C> for ActionAlwaysSucceed {
    fn tick(&mut self, _ctx: &mut C) -> Outcome {
        Outcome::Success
    }
}

/// Leaf that always returns `Failure`.
///
/// Placed at the end of a sequence to force the enclosing composite to
/// treat the path as a dead end.
pub struct ActionAlwaysFail;

impl<C> Behavior<C> for ActionAlwaysFail {
    fn tick(&mut self, _ctx: &mut C) -> Outcome {
        Outcome::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext {
        value: i32,
    }

    #[test]
    fn action_runs_closure_each_tick() {
        let mut bump = Action::new(|ctx: &mut TestContext| {
            ctx.value += 1;
            Outcome::Success
        });

        let mut ctx = TestContext { value: 0 };
        assert_eq!(bump.tick(&mut ctx), Outcome::Success);
        assert_eq!(bump.tick(&mut ctx), Outcome::Success);
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn condition_maps_predicate_to_outcome() {
        let mut is_positive = Condition::new(|ctx: &TestContext| ctx.value > 0);

        let mut ctx = TestContext { value: 1 };
        assert_eq!(is_positive.tick(&mut ctx), Outcome::Success);

        ctx.value = -1;
        assert_eq!(is_positive.tick(&mut ctx), Outcome::Failure);
    }

    #[test]
    fn constant_leaves() {
        let mut ctx = TestContext { value: 0 };
        assert_eq!(ActionAlwaysSucceed.tick(&mut ctx), Outcome::Success);
        assert_eq!(ActionAlwaysFail.tick(&mut ctx), Outcome::Failure);
    }
}
