//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the two fundamental composition rules:
//! [`Sequence`] (AND logic, resumes at its cursor across ticks) and
//! [`PrioritySelector`] (OR logic, rescans from the top every tick).
//!
//! The asymmetry between the two is deliberate and load-bearing: a
//! sequence models "do these steps in order, picking up where you left
//! off," while a priority selector models "re-examine which concern is
//! most urgent this tick," letting an earlier branch (danger avoidance)
//! preempt a later one (travel) even while the later one is mid-flight.

use crate::{Behavior, Outcome};

/// Executes child behaviors in order until one fails.
///
/// # Semantics
///
/// A `Sequence` evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and
///   returns `Failure`; the cursor resets so the next run starts fresh.
/// - If a child returns `Running`, the sequence returns `Running` and
///   parks its cursor on that child; the next tick resumes **at that same
///   child**, never re-running earlier completed siblings.
/// - If all children return `Success`, the sequence returns `Success`.
///
/// This is a short-circuited logical AND (&&) stretched across ticks.
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    cursor: usize,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self {
            children,
            cursor: 0,
        }
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&mut self, ctx: &mut C) -> Outcome {
        // Resume at the cursor; a Running child parked it there last tick.
        while self.cursor < self.children.len() {
            match self.children[self.cursor].tick(ctx) {
                Outcome::Success => self.cursor += 1,
                Outcome::Running => return Outcome::Running,
                Outcome::Failure => {
                    self.cursor = 0;
                    return Outcome::Failure;
                }
            }
        }
        // All children succeeded
        self.cursor = 0;
        Outcome::Success
    }
}

/// Executes child behaviors in priority order until one is decisive.
///
/// # Semantics
///
/// A `PrioritySelector` evaluates its children from left to right **every
/// tick, starting from the first child** -- it keeps no cursor across
/// ticks:
/// - The first child returning anything other than `Failure` is decisive;
///   its outcome (`Success` or `Running`) is returned untouched.
/// - If all children return `Failure`, the selector returns `Failure`.
///
/// Earlier position always wins regardless of what happened on prior
/// ticks, so a higher-priority branch can take over from a lower one that
/// reported `Running` last tick.
pub struct PrioritySelector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> PrioritySelector<C> {
    /// Creates a new priority selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A selector with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "PrioritySelector must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for PrioritySelector<C> {
    fn tick(&mut self, ctx: &mut C) -> Outcome {
        // Always rescan from the top; no memory of prior ticks.
        for child in &mut self.children {
            match child.tick(ctx) {
                Outcome::Failure => continue,
                decisive => return decisive,
            }
        }
        // All children failed
        Outcome::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct TestContext {
        value: i32,
    }

    struct Increment;
    impl Behavior<TestContext> for Increment {
        fn tick(&mut self, ctx: &mut TestContext) -> Outcome {
            ctx.value += 1;
            Outcome::Success
        }
    }

    struct FailAlways;
    impl Behavior<TestContext> for FailAlways {
        fn tick(&mut self, _ctx: &mut TestContext) -> Outcome {
            Outcome::Failure
        }
    }

    /// Replays a scripted list of outcomes, then fails once exhausted.
    struct Script {
        outcomes: VecDeque<Outcome>,
    }

    impl Script {
        fn new(outcomes: &[Outcome]) -> Self {
            Self {
                outcomes: outcomes.iter().copied().collect(),
            }
        }
    }

    impl Behavior<TestContext> for Script {
        fn tick(&mut self, _ctx: &mut TestContext) -> Outcome {
            self.outcomes.pop_front().unwrap_or(Outcome::Failure)
        }
    }

    #[test]
    fn sequence_all_success() {
        let mut seq = Sequence::new(vec![Box::new(Increment), Box::new(Increment)]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Outcome::Success);
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let mut seq = Sequence::new(vec![
            Box::new(Increment),
            Box::new(FailAlways),
            Box::new(Increment), // Should not execute
        ]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Outcome::Failure);
        assert_eq!(ctx.value, 1); // Only first increment executed
    }

    #[test]
    fn sequence_resumes_at_running_child() {
        let mut seq = Sequence::new(vec![
            Box::new(Increment),
            Box::new(Script::new(&[
                Outcome::Running,
                Outcome::Running,
                Outcome::Success,
            ])),
            Box::new(Increment),
        ]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Outcome::Running);
        assert_eq!(seq.tick(&mut ctx), Outcome::Running);
        assert_eq!(seq.tick(&mut ctx), Outcome::Success);
        // The leading Increment ran exactly once: ticks 2 and 3 resumed at
        // the parked cursor instead of restarting the sequence.
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn sequence_restarts_after_failure() {
        let mut seq = Sequence::new(vec![
            Box::new(Increment),
            Box::new(Script::new(&[
                Outcome::Running,
                Outcome::Failure,
                Outcome::Running,
            ])),
        ]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Outcome::Running);
        assert_eq!(seq.tick(&mut ctx), Outcome::Failure);
        // Cursor reset: the next run starts from the first child again.
        assert_eq!(seq.tick(&mut ctx), Outcome::Running);
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let mut sel = PrioritySelector::new(vec![
            Box::new(FailAlways),
            Box::new(Increment),
            Box::new(Increment), // Should not execute
        ]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Outcome::Success);
        assert_eq!(ctx.value, 1); // Only the first Increment executed
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let mut sel = PrioritySelector::new(vec![Box::new(FailAlways), Box::new(FailAlways)]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Outcome::Failure);
    }

    #[test]
    fn selector_propagates_running() {
        let mut sel = PrioritySelector::new(vec![
            Box::new(FailAlways),
            Box::new(Script::new(&[Outcome::Running])),
        ]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Outcome::Running);
    }

    #[test]
    fn selector_rescans_from_top_every_tick() {
        // First child fails twice, then succeeds; second child would run
        // forever. The selector must hand control back to the first child
        // the moment it stops failing, even though the second child
        // reported Running on the prior ticks.
        let mut sel = PrioritySelector::new(vec![
            Box::new(Script::new(&[
                Outcome::Failure,
                Outcome::Failure,
                Outcome::Success,
            ])),
            Box::new(Script::new(&[Outcome::Running, Outcome::Running, Outcome::Running])),
        ]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Outcome::Running);
        assert_eq!(sel.tick(&mut ctx), Outcome::Running);
        assert_eq!(sel.tick(&mut ctx), Outcome::Success);
    }
}
