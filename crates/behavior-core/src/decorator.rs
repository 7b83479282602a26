//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result or gate
//! its execution. [`Decorator`] and [`DecoratorContinue`] guard the child
//! behind a predicate over the tick context; [`Inverter`] (NOT logic) and
//! [`AlwaysSucceed`] (error suppression) transform the child's outcome.
//!
//! Guards are re-checked on every tick and never cached: a child that ran
//! last tick is not evaluated this tick unless its guard still holds.

use crate::{Behavior, Outcome};

/// Gate-and-stop decorator: evaluates its child only while a guard holds.
///
/// # Semantics
///
/// - If the guard predicate returns `true`, the child is evaluated and its
///   outcome is returned untouched.
/// - If the guard returns `false`, the decorator returns `Failure` without
///   evaluating the child, so an enclosing selector can move on to the
///   next branch.
pub struct Decorator<C> {
    guard: Box<dyn Fn(&C) -> bool + Send>,
    child: Box<dyn Behavior<C>>,
}

impl<C> Decorator<C> {
    /// Creates a decorator gating `child` behind `guard`.
    pub fn new<G>(guard: G, child: Box<dyn Behavior<C>>) -> Self
    where
        G: Fn(&C) -> bool + Send + 'static,
    {
        Self {
            guard: Box::new(guard),
            child,
        }
    }
}

impl<C> Behavior<C> for Decorator<C> {
    fn tick(&mut self, ctx: &mut C) -> Outcome {
        if (self.guard)(ctx) {
            self.child.tick(ctx)
        } else {
            Outcome::Failure
        }
    }
}

/// Gate-and-continue decorator: runs a fallback when the guard fails.
///
/// # Semantics
///
/// - Guard holds: the child is evaluated and its outcome returned.
/// - Guard fails: the fallback leaf is evaluated instead and **its**
///   outcome is reported onward, letting the branch stay decisive (e.g.,
///   "stand still" instead of "walk") rather than dropping out of the
///   enclosing selector.
pub struct DecoratorContinue<C> {
    guard: Box<dyn Fn(&C) -> bool + Send>,
    child: Box<dyn Behavior<C>>,
    fallback: Box<dyn Behavior<C>>,
}

impl<C> DecoratorContinue<C> {
    /// Creates a decorator running `child` while `guard` holds and
    /// `fallback` otherwise.
    pub fn new<G>(guard: G, child: Box<dyn Behavior<C>>, fallback: Box<dyn Behavior<C>>) -> Self
    where
        G: Fn(&C) -> bool + Send + 'static,
    {
        Self {
            guard: Box::new(guard),
            child,
            fallback,
        }
    }
}

impl<C> Behavior<C> for DecoratorContinue<C> {
    fn tick(&mut self, ctx: &mut C) -> Outcome {
        if (self.guard)(ctx) {
            self.child.tick(ctx)
        } else {
            self.fallback.tick(ctx)
        }
    }
}

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `Running` passes through unchanged: there is no verdict to invert yet
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<C> {
    child: Box<dyn Behavior<C>>,
}

impl<C> Inverter<C> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn tick(&mut self, ctx: &mut C) -> Outcome {
        self.child.tick(ctx).invert()
    }
}

/// Reports `Success` for any terminal outcome of the child.
///
/// # Semantics
///
/// - Child returns `Success` or `Failure`: returns `Success`
/// - Child returns `Running`: returns `Running` -- the child is still in
///   progress and must keep being resumed before its result can be
///   suppressed
///
/// This is useful for:
/// - Optional steps that shouldn't cause a sequence to fail
/// - Observer nodes that must not affect control flow
pub struct AlwaysSucceed<C> {
    child: Box<dyn Behavior<C>>,
}

impl<C> AlwaysSucceed<C> {
    /// Creates a new always-succeed wrapper around the given child behavior.
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for AlwaysSucceed<C> {
    fn tick(&mut self, ctx: &mut C) -> Outcome {
        match self.child.tick(ctx) {
            Outcome::Running => Outcome::Running,
            _ => Outcome::Success,
        }
    }
}
