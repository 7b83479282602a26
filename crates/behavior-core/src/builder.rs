//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.

use std::sync::Arc;
use std::time::Duration;

use crate::hooks::{HookPoint, HookRegistry};
use crate::wait::{TimedWait, TimeoutPolicy};
use crate::{
    Action, AlwaysSucceed, Behavior, Condition, Decorator, DecoratorContinue, Inverter, Outcome,
    PrioritySelector, Sequence,
};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// Creates a priority selector node.
///
/// Shorthand for `Box::new(PrioritySelector::new(children))`.
#[inline]
pub fn priority_selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(PrioritySelector::new(children))
}

/// Creates a gate-and-stop decorator node.
#[inline]
pub fn decorator<C: 'static, G>(guard: G, child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>>
where
    G: Fn(&C) -> bool + Send + 'static,
{
    Box::new(Decorator::new(guard, child))
}

/// Creates a gate-and-continue decorator node.
#[inline]
pub fn decorator_continue<C: 'static, G>(
    guard: G,
    child: Box<dyn Behavior<C>>,
    fallback: Box<dyn Behavior<C>>,
) -> Box<dyn Behavior<C>>
where
    G: Fn(&C) -> bool + Send + 'static,
{
    Box::new(DecoratorContinue::new(guard, child, fallback))
}

/// Creates an inverter node.
///
/// Shorthand for `Box::new(Inverter::new(child))`.
#[inline]
pub fn inverter<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Inverter::new(child))
}

/// Creates an always-succeed node.
///
/// Shorthand for `Box::new(AlwaysSucceed::new(child))`.
#[inline]
pub fn always_succeed<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(AlwaysSucceed::new(child))
}

/// Creates a closure-backed action leaf.
#[inline]
pub fn action<C: 'static, F>(f: F) -> Box<dyn Behavior<C>>
where
    F: FnMut(&mut C) -> Outcome + Send + 'static,
{
    Box::new(Action::new(f))
}

/// Creates a predicate leaf.
#[inline]
pub fn condition<C: 'static, F>(predicate: F) -> Box<dyn Behavior<C>>
where
    F: Fn(&C) -> bool + Send + 'static,
{
    Box::new(Condition::new(predicate))
}

/// Creates a wait that fails if `done_when` does not hold within
/// `duration`.
#[inline]
pub fn wait<C: 'static, F>(duration: Duration, done_when: F) -> Box<dyn Behavior<C>>
where
    F: Fn(&C) -> bool + Send + 'static,
{
    Box::new(TimedWait::new(duration, done_when, TimeoutPolicy::Fail))
}

/// Creates a wait that succeeds once `duration` elapses, or earlier if
/// `done_when` holds.
#[inline]
pub fn wait_continue<C: 'static, F>(duration: Duration, done_when: F) -> Box<dyn Behavior<C>>
where
    F: Fn(&C) -> bool + Send + 'static,
{
    Box::new(TimedWait::new(duration, done_when, TimeoutPolicy::Succeed))
}

/// Creates an unconditional pause for `duration`.
#[inline]
pub fn sleep<C: 'static>(duration: Duration) -> Box<dyn Behavior<C>> {
    Box::new(TimedWait::sleep(duration))
}

/// Creates a hook point node reading `slot` from `registry`.
#[inline]
pub fn hook_point<C: 'static>(
    slot: impl Into<String>,
    registry: Arc<HookRegistry<C>>,
) -> Box<dyn Behavior<C>> {
    Box::new(HookPoint::new(slot, registry))
}
