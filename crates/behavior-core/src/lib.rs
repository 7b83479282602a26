//! Tick-driven behavior tree engine for scripted game automation.
//!
//! This library provides the execution core that quest-behavior scripts
//! compose their logic from: small decision/action nodes arranged into a
//! tree, evaluated once per external tick, with a three-valued outcome
//! propagating up through well-defined composition rules.
//!
//! - **Cooperative, never blocking**: multi-tick work reports
//!   [`Outcome::Running`] and is re-entered next tick from node-local
//!   state; no node may suspend the calling thread.
//! - **Resume vs. rescan**: [`Sequence`] resumes at its parked cursor,
//!   [`PrioritySelector`] re-examines every branch from the top each tick
//!   so urgent concerns preempt in-flight ones.
//! - **Runtime extension points**: [`HookPoint`] nodes read named slots of
//!   a [`HookRegistry`] that outside code fills and empties at runtime,
//!   without rebuilding the host tree.
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Outcome`]: Success, Failure, or Running
//! - Composite nodes: [`Sequence`], [`PrioritySelector`]
//! - Decorator nodes: [`Decorator`], [`DecoratorContinue`], [`Inverter`],
//!   [`AlwaysSucceed`]
//! - Leaf nodes: [`Action`], [`Condition`], [`TimedWait`]
//! - [`Evaluator`]: drives the root, one evaluation per tick

pub mod action;
pub mod behavior;
pub mod builder;
pub mod clock;
pub mod composite;
pub mod decorator;
pub mod evaluator;
pub mod hooks;
pub mod outcome;
pub mod wait;

// Re-export core types for ergonomic API
pub use action::{Action, ActionAlwaysFail, ActionAlwaysSucceed, Condition};
pub use behavior::Behavior;
pub use clock::{ClockProvider, MockClock, SystemClock};
pub use composite::{PrioritySelector, Sequence};
pub use decorator::{AlwaysSucceed, Decorator, DecoratorContinue, Inverter};
pub use evaluator::Evaluator;
pub use hooks::{HookError, HookGuard, HookHandle, HookPoint, HookRegistry, HookSubtree};
pub use outcome::Outcome;
pub use wait::{TimedWait, TimeoutPolicy};
