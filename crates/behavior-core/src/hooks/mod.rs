//! Runtime hook slots for externally-owned subtrees.
//!
//! A tree can expose named extension points ([`HookPoint`] nodes) that
//! code outside the tree's owner fills in at runtime: a quest script
//! inserts its combat override into the `"combat-main"` slot when it
//! starts and removes it when it stops, without ever touching the host
//! tree itself.
//!
//! # Architecture
//!
//! - [`HookRegistry`] is an explicit, process-lifetime object handed to
//!   whoever needs to insert or remove; there is no ambient global.
//! - Within a slot, entries are kept sorted by ascending priority and are
//!   evaluated like a priority selector: first non-Failure wins.
//! - [`HookRegistry::insert`] returns a [`HookHandle`]; every insertion
//!   must be paired with removal on the owner's teardown path. The
//!   [`HookGuard`] RAII wrapper makes that pairing structural.
//! - Mutation may happen between ticks but never observes a slot
//!   mid-evaluation: [`HookPoint`] scans a snapshot taken at the start of
//!   the tick, so a hook removing itself while running cannot corrupt the
//!   in-progress scan.

mod guard;
mod point;
mod registry;

pub use guard::HookGuard;
pub use point::HookPoint;
pub use registry::{HookHandle, HookRegistry, HookSubtree};

/// Errors surfaced by hook registration.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    /// The same subtree identity was inserted twice into one slot.
    ///
    /// This guards against faulty start/stop pairing in callers: a
    /// behavior that registers its hooks on start without having removed
    /// them on the previous stop gets told, loudly, instead of silently
    /// running its subtree twice per tick. Recoverable; callers may log
    /// and ignore.
    #[error("hook subtree already registered in slot `{slot}`")]
    DuplicateHook {
        /// Name of the slot the duplicate insertion targeted.
        slot: String,
    },
}
