//! Outcome returned by behavior nodes.

/// The result of evaluating a behavior node for one tick.
///
/// # Tick Semantics
///
/// A node is re-entered from scratch on every tick, so the outcome doubles
/// as the scheduling protocol:
/// - Conditions and one-shot actions resolve to `Success` or `Failure`
///   within the tick.
/// - Multi-tick work (movement, casts, timed waits) reports `Running` and
///   is re-entered on the next tick, resuming from state the node itself
///   saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action executed without errors.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be executed.
    Failure,

    /// The behavior has made partial progress and must be ticked again.
    ///
    /// Only nodes that save resumable state (a cursor, a latched deadline)
    /// may report `Running`; a stateless node returning it would be
    /// indistinguishable from a fresh start on the next tick.
    Running,
}

impl Outcome {
    /// Returns `true` if this outcome is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Returns `true` if this outcome is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Outcome::Failure)
    }

    /// Returns `true` if this outcome is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Outcome::Running)
    }

    /// Inverts the outcome: Success becomes Failure and vice versa.
    ///
    /// `Running` is untouched; in-progress work is not a verdict that can
    /// be negated.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Outcome::Success => Outcome::Failure,
            Outcome::Failure => Outcome::Success,
            Outcome::Running => Outcome::Running,
        }
    }
}
