//! Time-gated leaf nodes.
//!
//! [`TimedWait`] is the engine's only sanctioned way to express "wait for
//! a while": it never blocks the calling thread, it reports `Running`
//! tick after tick until either its completion predicate holds or its
//! latched deadline passes. What happens at the deadline is configured by
//! [`TimeoutPolicy`] -- a wait inside a sequence can be a soft pause
//! (succeed once time elapses) or a hard timeout (fail the sequence).

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::clock::{ClockProvider, SystemClock};
use crate::{Behavior, Outcome};

/// What a [`TimedWait`] reports when its deadline passes without the
/// completion predicate holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutPolicy {
    /// Report `Success` once time elapses, whatever the predicate says.
    ///
    /// Use for throttles and settle delays ("wait 1.5s after casting").
    Succeed,

    /// Report `Failure` on timeout.
    ///
    /// Use to bound how long a sequence is willing to wait for an external
    /// condition before giving up on the whole branch.
    Fail,
}

enum WaitState {
    NotStarted,
    Waiting { deadline: Instant },
    Done(Outcome),
}

/// Leaf that polls a completion predicate under a latched deadline.
///
/// # State machine
///
/// On the first tick the deadline is latched as `now + duration`; it is
/// never recomputed afterwards. Each tick (including the first) then
/// checks, in order:
/// 1. predicate holds -> `Success`, terminal
/// 2. deadline passed -> the policy outcome, terminal
/// 3. otherwise -> `Running`
///
/// The terminal outcome is latched: further ticks return it unchanged. A
/// distinct logical wait is a new `TimedWait` instance -- re-arming in
/// place would silently turn a one-shot delay into a periodic one inside
/// a restarting sequence.
pub struct TimedWait<C> {
    duration: Duration,
    done_when: Box<dyn Fn(&C) -> bool + Send>,
    on_timeout: TimeoutPolicy,
    clock: Arc<dyn ClockProvider>,
    state: WaitState,
}

impl<C> TimedWait<C> {
    /// Creates a wait that polls `done_when` for up to `duration`,
    /// reporting the `on_timeout` policy outcome if time runs out first.
    pub fn new<F>(duration: Duration, done_when: F, on_timeout: TimeoutPolicy) -> Self
    where
        F: Fn(&C) -> bool + Send + 'static,
    {
        Self {
            duration,
            done_when: Box::new(done_when),
            on_timeout,
            clock: Arc::new(SystemClock),
            state: WaitState::NotStarted,
        }
    }

    /// Creates an unconditional pause: `Running` until `duration` elapses,
    /// then `Success`.
    pub fn sleep(duration: Duration) -> Self {
        Self::new(duration, |_: &C| false, TimeoutPolicy::Succeed)
    }

    /// Replaces the time source. For tests.
    pub fn with_clock(mut self, clock: Arc<dyn ClockProvider>) -> Self {
        self.clock = clock;
        self
    }
}

impl<C> Behavior<C> for TimedWait<C> {
    fn tick(&mut self, ctx: &mut C) -> Outcome {
        let deadline = match self.state {
            WaitState::Done(outcome) => return outcome,
            WaitState::NotStarted => {
                // Latch once; never recomputed on later ticks.
                let deadline = self.clock.now() + self.duration;
                self.state = WaitState::Waiting { deadline };
                deadline
            }
            WaitState::Waiting { deadline } => deadline,
        };

        if (self.done_when)(ctx) {
            self.state = WaitState::Done(Outcome::Success);
            return Outcome::Success;
        }

        if self.clock.now() >= deadline {
            let outcome = match self.on_timeout {
                TimeoutPolicy::Succeed => Outcome::Success,
                TimeoutPolicy::Fail => Outcome::Failure,
            };
            self.state = WaitState::Done(outcome);
            return outcome;
        }

        Outcome::Running
    }
}
