//! Timer abstraction for the replay loop.
//!
//! The driver never sleeps or spawns anything itself. It asks a `Scheduler`
//! for a single-shot timer and expects the host to call
//! [`Animator::tick`](crate::Animator::tick) when that timer fires.

use std::collections::VecDeque;
use std::time::Duration;

/// Handle to a pending single-shot timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// A source of single-shot timers (event loop, timer queue, render loop...).
pub trait Scheduler {
    /// Arrange for the driver to be ticked once after `delay`.
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Drop a pending timer. Unknown or already-fired ids are ignored.
    fn cancel(&mut self, timer: TimerId);
}

impl<T: Scheduler + ?Sized> Scheduler for &mut T {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        (**self).schedule(delay)
    }

    fn cancel(&mut self, timer: TimerId) {
        (**self).cancel(timer)
    }
}

/// Deterministic scheduler with a virtual clock.
///
/// Timers fire in order of their due time (ties in scheduling order) only
/// when [`fire_next`](ManualScheduler::fire_next) is called, which advances
/// the clock to the timer's due time.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    pending: VecDeque<(TimerId, Duration)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed so far
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers waiting to fire
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pop the earliest timer and advance the clock to its due time.
    pub fn fire_next(&mut self) -> Option<TimerId> {
        let (index, _) = self
            .pending
            .iter()
            .enumerate()
            .min_by_key(|(_, (_, due))| *due)?;
        let (timer, due) = self.pending.remove(index)?;
        self.now = self.now.max(due);
        Some(timer)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.next_id += 1;
        let timer = TimerId(self.next_id);
        self.pending.push_back((timer, self.now + delay));
        timer
    }

    fn cancel(&mut self, timer: TimerId) {
        self.pending.retain(|(id, _)| *id != timer);
    }
}
