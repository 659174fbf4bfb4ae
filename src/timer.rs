//! Deferred dealer ticks.

use core::time::Duration;
use std::time::Instant;

/// Source of the current time.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// The monotonic system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// A single cancellable deadline for the next dealer step.
///
/// Scheduling replaces any pending deadline, so at most one dealer tick is
/// ever outstanding.
#[derive(Debug, Clone)]
pub struct DealerTimer<C = SystemClock> {
    clock: C,
    deadline: Option<Instant>,
}

impl<C: Clock> DealerTimer<C> {
    /// Creates an idle timer reading time from `clock`.
    pub const fn new(clock: C) -> Self {
        Self {
            clock,
            deadline: None,
        }
    }

    /// Arms the timer to fire `delay` from now.
    pub fn schedule(&mut self, delay: Duration) {
        self.deadline = Some(self.clock.now() + delay);
    }

    /// Drops the pending deadline, if any.
    pub const fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns whether a deadline is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns the time left until the deadline, zero if already due.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(self.clock.now()))
    }

    /// Returns `true` exactly once when the deadline has passed.
    pub fn fire(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if self.clock.now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
