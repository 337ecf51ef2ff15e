//! Auto-advance schedule
//!
//! A deadline-based recurring timer driving hands-free slide progression.
//! The pending deadline lives in a single `Option<Instant>`, so there is at
//! most one outstanding fire at any instant; re-arming replaces it, which
//! is exactly the cancel-then-restart semantics user navigation needs.
//!
//! All timing is passed in as `Instant` values, keeping tests free of
//! sleeps.

use std::time::{Duration, Instant};

/// Default interval between automatic advances.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(4000);

/// Recurring auto-advance timer.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    interval: Duration,
    next_fire: Option<Instant>,
}

impl AutoAdvance {
    /// Create a stopped schedule with the given interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_fire: None,
        }
    }

    /// Arm the schedule: the first fire is one full interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_fire = Some(now + self.interval);
    }

    /// Cancel any pending fire, then re-arm from `now`. Called for every
    /// user-initiated navigation so a manual step defers the next
    /// automatic one by a full interval.
    pub fn reset(&mut self, now: Instant) {
        self.next_fire = Some(now + self.interval);
    }

    /// Stop the schedule entirely.
    pub fn cancel(&mut self) {
        self.next_fire = None;
    }

    /// Whether the schedule is armed.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.next_fire.is_some()
    }

    /// The armed interval.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Check whether a tick fired by `now`. A fired tick re-arms the next
    /// deadline from `now` without any other side effect; the caller
    /// decides whether to act on it (ticks are skipped while paused, but
    /// the schedule keeps running).
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_fire {
            Some(deadline) if now >= deadline => {
                self.next_fire = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time remaining until the next fire, if armed. Drives the status
    /// bar countdown.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.next_fire
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

impl Default for AutoAdvance {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}
