//! Timed animation flag for snap transitions.
//!
//! Follows the deadline pattern used for cursor blinking: the flag flips on
//! synchronously, a single clear is scheduled, and the host either polls
//! [`AnimationPulse::tick`] (scheduling a wake-up at
//! [`AnimationPulse::next_deadline`]) or delivers a real timer callback via
//! [`AnimationPulse::fire`].

use web_time::{Duration, Instant};

/// Length of the snap transition in milliseconds.
pub const PULSE_DURATION_MS: u64 = 275;

/// Identifies one scheduled clear. A pulse cancels the previous handle, so a
/// late callback for it is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug)]
struct PendingClear {
    handle: TimerHandle,
    deadline: Instant,
}

/// `true` for a fixed window after the most recent pulse.
#[derive(Debug)]
pub struct AnimationPulse {
    duration: Duration,
    animating: bool,
    pending: Option<PendingClear>,
    next_handle: u64,
}

impl AnimationPulse {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(PULSE_DURATION_MS);

    pub fn new() -> Self {
        Self::with_duration(Self::DEFAULT_DURATION)
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            duration,
            animating: false,
            pending: None,
            next_handle: 0,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Turns the flag on and (re)schedules its clear `duration` after `now`.
    pub fn pulse(&mut self, now: Instant) -> TimerHandle {
        if let Some(previous) = self.pending.take() {
            log::trace!("pulse supersedes pending clear {:?}", previous.handle);
        }
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        self.animating = true;
        self.pending = Some(PendingClear {
            handle,
            deadline: now + self.duration,
        });
        handle
    }

    /// Drops the pending clear and turns the flag off immediately.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.animating = false;
    }

    /// Clears the flag once the deadline has passed.
    /// Returns `true` if the state changed (redraw needed).
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending = None;
                self.animating = false;
                true
            }
            _ => false,
        }
    }

    /// Delivers a host timer callback. Stale handles are ignored.
    /// Returns `true` if the state changed.
    pub fn fire(&mut self, handle: TimerHandle) -> bool {
        match self.pending {
            Some(pending) if pending.handle == handle => {
                self.pending = None;
                self.animating = false;
                true
            }
            _ => {
                log::trace!("ignoring stale pulse timer {:?}", handle);
                false
            }
        }
    }

    /// Deadline of the pending clear, for `WaitUntil`-style scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|pending| pending.deadline)
    }

    pub fn pending_handle(&self) -> Option<TimerHandle> {
        self.pending.map(|pending| pending.handle)
    }
}

impl Default for AnimationPulse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/pulse_tests.rs"]
mod tests;
