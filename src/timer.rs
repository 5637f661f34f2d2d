//! One-shot, cancelable delayed task driven by clock ticks.

use crate::time::ms_to_ticks;

/// A fire-once timer. The owner feeds it ticks and performs the deferred
/// work when [`Deferred::advance`] reports that it fired.
///
/// Dropping the owner drops the timer, and [`Deferred::cancel`] disarms it
/// early, so a callback can never run against state that has been torn down.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deferred {
    remaining: Option<u32>,
}

impl Deferred {
    pub fn new() -> Self {
        Self { remaining: None }
    }

    /// Arm the timer to fire after `delay_ms`. Re-arming replaces any
    /// pending deadline.
    pub fn schedule_ms(&mut self, delay_ms: u32) {
        self.remaining = Some(ms_to_ticks(delay_ms));
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    #[cfg(test)]
    pub fn remaining_ticks(&self) -> Option<u32> {
        self.remaining
    }

    /// Advance by `ticks`. Returns `true` exactly once, on the call during
    /// which the deadline is reached; the timer is disarmed afterwards.
    pub fn advance(&mut self, ticks: u32) -> bool {
        match self.remaining {
            Some(left) if ticks >= left => {
                self.remaining = None;
                true
            }
            Some(left) => {
                self.remaining = Some(left - ticks);
                false
            }
            None => false,
        }
    }
}
