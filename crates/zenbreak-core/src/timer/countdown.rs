//! Whole-second countdown.
//!
//! Like the rest of the timer module it has no thread of its own: whoever owns
//! it calls [`Countdown::tick`] once per elapsed second.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    total_secs: u64,
    remaining_secs: u64,
}

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still counting; carries the new remaining value.
    Running(u64),
    /// This tick reached zero.
    Expired,
    /// Already at zero before the tick; nothing changed.
    Idle,
}

impl Countdown {
    pub fn new(total_secs: u64) -> Self {
        Self {
            total_secs,
            remaining_secs: total_secs,
        }
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    /// Consume one second.
    ///
    /// A value at or below one expires on this tick, so the countdown never
    /// lingers at zero and never goes negative.
    pub fn tick(&mut self) -> TickOutcome {
        match self.remaining_secs {
            0 => TickOutcome::Idle,
            1 => {
                self.remaining_secs = 0;
                TickOutcome::Expired
            }
            n => {
                self.remaining_secs = n - 1;
                TickOutcome::Running(self.remaining_secs)
            }
        }
    }
}
