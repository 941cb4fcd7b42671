//! 4-4-4 breathing pulse.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

/// Length of each breathing phase. A full cycle is three of these.
pub const BREATH_PHASE: Duration = Duration::from_secs(4);

/// Circle scale at the end of an exhale, relative to the full inhale size.
pub const EXHALED_SCALE: f64 = 0.43;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
}

impl BreathPhase {
    pub fn next(self) -> BreathPhase {
        match self {
            BreathPhase::Inhale => BreathPhase::Hold,
            BreathPhase::Hold => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::Inhale,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Inhale",
            BreathPhase::Hold => "Hold",
            BreathPhase::Exhale => "Exhale",
        }
    }
}

#[derive(Debug, Clone)]
pub struct BreathingCue {
    phase: BreathPhase,
    phase_started: Instant,
}

impl BreathingCue {
    pub fn new(now: Instant) -> Self {
        Self {
            phase: BreathPhase::Inhale,
            phase_started: now,
        }
    }

    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    pub fn label(&self) -> &'static str {
        self.phase.label()
    }

    pub fn step(&mut self, now: Instant) {
        self.phase = self.phase.next();
        self.phase_started = now;
    }

    /// Circle size in `EXHALED_SCALE..=1.0`.
    ///
    /// Grows through the inhale, stays full while holding, shrinks through
    /// the exhale, easing in and out over each phase.
    pub fn scale(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.phase_started);
        let t = ease_in_out(elapsed.as_secs_f64() / BREATH_PHASE.as_secs_f64());
        let span = 1.0 - EXHALED_SCALE;
        match self.phase {
            BreathPhase::Inhale => EXHALED_SCALE + span * t,
            BreathPhase::Hold => 1.0,
            BreathPhase::Exhale => 1.0 - span * t,
        }
    }
}

fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
