//! Visual cues shown during a session.
//!
//! Each variant is its own small state machine with its own cadence. None of
//! them knows about the countdown or the guidance content.

mod breathing;
mod eyes;
mod meditation;
mod stage;

use std::time::Duration;

use tokio::time::Instant;

use crate::session::Mode;

pub use breathing::{BreathPhase, BreathingCue, BREATH_PHASE, EXHALED_SCALE};
pub use eyes::{EyeCue, EyeStep, EYE_STEP};
pub use meditation::{Blob, MeditationCue, BLOB_LOOP, MEDITATION_LABEL};
pub use stage::CueStage;

#[derive(Debug, Clone)]
pub enum VisualCue {
    Breathing(BreathingCue),
    Eyes(EyeCue),
    Meditation(MeditationCue),
}

impl VisualCue {
    pub fn for_mode(mode: Mode, now: Instant) -> Self {
        match mode {
            Mode::Breathing => VisualCue::Breathing(BreathingCue::new(now)),
            Mode::Eyes => VisualCue::Eyes(EyeCue::new()),
            Mode::Meditation => VisualCue::Meditation(MeditationCue::new(now)),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            VisualCue::Breathing(_) => Mode::Breathing,
            VisualCue::Eyes(_) => Mode::Eyes,
            VisualCue::Meditation(_) => Mode::Meditation,
        }
    }

    /// How often the cue needs a step, if it steps at all.
    pub fn cadence(&self) -> Option<Duration> {
        match self {
            VisualCue::Breathing(_) => Some(BREATH_PHASE),
            VisualCue::Eyes(_) => Some(EYE_STEP),
            VisualCue::Meditation(_) => None,
        }
    }

    pub fn step(&mut self, now: Instant) {
        match self {
            VisualCue::Breathing(cue) => cue.step(now),
            VisualCue::Eyes(cue) => cue.step(),
            VisualCue::Meditation(_) => {}
        }
    }

    /// Text shown with the cue right now.
    pub fn label(&self) -> &'static str {
        match self {
            VisualCue::Breathing(cue) => cue.label(),
            VisualCue::Eyes(cue) => cue.current().label(),
            VisualCue::Meditation(cue) => cue.label(),
        }
    }
}
