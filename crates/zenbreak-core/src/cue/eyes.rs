//! Eye-rest prompts: look around, then close the eyes.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Time spent on each prompt.
pub const EYE_STEP: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EyeStep {
    LookUp,
    LookDown,
    LookLeft,
    LookRight,
    CloseEyes,
}

impl EyeStep {
    pub const SEQUENCE: [EyeStep; 5] = [
        EyeStep::LookUp,
        EyeStep::LookDown,
        EyeStep::LookLeft,
        EyeStep::LookRight,
        EyeStep::CloseEyes,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            EyeStep::LookUp => "↑",
            EyeStep::LookDown => "↓",
            EyeStep::LookLeft => "←",
            EyeStep::LookRight => "→",
            EyeStep::CloseEyes => "◡ ◡",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EyeStep::LookUp => "Look Up",
            EyeStep::LookDown => "Look Down",
            EyeStep::LookLeft => "Look Left",
            EyeStep::LookRight => "Look Right",
            EyeStep::CloseEyes => "Close Eyes",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EyeCue {
    index: usize,
}

impl EyeCue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> EyeStep {
        EyeStep::SEQUENCE[self.index]
    }

    pub fn step(&mut self) {
        self.index = (self.index + 1) % EyeStep::SEQUENCE.len();
    }
}
