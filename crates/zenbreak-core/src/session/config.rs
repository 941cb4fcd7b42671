use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Relaxation technique for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Breathing,
    Eyes,
    Meditation,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Breathing, Mode::Eyes, Mode::Meditation];

    /// Stable lowercase key, used in config files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Mode::Breathing => "breathing",
            Mode::Eyes => "eyes",
            Mode::Meditation => "meditation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Breathing => "Deep Breathing",
            Mode::Eyes => "Eye Relief",
            Mode::Meditation => "Quick Meditation",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Mode::Breathing => "Ease stress and settle your mind with paced breathing.",
            Mode::Eyes => "Relieve the strain that screens put on your eyes.",
            Mode::Meditation => "Clear the noise and recharge in a moment.",
        }
    }

    /// Mode after this one, wrapping around.
    pub fn next(self) -> Mode {
        match self {
            Mode::Breathing => Mode::Eyes,
            Mode::Eyes => Mode::Meditation,
            Mode::Meditation => Mode::Breathing,
        }
    }

    /// Mode before this one, wrapping around.
    pub fn prev(self) -> Mode {
        match self {
            Mode::Breathing => Mode::Meditation,
            Mode::Eyes => Mode::Breathing,
            Mode::Meditation => Mode::Eyes,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Mode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownMode(s.to_string()))
    }
}

/// Top-level screen the application is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppPhase {
    Home,
    Session,
    Finished,
}

/// What the user picked on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub duration_minutes: u32,
    pub mode: Mode,
}

impl SessionConfig {
    pub const DEFAULT_MINUTES: u32 = 3;

    /// Build a config, rejecting a zero-minute duration.
    pub fn new(mode: Mode, duration_minutes: u32) -> Result<Self, ValidationError> {
        if duration_minutes == 0 {
            return Err(ValidationError::ZeroDuration);
        }
        Ok(Self {
            duration_minutes,
            mode,
        })
    }

    /// Session length in seconds.
    ///
    /// Uses saturating arithmetic to prevent overflow with large values.
    pub fn duration_secs(&self) -> u64 {
        u64::from(self.duration_minutes).saturating_mul(60)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_minutes: Self::DEFAULT_MINUTES,
            mode: Mode::Breathing,
        }
    }
}

/// Render whole seconds as `m:ss`.
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
