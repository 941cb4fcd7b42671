//! Guidance text shown during a session.
//!
//! The content is a static table, served behind an artificial delay so the
//! session screen has a visible loading state.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::session::Mode;

/// Default artificial latency of [`StaticAdvice`].
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(600);

/// Title, body and steps for one mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceContent {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// Anything that can produce guidance for a mode.
///
/// Each call is independent; implementations must be safe to call
/// repeatedly and concurrently.
#[async_trait]
pub trait AdviceSource: Send + Sync {
    async fn fetch(&self, mode: Mode) -> Result<AdviceContent, ContentError>;
}

/// Built-in source: a fixed table plus a fixed delay.
#[derive(Debug, Clone)]
pub struct StaticAdvice {
    latency: Duration,
}

impl StaticAdvice {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Table lookup by mode key. Unknown keys get the generic entry.
    pub fn lookup(key: &str) -> AdviceContent {
        match key {
            "breathing" => advice(
                "Deep Breathing",
                "Focus on your breath. Feel the air fill your lungs, then let it out slowly.",
                &["Inhale for 4 seconds", "Hold for 4 seconds", "Exhale for 4 seconds"],
            ),
            "eyes" => advice(
                "Eye Relief",
                "Staring at a screen for long stretches tires your eyes. Let's move your gaze around.",
                &[
                    "Look at something far away for 20 seconds",
                    "Roll your eyes clockwise",
                    "Close your eyes and rest for a moment",
                ],
            ),
            "meditation" => advice(
                "A Moment of Meditation",
                "Set the worries of work aside for now and bring your mind back to the present.",
                &[
                    "Feel your feet on the floor",
                    "Relax your shoulders",
                    "Let your thoughts drift away",
                ],
            ),
            _ => advice("Relax", "Take a break.", &[]),
        }
    }
}

impl Default for StaticAdvice {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl AdviceSource for StaticAdvice {
    async fn fetch(&self, mode: Mode) -> Result<AdviceContent, ContentError> {
        tokio::time::sleep(self.latency).await;
        Ok(Self::lookup(mode.key()))
    }
}

fn advice(title: &str, content: &str, steps: &[&str]) -> AdviceContent {
    AdviceContent {
        title: title.to_string(),
        content: content.to_string(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
    }
}
