use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::message::SessionId;
use crate::session::Mode;

/// Every state change of the session controller produces an Event.
/// The terminal UI redraws on them; `zenbreak run` prints them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ModeSelected {
        mode: Mode,
        at: DateTime<Utc>,
    },
    DurationSelected {
        duration_minutes: u32,
        at: DateTime<Utc>,
    },
    SessionStarted {
        session: SessionId,
        mode: Mode,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    CountdownTicked {
        session: SessionId,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    SessionFinished {
        session: SessionId,
        mode: Mode,
        duration_minutes: u32,
        at: DateTime<Utc>,
    },
    SessionReset {
        session: SessionId,
        at: DateTime<Utc>,
    },
    AdviceLoaded {
        session: SessionId,
        title: String,
        at: DateTime<Utc>,
    },
    /// Guidance could not be fetched; the session carries on without it.
    AdviceFailed {
        session: SessionId,
        reason: String,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Whether this event ends a session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Event::SessionFinished { .. } | Event::SessionReset { .. })
    }
}
