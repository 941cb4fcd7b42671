//! Messages delivered by timers and background tasks to the event loop.
//!
//! Everything that happens "later" (a countdown tick, a cue step, a finished
//! content fetch) arrives as a [`Message`] tagged with the session it belongs
//! to. The owner of the state drains the channel and drops anything tagged
//! with a session that is no longer current.

use std::fmt;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::content::AdviceContent;
use crate::error::ContentError;

/// Identifies one run of a session. Strictly increasing per controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub u64);

impl SessionId {
    pub fn next(self) -> SessionId {
        SessionId(self.0 + 1)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
pub enum Message {
    /// One second of the session countdown elapsed.
    CountdownTick { session: SessionId },
    /// A content fetch finished.
    AdviceResolved {
        session: SessionId,
        result: Result<AdviceContent, ContentError>,
    },
    /// The mounted visual cue should move to its next phase.
    CueStep { session: SessionId },
}

impl Message {
    pub fn session(&self) -> SessionId {
        match self {
            Message::CountdownTick { session }
            | Message::AdviceResolved { session, .. }
            | Message::CueStep { session } => *session,
        }
    }
}

pub type MessageSender = mpsc::UnboundedSender<Message>;
pub type MessageReceiver = mpsc::UnboundedReceiver<Message>;

/// Create the channel shared by the controller, the cue stage and the loop.
pub fn channel() -> (MessageSender, MessageReceiver) {
    mpsc::unbounded_channel()
}
