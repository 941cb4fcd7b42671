//! Session controller.
//!
//! Owns the application phase, the chosen [`SessionConfig`], the countdown
//! and the guidance content. Commands return `Some(Event)` when they change
//! state and `None` when they are ignored.
//!
//! ## State Transitions
//!
//! ```text
//! Home --start--> Session --countdown hits 0--> Finished
//!   ^                |                             |
//!   +-----reset------+----------reset--------------+
//!                    ^                             |
//!                    +-----------start-------------+
//! ```
//!
//! Timers and the content fetch run as tokio tasks that report back through
//! [`Message`]s; feed those to [`SessionController::handle`].

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::config::{format_time, AppPhase, Mode, SessionConfig};
use crate::content::{AdviceContent, AdviceSource};
use crate::error::ContentError;
use crate::events::Event;
use crate::message::{Message, MessageSender, SessionId};
use crate::timer::{Countdown, TickOutcome, Ticker};

/// Countdown cadence.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Guidance for the current session, as the screen sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum AdviceState {
    Unset,
    Loading,
    Ready(AdviceContent),
    /// The fetch failed; show the generic placeholder.
    Failed,
}

impl AdviceState {
    pub fn content(&self) -> Option<&AdviceContent> {
        match self {
            AdviceState::Ready(content) => Some(content),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AdviceState::Loading)
    }
}

pub struct SessionController {
    config: SessionConfig,
    phase: AppPhase,
    /// Id of the current (or most recent) session. `SessionId(0)` before the
    /// first start.
    session: SessionId,
    countdown: Option<Countdown>,
    advice: AdviceState,
    last_fetch_error: Option<String>,
    ticker: Option<Ticker>,
    source: Arc<dyn AdviceSource>,
    tx: MessageSender,
}

impl SessionController {
    pub fn new(source: Arc<dyn AdviceSource>, tx: MessageSender) -> Self {
        Self::with_config(SessionConfig::default(), source, tx)
    }

    pub fn with_config(
        config: SessionConfig,
        source: Arc<dyn AdviceSource>,
        tx: MessageSender,
    ) -> Self {
        Self {
            config,
            phase: AppPhase::Home,
            session: SessionId(0),
            countdown: None,
            advice: AdviceState::Unset,
            last_fetch_error: None,
            ticker: None,
            source,
            tx,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> AppPhase {
        self.phase
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn session_id(&self) -> SessionId {
        self.session
    }

    /// Remaining seconds, or `None` on the home screen.
    pub fn remaining_secs(&self) -> Option<u64> {
        match self.phase {
            AppPhase::Home => None,
            _ => self.countdown.map(|c| c.remaining_secs()),
        }
    }

    /// Remaining time as `m:ss`, or `None` on the home screen.
    pub fn formatted_remaining(&self) -> Option<String> {
        self.remaining_secs().map(format_time)
    }

    pub fn advice(&self) -> &AdviceState {
        &self.advice
    }

    /// Message of the most recent failed content fetch, kept for diagnostics.
    pub fn last_fetch_error(&self) -> Option<&str> {
        self.last_fetch_error.as_deref()
    }

    /// Whether a countdown ticker is alive.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn select_mode(&mut self, mode: Mode) -> Option<Event> {
        if self.phase != AppPhase::Home {
            tracing::debug!(phase = ?self.phase, %mode, "ignoring mode change outside home");
            return None;
        }
        self.config.mode = mode;
        Some(Event::ModeSelected { mode, at: Utc::now() })
    }

    pub fn select_duration(&mut self, minutes: u32) -> Option<Event> {
        if self.phase != AppPhase::Home {
            tracing::debug!(phase = ?self.phase, minutes, "ignoring duration change outside home");
            return None;
        }
        if minutes == 0 {
            tracing::warn!("ignoring zero-minute session duration");
            return None;
        }
        self.config.duration_minutes = minutes;
        Some(Event::DurationSelected {
            duration_minutes: minutes,
            at: Utc::now(),
        })
    }

    /// Begin a session from Home or Finished.
    ///
    /// Must be called from within a tokio runtime: it spawns the countdown
    /// ticker and the content fetch.
    pub fn start(&mut self) -> Option<Event> {
        match self.phase {
            AppPhase::Home | AppPhase::Finished => {
                self.session = self.session.next();
                let session = self.session;
                let countdown = Countdown::new(self.config.duration_secs());
                self.countdown = Some(countdown);
                self.phase = AppPhase::Session;
                self.advice = AdviceState::Loading;

                // Replacing the slot drops any previous ticker first.
                self.ticker = Some(Ticker::spawn(TICK_PERIOD, self.tx.clone(), move || {
                    Message::CountdownTick { session }
                }));
                self.spawn_fetch(session, self.config.mode);

                tracing::info!(
                    %session,
                    mode = %self.config.mode,
                    minutes = self.config.duration_minutes,
                    "session started"
                );
                Some(Event::SessionStarted {
                    session,
                    mode: self.config.mode,
                    duration_secs: countdown.total_secs(),
                    at: Utc::now(),
                })
            }
            AppPhase::Session => None, // Already running.
        }
    }

    /// Return to Home from Session or Finished.
    pub fn reset(&mut self) -> Option<Event> {
        match self.phase {
            AppPhase::Session | AppPhase::Finished => {
                self.ticker = None;
                self.phase = AppPhase::Home;
                self.countdown = None;
                self.advice = AdviceState::Unset;
                tracing::info!(session = %self.session, "session reset");
                Some(Event::SessionReset {
                    session: self.session,
                    at: Utc::now(),
                })
            }
            AppPhase::Home => None,
        }
    }

    /// Apply a message from a timer or background task.
    ///
    /// Messages tagged with any session other than the current one are
    /// dropped, which keeps late ticks and stale fetches harmless.
    pub fn handle(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::CountdownTick { session } => self.on_tick(session),
            Message::AdviceResolved { session, result } => self.on_advice(session, result),
            Message::CueStep { .. } => None,
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn on_tick(&mut self, session: SessionId) -> Option<Event> {
        if session != self.session || self.phase != AppPhase::Session {
            tracing::trace!(%session, current = %self.session, "dropping stale tick");
            return None;
        }
        let countdown = self.countdown.as_mut()?;
        match countdown.tick() {
            TickOutcome::Running(remaining_secs) => Some(Event::CountdownTicked {
                session,
                remaining_secs,
                at: Utc::now(),
            }),
            TickOutcome::Expired | TickOutcome::Idle => self.finish(),
        }
    }

    fn finish(&mut self) -> Option<Event> {
        self.ticker = None;
        self.phase = AppPhase::Finished;
        tracing::info!(session = %self.session, "session finished");
        Some(Event::SessionFinished {
            session: self.session,
            mode: self.config.mode,
            duration_minutes: self.config.duration_minutes,
            at: Utc::now(),
        })
    }

    fn on_advice(
        &mut self,
        session: SessionId,
        result: Result<AdviceContent, ContentError>,
    ) -> Option<Event> {
        if session != self.session || self.phase == AppPhase::Home || !self.advice.is_loading() {
            tracing::debug!(%session, current = %self.session, "ignoring stale guidance");
            return None;
        }
        match result {
            Ok(content) => {
                let title = content.title.clone();
                self.advice = AdviceState::Ready(content);
                Some(Event::AdviceLoaded {
                    session,
                    title,
                    at: Utc::now(),
                })
            }
            Err(err) => {
                tracing::warn!(%session, error = %err, "failed to load guidance");
                let reason = err.to_string();
                self.last_fetch_error = Some(reason.clone());
                self.advice = AdviceState::Failed;
                Some(Event::AdviceFailed {
                    session,
                    reason,
                    at: Utc::now(),
                })
            }
        }
    }

    fn spawn_fetch(&self, session: SessionId, mode: Mode) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = source.fetch(mode).await;
            // The loop may already be gone; nothing to report to then.
            let _ = tx.send(Message::AdviceResolved { session, result });
        });
    }
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("config", &self.config)
            .field("phase", &self.phase)
            .field("session", &self.session)
            .field("countdown", &self.countdown)
            .field("advice", &self.advice)
            .field("ticking", &self.ticker.is_some())
            .finish()
    }
}
