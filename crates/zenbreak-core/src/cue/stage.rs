//! Mounting and unmounting of the visual cue.
//!
//! The stage follows the controller: while a session is running exactly one
//! cue is mounted, picked from the session's mode when the session starts.
//! Leaving the session screen drops the cue together with its ticker.

use tokio::time::Instant;

use super::VisualCue;
use crate::message::{Message, MessageSender, SessionId};
use crate::session::{AppPhase, SessionController};
use crate::timer::Ticker;

#[derive(Debug)]
struct MountedCue {
    session: SessionId,
    cue: VisualCue,
    ticker: Option<Ticker>,
}

#[derive(Debug)]
pub struct CueStage {
    tx: MessageSender,
    mounted: Option<MountedCue>,
}

impl CueStage {
    pub fn new(tx: MessageSender) -> Self {
        Self { tx, mounted: None }
    }

    pub fn cue(&self) -> Option<&VisualCue> {
        self.mounted.as_ref().map(|m| &m.cue)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Whether the mounted cue has a live ticker.
    pub fn is_ticking(&self) -> bool {
        self.mounted.as_ref().is_some_and(|m| m.ticker.is_some())
    }

    /// Bring the stage in line with the controller.
    ///
    /// Call after every controller command or handled message. Mounting
    /// spawns a ticker, so this must run inside a tokio runtime.
    pub fn sync(&mut self, controller: &SessionController) {
        if controller.phase() != AppPhase::Session {
            if let Some(m) = self.mounted.take() {
                tracing::debug!(session = %m.session, mode = %m.cue.mode(), "cue unmounted");
            }
            return;
        }

        let session = controller.session_id();
        if self.mounted.as_ref().is_some_and(|m| m.session == session) {
            return;
        }

        // Drop the old cue (and its ticker) before the new one starts.
        self.mounted = None;
        let cue = VisualCue::for_mode(controller.config().mode, Instant::now());
        let ticker = cue.cadence().map(|period| {
            Ticker::spawn(period, self.tx.clone(), move || Message::CueStep { session })
        });
        tracing::debug!(%session, mode = %cue.mode(), "cue mounted");
        self.mounted = Some(MountedCue {
            session,
            cue,
            ticker,
        });
    }

    /// Apply a cue step. Returns true if the mounted cue changed.
    pub fn handle(&mut self, message: &Message) -> bool {
        let Message::CueStep { session } = message else {
            return false;
        };
        match self.mounted.as_mut() {
            Some(m) if m.session == *session => {
                m.cue.step(Instant::now());
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::StaticAdvice;
    use crate::cue::{BreathPhase, EyeStep};
    use crate::message;
    use crate::session::Mode;
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn mounts_cue_for_selected_mode_only_in_session() {
        let (tx, _rx) = message::channel();
        let mut ctrl = SessionController::new(Arc::new(StaticAdvice::default()), tx.clone());
        let mut stage = CueStage::new(tx);

        stage.sync(&ctrl);
        assert!(!stage.is_mounted());

        ctrl.select_mode(Mode::Eyes);
        ctrl.start();
        stage.sync(&ctrl);
        assert_eq!(stage.cue().map(VisualCue::mode), Some(Mode::Eyes));
        assert!(stage.is_ticking());

        ctrl.reset();
        stage.sync(&ctrl);
        assert!(!stage.is_mounted());
    }

    #[tokio::test(start_paused = true)]
    async fn meditation_has_no_ticker() {
        let (tx, _rx) = message::channel();
        let mut ctrl = SessionController::new(Arc::new(StaticAdvice::default()), tx.clone());
        let mut stage = CueStage::new(tx);
        ctrl.select_mode(Mode::Meditation);
        ctrl.start();
        stage.sync(&ctrl);
        assert!(stage.is_mounted());
        assert!(!stage.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn steps_only_for_current_session() {
        let (tx, _rx) = message::channel();
        let mut ctrl = SessionController::new(Arc::new(StaticAdvice::default()), tx.clone());
        let mut stage = CueStage::new(tx);
        ctrl.start();
        stage.sync(&ctrl);
        let session = ctrl.session_id();

        assert!(!stage.handle(&Message::CueStep {
            session: SessionId(session.0 + 10)
        }));
        assert!(stage.handle(&Message::CueStep { session }));
        match stage.cue() {
            Some(VisualCue::Breathing(cue)) => assert_eq!(cue.phase(), BreathPhase::Hold),
            other => panic!("unexpected cue {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn restart_remounts_a_fresh_cue() {
        let (tx, _rx) = message::channel();
        let mut ctrl = SessionController::new(Arc::new(StaticAdvice::default()), tx.clone());
        let mut stage = CueStage::new(tx);
        ctrl.select_mode(Mode::Eyes);
        ctrl.start();
        stage.sync(&ctrl);
        stage.handle(&Message::CueStep {
            session: ctrl.session_id(),
        });

        ctrl.reset();
        stage.sync(&ctrl);
        ctrl.start();
        stage.sync(&ctrl);
        match stage.cue() {
            Some(VisualCue::Eyes(cue)) => assert_eq!(cue.current(), EyeStep::LookUp),
            other => panic!("unexpected cue {other:?}"),
        }
    }
}
