//! Presentation state for the terminal UI.
//!
//! [`App`] turns key presses into controller intents and keeps the cue stage
//! in step with the controller. It holds no session state of its own.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use zenbreak_core::{AppPhase, CueStage, Event, Message, Mode, SessionController, VisualCue};

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    SelectMode(Mode),
    NextMode,
    PrevMode,
    LongerDuration,
    ShorterDuration,
    Start,
    Reset,
    Quit,
}

/// Map a key press to an intent for the given screen.
pub fn intent_for(phase: AppPhase, key: KeyEvent) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Intent::Quit);
    }
    if key.code == KeyCode::Char('q') {
        return Some(Intent::Quit);
    }
    match phase {
        AppPhase::Home => match key.code {
            KeyCode::Left => Some(Intent::PrevMode),
            KeyCode::Right | KeyCode::Tab => Some(Intent::NextMode),
            KeyCode::Char('1') => Some(Intent::SelectMode(Mode::Breathing)),
            KeyCode::Char('2') => Some(Intent::SelectMode(Mode::Eyes)),
            KeyCode::Char('3') => Some(Intent::SelectMode(Mode::Meditation)),
            KeyCode::Up => Some(Intent::LongerDuration),
            KeyCode::Down => Some(Intent::ShorterDuration),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::Start),
            _ => None,
        },
        AppPhase::Session => match key.code {
            KeyCode::Esc | KeyCode::Char('h') => Some(Intent::Reset),
            _ => None,
        },
        AppPhase::Finished => match key.code {
            KeyCode::Esc | KeyCode::Char('h') => Some(Intent::Reset),
            KeyCode::Enter | KeyCode::Char('r') => Some(Intent::Start),
            _ => None,
        },
    }
}

pub struct App {
    controller: SessionController,
    stage: CueStage,
    duration_choices: Vec<u32>,
    should_quit: bool,
}

impl App {
    pub fn new(controller: SessionController, stage: CueStage, duration_choices: Vec<u32>) -> Self {
        Self {
            controller,
            stage,
            duration_choices,
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    pub fn cue(&self) -> Option<&VisualCue> {
        self.stage.cue()
    }

    pub fn duration_choices(&self) -> &[u32] {
        &self.duration_choices
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle a key press. Returns true if the screen needs a redraw.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        match intent_for(self.controller.phase(), key) {
            Some(intent) => {
                self.apply(intent);
                true
            }
            None => false,
        }
    }

    pub fn apply(&mut self, intent: Intent) -> Option<Event> {
        let config = self.controller.config();
        let event = match intent {
            Intent::SelectMode(mode) => self.controller.select_mode(mode),
            Intent::NextMode => self.controller.select_mode(config.mode.next()),
            Intent::PrevMode => self.controller.select_mode(config.mode.prev()),
            Intent::LongerDuration => {
                let minutes = self.neighbour_duration(config.duration_minutes, 1);
                self.controller.select_duration(minutes)
            }
            Intent::ShorterDuration => {
                let minutes = self.neighbour_duration(config.duration_minutes, -1);
                self.controller.select_duration(minutes)
            }
            Intent::Start => self.controller.start(),
            Intent::Reset => self.controller.reset(),
            Intent::Quit => {
                self.should_quit = true;
                None
            }
        };
        self.stage.sync(&self.controller);
        if let Some(ref event) = event {
            tracing::debug!(?event, "intent applied");
        }
        event
    }

    /// Route a timer or fetch message. Returns true if the screen changed.
    pub fn on_message(&mut self, message: Message) -> bool {
        if matches!(message, Message::CueStep { .. }) {
            return self.stage.handle(&message);
        }
        let changed = self.controller.handle(message).is_some();
        self.stage.sync(&self.controller);
        changed
    }

    /// Duration choice `step` places away from `current`, clamped to the ends.
    /// A duration that is not one of the choices snaps to the first one.
    fn neighbour_duration(&self, current: u32, step: isize) -> u32 {
        let Some(pos) = self.duration_choices.iter().position(|&d| d == current) else {
            return self.duration_choices.first().copied().unwrap_or(current);
        };
        let last = self.duration_choices.len() as isize - 1;
        let next = (pos as isize + step).clamp(0, last) as usize;
        self.duration_choices[next]
    }
}
