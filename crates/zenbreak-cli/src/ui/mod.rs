//! Screens of the terminal UI.
//!
//! Rendering is a pure function of the app state and the current instant;
//! nothing here mutates anything.

mod cue;
mod finished;
mod home;
mod session;
mod theme;

use ratatui::Frame;
use tokio::time::Instant;
use zenbreak_core::AppPhase;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    match app.controller().phase() {
        AppPhase::Home => home::render(frame, area, app),
        AppPhase::Session => session::render(frame, area, app, now),
        AppPhase::Finished => finished::render(frame, area, app),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;
    use tokio::time::Instant;

    use crate::app::App;

    /// Draw the app on an in-memory terminal and return its text, row by row.
    pub fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| super::render(frame, app, Instant::now()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    pub fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
