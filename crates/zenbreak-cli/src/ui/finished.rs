use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use zenbreak_core::{Mode, SessionConfig};

use super::theme::{COLOR_MUTED, COLOR_SAGE, COLOR_SAGE_DARK, COLOR_SAGE_LIGHT};
use crate::app::App;

pub const QUOTE: &str = "\"Rest is part of the journey.\"";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let config = app.controller().config();
    let [_, card, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, card, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(56),
        Constraint::Fill(1),
    ])
    .areas(card);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_SAGE_LIGHT));

    let text = vec![
        Line::from(Span::styled("≋", Style::default().fg(COLOR_SAGE))),
        Line::from(Span::styled(
            "Well done!",
            Style::default().fg(COLOR_SAGE_DARK).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(summary(config), Style::default().fg(COLOR_SAGE))),
        Line::default(),
        Line::from(Span::styled(
            QUOTE,
            Style::default().fg(COLOR_MUTED).add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(
                " ⌂ h  Back home ",
                Style::default().fg(Color::White).bg(COLOR_SAGE_DARK),
            ),
            Span::raw("   "),
            Span::styled(
                " ↻ r  Once more ",
                Style::default().fg(COLOR_SAGE_DARK).bg(COLOR_SAGE_LIGHT),
            ),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        card,
    );
}

/// "You just completed N minutes of <activity>."
pub fn summary(config: SessionConfig) -> String {
    let activity = match config.mode {
        Mode::Breathing => "deep breathing",
        Mode::Eyes => "eye relaxation",
        Mode::Meditation => "meditation",
    };
    let unit = if config.duration_minutes == 1 {
        "minute"
    } else {
        "minutes"
    };
    format!(
        "You just completed {} {unit} of {activity}.",
        config.duration_minutes
    )
}
