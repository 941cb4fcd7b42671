use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tokio::time::Instant;
use zenbreak_core::AdviceState;

use super::theme::{COLOR_MUTED, COLOR_SAGE, COLOR_SAGE_DARK, COLOR_SAGE_LIGHT};
use crate::app::App;

/// Shown when no guidance is available.
pub const FALLBACK_TEXT: &str = "Focus on the center...";
pub const LOADING_TEXT: &str = "Preparing your guidance...";

pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let controller = app.controller();
    let inner = area.inner(Margin::new(2, 1));
    let [top, visual, advice] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(8),
        Constraint::Length(10),
    ])
    .areas(inner);

    let [home_hint, clock] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)]).areas(top);
    frame.render_widget(
        Paragraph::new("⌂ Esc home").style(Style::default().fg(COLOR_MUTED)),
        home_hint,
    );
    let remaining = controller.formatted_remaining().unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("◷ {remaining}"),
            Style::default().fg(COLOR_SAGE_DARK).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right),
        clock,
    );

    if let Some(cue) = app.cue() {
        super::cue::render(frame, visual, cue, now);
    }

    let panel = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_SAGE_LIGHT));
    frame.render_widget(
        Paragraph::new(advice_lines(controller.advice()))
            .block(panel)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        advice,
    );
}

/// Text of the guidance panel.
pub fn advice_lines(advice: &AdviceState) -> Vec<Line<'_>> {
    match advice {
        AdviceState::Loading => vec![
            Line::default(),
            Line::from(Span::styled("░░░░░░░░░░░░", Style::default().fg(COLOR_SAGE_LIGHT))),
            Line::from(Span::styled(LOADING_TEXT, Style::default().fg(COLOR_MUTED))),
        ],
        AdviceState::Ready(content) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    content.title.as_str(),
                    Style::default().fg(COLOR_SAGE_DARK).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    content.content.as_str(),
                    Style::default().fg(COLOR_SAGE),
                )),
            ];
            if !content.steps.is_empty() {
                lines.push(Line::default());
                for (idx, step) in content.steps.iter().enumerate() {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("({}) ", idx + 1),
                            Style::default().fg(COLOR_SAGE_LIGHT),
                        ),
                        Span::styled(step.as_str(), Style::default().fg(COLOR_SAGE)),
                    ]));
                }
            }
            lines
        }
        AdviceState::Unset | AdviceState::Failed => vec![
            Line::default(),
            Line::from(Span::styled(FALLBACK_TEXT, Style::default().fg(COLOR_MUTED))),
        ],
    }
}
