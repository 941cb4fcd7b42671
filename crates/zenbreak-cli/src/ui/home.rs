use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};
use zenbreak_core::Mode;

use super::theme::{COLOR_MUTED, COLOR_SAGE, COLOR_SAGE_DARK, COLOR_SAGE_LIGHT, COLOR_SAND};
use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let config = app.controller().config();
    let inner = area.inner(Margin::new(2, 1));

    let [header, modes_title, modes, durations_title, durations, start, _, footer] =
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(6),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "ZenBreak",
            Style::default().fg(COLOR_SAGE_DARK).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Give your brain a break and get your focus back.",
            Style::default().fg(COLOR_SAGE),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, header);

    frame.render_widget(section_title("CHOOSE HOW TO RELAX"), modes_title);
    let cards = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(modes);
    for (mode, card) in Mode::ALL.into_iter().zip(cards.iter()) {
        render_mode_card(frame, *card, mode, mode == config.mode);
    }

    frame.render_widget(section_title("SESSION LENGTH"), durations_title);
    let mut spans = Vec::new();
    for &minutes in app.duration_choices() {
        let style = if minutes == config.duration_minutes {
            Style::default()
                .fg(Color::White)
                .bg(COLOR_SAGE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_SAGE_DARK).bg(COLOR_SAND)
        };
        spans.push(Span::styled(format!(" {minutes} min "), style));
        spans.push(Span::raw("  "));
    }
    spans.pop();
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        durations,
    );

    let start_button = Paragraph::new(Line::from(Span::styled(
        "  ▶  Start relaxing  ",
        Style::default()
            .fg(Color::White)
            .bg(COLOR_SAGE_DARK)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().padding(Padding::top(1)));
    frame.render_widget(start_button, start);

    frame.render_widget(
        Paragraph::new("←/→ mode · ↑/↓ length · Enter start · q quit")
            .style(Style::default().fg(COLOR_MUTED))
            .alignment(Alignment::Center),
        footer,
    );
}

fn section_title(text: &str) -> Paragraph<'_> {
    Paragraph::new(Span::styled(
        text,
        Style::default().fg(COLOR_SAGE).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
}

fn render_mode_card(frame: &mut Frame, area: Rect, mode: Mode, selected: bool) {
    let (border, border_style) = if selected {
        (BorderType::Thick, Style::default().fg(COLOR_SAGE_DARK))
    } else {
        (BorderType::Rounded, Style::default().fg(COLOR_SAGE_LIGHT))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border)
        .border_style(border_style);

    let icon = match mode {
        Mode::Breathing => "≋",
        Mode::Eyes => "◉",
        Mode::Meditation => "✺",
    };
    let content = vec![
        Line::from(vec![
            Span::styled(format!("{icon} "), Style::default().fg(COLOR_SAGE)),
            Span::styled(
                mode.label(),
                Style::default().fg(COLOR_SAGE_DARK).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            mode.description(),
            Style::default().fg(COLOR_SAGE),
        )),
    ];
    frame.render_widget(
        Paragraph::new(content)
            .block(block)
            .wrap(Wrap { trim: true }),
        area.inner(Margin::new(1, 0)),
    );
}
