use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle},
        Paragraph,
    },
};
use tokio::time::Instant;
use zenbreak_core::cue::{BreathingCue, EyeCue, EyeStep, MeditationCue};
use zenbreak_core::VisualCue;

use super::theme::{
    COLOR_BLOB_PINK, COLOR_BLOB_PURPLE, COLOR_BLOB_YELLOW, COLOR_SAGE, COLOR_SAGE_DARK,
    COLOR_SAGE_LIGHT,
};

/// Canvas coordinates run from -BOUND to BOUND on both axes.
const BOUND: f64 = 10.0;

pub fn render(frame: &mut Frame, area: Rect, cue: &VisualCue, now: Instant) {
    match cue {
        VisualCue::Breathing(cue) => render_breathing(frame, area, cue, now),
        VisualCue::Eyes(cue) => render_eyes(frame, area, cue),
        VisualCue::Meditation(cue) => render_meditation(frame, area, cue, now),
    }
}

fn render_breathing(frame: &mut Frame, area: Rect, cue: &BreathingCue, now: Instant) {
    let scale = cue.scale(now);
    let label = cue.label();
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-BOUND * 2.0, BOUND * 2.0])
        .y_bounds([-BOUND, BOUND])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: BOUND * 0.95 * scale,
                color: COLOR_SAGE_LIGHT,
            });
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: BOUND * 0.8 * scale,
                color: COLOR_SAGE,
            });
            ctx.print(
                -(label.len() as f64) / 2.0,
                0.0,
                Span::styled(label, Style::default().fg(COLOR_SAGE_DARK).bold()),
            );
        });
    frame.render_widget(canvas, area);
}

fn render_eyes(frame: &mut Frame, area: Rect, cue: &EyeCue) {
    let step = cue.current();
    let glyph_style = if step == EyeStep::CloseEyes {
        Style::default().fg(COLOR_SAGE_DARK).add_modifier(Modifier::SLOW_BLINK)
    } else {
        Style::default().fg(COLOR_SAGE_DARK).add_modifier(Modifier::BOLD)
    };
    let [_, body, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);
    let text = vec![
        Line::from(Span::styled(step.glyph(), glyph_style)),
        Line::default(),
        Line::from(Span::styled(step.label(), Style::default().fg(COLOR_SAGE))),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), body);
}

fn render_meditation(frame: &mut Frame, area: Rect, cue: &MeditationCue, now: Instant) {
    let blobs = cue.blobs(now);
    let label = cue.label();
    // Resting places of the three blobs: centre-left, top-right, bottom-left.
    let anchors = [(-3.0, 0.0), (4.0, 3.0), (-1.0, -3.5)];
    let colors = [COLOR_BLOB_PURPLE, COLOR_BLOB_YELLOW, COLOR_BLOB_PINK];
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-BOUND * 2.0, BOUND * 2.0])
        .y_bounds([-BOUND, BOUND])
        .paint(move |ctx| {
            for ((blob, (ax, ay)), color) in blobs.iter().zip(anchors).zip(colors) {
                ctx.draw(&Circle {
                    x: ax + blob.dx * 3.0,
                    y: ay + blob.dy * 3.0,
                    radius: 5.0 * blob.scale,
                    color,
                });
            }
            ctx.print(
                -(label.len() as f64) / 2.0,
                0.0,
                Span::styled(label, Style::default().fg(COLOR_SAGE_DARK).italic()),
            );
        });
    frame.render_widget(canvas, area);
}
