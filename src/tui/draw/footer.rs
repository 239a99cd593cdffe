//! Footer: status message or key hints.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::super::app::App;
use super::super::constants::{ACCENT, MUTED};

const HINTS: &[(&str, &str)] = &[
    ("↑↓", "move"),
    ("⏎", "toggle/open"),
    ("y", "copy link"),
    ("⇥", "switch page"),
    ("e/c", "expand/collapse all"),
    ("q", "quit"),
];

pub(super) fn draw_footer(f: &mut Frame, app: &mut App, area: Rect) {
    if app.status.as_ref().is_some_and(|s| s.until <= Instant::now()) {
        app.status = None;
    }
    let line = match &app.status {
        Some(status) => {
            let color = if status.is_error { Color::Red } else { ACCENT };
            Line::from(Span::styled(
                format!(" {}", status.text),
                Style::default().fg(color),
            ))
        }
        None => {
            let mut spans = vec![Span::raw(" ")];
            for (key, label) in HINTS {
                spans.push(Span::styled(key.to_string(), Style::default().fg(ACCENT)));
                spans.push(Span::styled(
                    format!(" {}  ", label),
                    Style::default().fg(MUTED),
                ));
            }
            Line::from(spans)
        }
    };
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(MUTED));
    f.render_widget(Paragraph::new(line).block(block), area);
}
