//! Header: page title, page tabs, topic count, disclaimer.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::page::Page;

use super::super::app::App;
use super::super::constants::{ACCENT, MUTED, WARNING};
use super::super::text::wrap_message;

/// Logo shown before the page title.
const LOGO: &str = "◆";

/// Header content for the current page, wrapped to `width`.
pub(super) fn header_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let state = app.page();
    let page = state.page;
    let mut lines = Vec::new();

    let mut title = vec![
        Span::styled(format!(" {} ", LOGO), Style::default().fg(ACCENT)),
        Span::styled(
            page.title().to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];
    for (i, p) in Page::ALL.into_iter().enumerate() {
        if i > 0 {
            title.push(Span::styled(" · ", Style::default().fg(MUTED)));
        }
        let style = if p == page {
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(MUTED)
        };
        title.push(Span::styled(p.slug().to_string(), style));
    }
    lines.push(Line::from(title));

    let stats = state.database.stats();
    let mut summary = format!(
        " {} · {} topics, {} subtypes, {} examples",
        page.description(),
        stats.topics,
        stats.subtypes,
        stats.examples
    );
    // The command-line data file only ever backs the starting page.
    if app.current == 0
        && let Some(path) = &app.data_file
    {
        summary.push_str(&format!(" · {}", path.display()));
    }
    lines.push(Line::from(Span::styled(summary, Style::default().fg(MUTED))));

    if let Some(disclaimer) = page.disclaimer() {
        for chunk in wrap_message(disclaimer, width.saturating_sub(2).max(1)) {
            lines.push(Line::from(Span::styled(
                format!(" {}", chunk),
                Style::default().fg(WARNING),
            )));
        }
    }
    lines
}

pub(super) fn draw_header(f: &mut Frame, lines: Vec<Line<'static>>, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(MUTED));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
