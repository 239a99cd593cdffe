//! TUI rendering: header, page body, and footer.

mod body;
mod footer;
mod header;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::app::App;

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let header_lines = header::header_lines(app, area.width as usize);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_lines.len() as u16 + 1),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(area);
    header::draw_header(f, header_lines, chunks[0]);
    body::draw_body(f, app, chunks[1]);
    footer::draw_footer(f, app, chunks[2]);
}
