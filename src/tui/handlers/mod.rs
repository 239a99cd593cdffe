//! Event handlers for the browser: keyboard and mouse.

mod links;

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::app::{App, Target};
use super::constants;
use super::shortcuts::Shortcut;

/// Result of handling an event: continue the loop or exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Toggle the selected topic/subtype, or open the selected link.
fn activate_selection(app: &mut App) {
    if let Some(url) = app.page_mut().activate() {
        links::open_link(app, &url);
    }
    app.follow_selection = true;
}

/// Handle a key event. Returns HandleResult::Break to exit the main loop.
pub fn handle_key(key: KeyEvent, app: &mut App) -> HandleResult {
    let Some(shortcut) = Shortcut::match_key(&key) else {
        return HandleResult::Continue;
    };
    match shortcut {
        Shortcut::Quit => return HandleResult::Break,
        Shortcut::Up => app.page_mut().move_selection(-1),
        Shortcut::Down => app.page_mut().move_selection(1),
        Shortcut::PageUp => app.page_mut().move_selection(-constants::SELECTION_PAGE),
        Shortcut::PageDown => app.page_mut().move_selection(constants::SELECTION_PAGE),
        Shortcut::First => app.page_mut().select_first(),
        Shortcut::Last => app.page_mut().select_last(),
        Shortcut::Activate => activate_selection(app),
        Shortcut::CopyLink => links::copy_selected_link(app),
        Shortcut::SwitchPage => app.switch_page(),
        Shortcut::ExpandAll => app.page_mut().expand_all(),
        Shortcut::CollapseAll => app.page_mut().collapse_all(),
    }
    app.follow_selection = true;
    HandleResult::Continue
}

/// Body line under the mouse, if the pointer is inside the body area.
fn body_line_at(app: &App, pos: Position) -> Option<usize> {
    let area = app.body_area?;
    if !area.contains(pos) {
        return None;
    }
    Some(app.page().scroll + (pos.y - area.y) as usize)
}

/// Handle a mouse event: wheel scrolls, left click selects and activates.
pub fn handle_mouse(mouse: MouseEvent, app: &mut App) -> HandleResult {
    let pos = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_by(-(constants::SCROLL_LINES_SMALL as isize)),
        MouseEventKind::ScrollDown => app.scroll_by(constants::SCROLL_LINES_SMALL as isize),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(target) = body_line_at(app, pos).and_then(|line| app.target_at_line(line))
            {
                select_and_activate(app, target);
            }
        }
        _ => {}
    }
    HandleResult::Continue
}

fn select_and_activate(app: &mut App, target: Target) {
    app.page_mut().selected = Some(target);
    activate_selection(app);
}
