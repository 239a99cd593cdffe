//! Centralized keyboard shortcuts.
//!
//! Complete reference:
//!
//! | Action            | Keys                        |
//! |-------------------|-----------------------------|
//! | Move selection    | ↑ ↓ k j                     |
//! | Jump              | PageUp PageDown Home End    |
//! | Toggle / open link| Enter Space                 |
//! | Copy link         | y                           |
//! | Switch page       | Tab                         |
//! | Expand all        | e                           |
//! | Collapse all      | c                           |
//! | Quit              | q Esc Ctrl+C                |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Detected shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Up,
    Down,
    PageUp,
    PageDown,
    First,
    Last,
    /// Toggle the selected topic/subtype or open the selected link.
    Activate,
    CopyLink,
    SwitchPage,
    ExpandAll,
    CollapseAll,
    Quit,
}

impl Shortcut {
    /// Returns the shortcut if the key matches. Only key presses count.
    pub fn match_key(key: &KeyEvent) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Shortcut::Quit),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Shortcut::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Shortcut::Down),
            KeyCode::PageUp => Some(Shortcut::PageUp),
            KeyCode::PageDown => Some(Shortcut::PageDown),
            KeyCode::Home | KeyCode::Char('g') => Some(Shortcut::First),
            KeyCode::End | KeyCode::Char('G') => Some(Shortcut::Last),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Shortcut::Activate),
            KeyCode::Char('y') => Some(Shortcut::CopyLink),
            KeyCode::Tab | KeyCode::BackTab => Some(Shortcut::SwitchPage),
            KeyCode::Char('e') => Some(Shortcut::ExpandAll),
            KeyCode::Char('c') => Some(Shortcut::CollapseAll),
            KeyCode::Char('q') | KeyCode::Esc => Some(Shortcut::Quit),
            _ => None,
        }
    }
}
