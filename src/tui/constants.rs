//! TUI constants: colors, timing, and scroll amounts.

use ratatui::style::Color;

/// Accent green color (#98FB98).
pub(super) const ACCENT: Color = Color::Rgb(152, 251, 152);

/// Secondary accent: soft cyan (#7EC8E3), used for the selection marker.
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(126, 200, 227);

/// Link colour (#60A5FA).
pub(super) const LINK: Color = Color::Rgb(96, 165, 250);

/// Warning callout colour (#FCD34D).
pub(super) const WARNING: Color = Color::Rgb(252, 211, 77);

/// Muted text: borders, empty-state marker, hints.
pub(super) const MUTED: Color = Color::DarkGray;

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Scroll amount for the mouse wheel.
pub(crate) const SCROLL_LINES_SMALL: usize = 3;

/// Selection jump for PageUp/PageDown.
pub(crate) const SELECTION_PAGE: isize = 10;

/// Indent per nesting level in the body.
pub(crate) const INDENT: usize = 3;
