//! Fragment styling: emphasis in italics, links underlined in the link colour.

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::core::format::Fragment;
use crate::tui::constants::LINK;

/// Style each fragment on top of `base`.
pub(crate) fn fragment_spans(fragments: &[Fragment<'_>], base: Style) -> Vec<Span<'static>> {
    fragments
        .iter()
        .map(|fragment| {
            let style = match fragment {
                Fragment::Plain(_) => base,
                Fragment::Emphasized(_) => base.add_modifier(Modifier::ITALIC),
                Fragment::Link(_) => base.fg(LINK).add_modifier(Modifier::UNDERLINED),
            };
            Span::styled(fragment.text().to_string(), style)
        })
        .collect()
}
