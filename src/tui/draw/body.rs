//! Page body: the expandable topic list, wrapped to the body width.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::core::format::{Example, Fragment};
use crate::core::view::{EMPTY_MARKER, PageView, TopicView, WARNING_LABEL};

use super::super::app::{App, PageState, Row, Target, visible_rows};
use super::super::constants::{ACCENT, ACCENT_SECONDARY, INDENT, LINK, MUTED, WARNING};
use super::super::text::{fragment_spans, wrap_spans};

/// Width of the selection gutter at the left edge.
const GUTTER: usize = 2;

/// Wrapped body lines plus the line range each selectable target occupies.
pub(super) struct BodyLines {
    pub lines: Vec<Line<'static>>,
    pub targets: Vec<(Target, usize, usize)>,
}

/// Left edge of a row: `marker` on its first line, `continuation` on wrapped lines.
struct Lead {
    indent: usize,
    marker: Span<'static>,
    continuation: Span<'static>,
}

impl BodyLines {
    fn push_row(
        &mut self,
        target: Option<Target>,
        selected: bool,
        lead: Lead,
        content: Vec<Span<'static>>,
        width: usize,
    ) {
        let Lead {
            indent,
            marker,
            continuation,
        } = lead;
        let prefix_width = GUTTER + indent + marker.width();
        let wrapped = wrap_spans(&content, width.saturating_sub(prefix_width).max(1));
        let start = self.lines.len();
        for (i, line) in wrapped.into_iter().enumerate() {
            let gutter = if selected && i == 0 {
                Span::styled("› ", Style::default().fg(ACCENT_SECONDARY))
            } else {
                Span::raw(" ".repeat(GUTTER))
            };
            let lead = if i == 0 {
                marker.clone()
            } else {
                continuation.clone()
            };
            let mut spans = vec![gutter, Span::raw(" ".repeat(indent)), lead];
            spans.extend(line.spans);
            let mut line = Line::from(spans);
            if selected {
                line = line.patch_style(Style::default().add_modifier(Modifier::BOLD));
            }
            self.lines.push(line);
        }
        if let Some(target) = target {
            self.targets.push((target, start, self.lines.len()));
        }
    }
}

fn example_at<'v, 'a>(
    topic: &'v TopicView<'a>,
    subtype: Option<usize>,
    example: usize,
) -> Option<&'v Example<'a>> {
    match subtype {
        Some(s) => topic.subtypes.get(s)?.examples.get(example),
        None => topic.examples.get(example),
    }
}

fn warning_at<'v, 'a>(
    topic: &'v TopicView<'a>,
    subtype: Option<usize>,
) -> Option<&'v [Fragment<'a>]> {
    match subtype {
        Some(s) => topic.subtypes.get(s)?.warning.as_deref(),
        None => topic.warning.as_deref(),
    }
}

/// Lay out every visible row of `state` for a body `width` columns wide.
pub(super) fn body_lines(view: &PageView<'_>, state: &PageState, width: usize) -> BodyLines {
    let mut out = BodyLines {
        lines: Vec::new(),
        targets: Vec::new(),
    };
    let blank = || Span::raw(" ".repeat(2));
    for row in visible_rows(view, &state.expansion) {
        let target = row.target();
        let selected = target.is_some() && target == state.selected;
        let indent = row.depth() * INDENT;
        match row {
            Row::Topic { topic, expanded } => {
                if topic > 0 {
                    out.lines.push(Line::default());
                }
                let Some(topic_view) = view.topics.get(topic) else {
                    continue;
                };
                let marker = if expanded { "▼ " } else { "▶ " };
                out.push_row(
                    target,
                    selected,
                    Lead {
                        indent,
                        marker: Span::styled(marker, Style::default().fg(ACCENT)),
                        continuation: blank(),
                    },
                    fragment_spans(
                        &topic_view.label,
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    width,
                );
            }
            Row::Subtype {
                topic,
                subtype,
                expandable,
                expanded,
            } => {
                let Some(subtype_view) =
                    view.topics.get(topic).and_then(|t| t.subtypes.get(subtype))
                else {
                    continue;
                };
                let marker = match (expandable, expanded) {
                    (true, true) => Span::styled("▾ ", Style::default().fg(ACCENT)),
                    (true, false) => Span::styled("▸ ", Style::default().fg(ACCENT)),
                    (false, _) => Span::styled("• ", Style::default().fg(MUTED)),
                };
                out.push_row(
                    target,
                    selected,
                    Lead {
                        indent,
                        marker,
                        continuation: blank(),
                    },
                    fragment_spans(&subtype_view.label, Style::default()),
                    width,
                );
            }
            Row::Warning { topic, subtype } => {
                let Some(warning) = view
                    .topics
                    .get(topic)
                    .and_then(|t| warning_at(t, subtype))
                else {
                    continue;
                };
                let border = Span::styled("┃ ", Style::default().fg(WARNING));
                let mut content = vec![Span::styled(
                    format!("{} ", WARNING_LABEL),
                    Style::default().fg(WARNING).add_modifier(Modifier::BOLD),
                )];
                content.extend(fragment_spans(warning, Style::default().fg(WARNING)));
                out.push_row(
                    None,
                    false,
                    Lead {
                        indent,
                        marker: border.clone(),
                        continuation: border,
                    },
                    content,
                    width,
                );
            }
            Row::Link {
                topic,
                subtype,
                example,
            } => {
                let Some(Example::Link(url)) = view
                    .topics
                    .get(topic)
                    .and_then(|t| example_at(t, subtype, example))
                else {
                    continue;
                };
                out.push_row(
                    target,
                    selected,
                    Lead {
                        indent,
                        marker: Span::styled("↗ ", Style::default().fg(LINK)),
                        continuation: blank(),
                    },
                    vec![Span::styled(
                        url.to_string(),
                        Style::default().fg(LINK).add_modifier(Modifier::UNDERLINED),
                    )],
                    width,
                );
            }
            Row::TextExample {
                topic,
                subtype,
                example,
            } => {
                let Some(Example::Text(fragments)) = view
                    .topics
                    .get(topic)
                    .and_then(|t| example_at(t, subtype, example))
                else {
                    continue;
                };
                let border = Span::styled("│ ", Style::default().fg(MUTED));
                out.push_row(
                    None,
                    false,
                    Lead {
                        indent,
                        marker: border.clone(),
                        continuation: border,
                    },
                    fragment_spans(fragments, Style::default()),
                    width,
                );
            }
            Row::Empty { .. } => {
                out.push_row(
                    None,
                    false,
                    Lead {
                        indent,
                        marker: blank(),
                        continuation: blank(),
                    },
                    vec![Span::styled(
                        EMPTY_MARKER,
                        Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
                    )],
                    width,
                );
            }
        }
    }
    out
}

/// First scroll offset that keeps lines `start..end` inside a viewport of `height`.
fn scroll_to_range(scroll: usize, start: usize, end: usize, height: usize) -> usize {
    if start < scroll {
        start
    } else if end > scroll + height {
        end.saturating_sub(height).min(start)
    } else {
        scroll
    }
}

pub(super) fn draw_body(f: &mut Frame, app: &mut App, area: Rect) {
    // Leave the last column for the scrollbar.
    let text_width = area.width.saturating_sub(1) as usize;
    let height = area.height as usize;
    let body = {
        let state = app.page();
        let view = PageView::new(&state.database);
        body_lines(&view, state, text_width)
    };

    app.body_area = Some(area);
    app.total_lines = body.lines.len();
    let max_scroll = body.lines.len().saturating_sub(height);
    let follow = std::mem::take(&mut app.follow_selection);
    let selected_range = app.page().selected.and_then(|sel| {
        body.targets
            .iter()
            .find(|(t, _, _)| *t == sel)
            .map(|(_, start, end)| (*start, *end))
    });
    let state = app.page_mut();
    if follow && let Some((start, end)) = selected_range {
        state.scroll = scroll_to_range(state.scroll, start, end, height);
    }
    state.scroll = state.scroll.min(max_scroll);
    let scroll = state.scroll;
    app.target_lines = body.targets;

    if body.lines.is_empty() {
        let empty = Line::from(Span::styled(
            "  No topics",
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        ));
        f.render_widget(Paragraph::new(empty), area);
        return;
    }

    let end = (scroll + height).min(body.lines.len());
    let visible: Vec<Line> = body.lines[scroll..end].to_vec();
    f.render_widget(Paragraph::new(visible), area);

    if body.lines.len() > height {
        let mut scrollbar_state = ScrollbarState::new(max_scroll).position(scroll);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .track_style(Style::default().fg(MUTED)),
            area,
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::database::Database;
    use crate::core::page::Page;

    const JSON: &str = r#"{
        "1": {"type": "*first* topic", "warning": "careful",
              "examples": ["https://a.com/x", "plain text"],
              "subtypes": [{"type": "sub", "examples": ["https://b.com"]}, {"type": "bare"}]},
        "2": {"type": "second"}
    }"#;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn lays_out_default_expansion() {
        let db = Database::from_json(JSON).expect("valid");
        let state = PageState::new(Page::Titles, db);
        let view = PageView::new(&state.database);
        let body = body_lines(&view, &state, 80);
        let texts: Vec<String> = body.lines.iter().map(text).collect();
        assert_eq!(texts[0], "› ▼ first topic");
        assert!(texts[1].contains("┃ Warning: careful"));
        assert!(texts[2].contains("↗ https://a.com/x"));
        assert!(texts[3].contains("│ plain text"));
        assert!(texts[4].contains("▸ sub"));
        assert!(texts[5].contains("• bare"));
        assert_eq!(texts[6], "");
        assert!(texts[7].contains("▶ second"));
        assert_eq!(
            body.targets,
            vec![
                (Target::Topic(0), 0, 1),
                (
                    Target::Link {
                        topic: 0,
                        subtype: None,
                        example: 0
                    },
                    2,
                    3
                ),
                (Target::Subtype(0, 0), 4, 5),
                (Target::Topic(1), 7, 8),
            ]
        );
    }

    #[test]
    fn empty_marker_for_topic_without_content() {
        let db = Database::from_json(r#"{"1": {"type": "alone"}}"#).expect("valid");
        let state = PageState::new(Page::Titles, db);
        let view = PageView::new(&state.database);
        let body = body_lines(&view, &state, 80);
        assert!(text(&body.lines[1]).contains(EMPTY_MARKER));
    }

    #[test]
    fn wrapped_rows_span_several_lines() {
        let db = Database::from_json(
            r#"{"1": {"type": "one two three four five six seven eight nine ten"}}"#,
        )
        .expect("valid");
        let state = PageState::new(Page::Titles, db);
        let view = PageView::new(&state.database);
        let body = body_lines(&view, &state, 20);
        let (_, start, end) = body.targets[0];
        assert_eq!(start, 0);
        assert!(end > 1);
    }

    #[test]
    fn scroll_follows_range() {
        assert_eq!(scroll_to_range(0, 2, 3, 10), 0);
        assert_eq!(scroll_to_range(5, 2, 3, 10), 2);
        assert_eq!(scroll_to_range(0, 12, 14, 10), 4);
        // Taller than the viewport: show its first line.
        assert_eq!(scroll_to_range(0, 12, 30, 10), 12);
    }
}
