//! Visible rows of a page: what the browser shows for a given expansion state.

use crate::core::expansion::ExpansionState;
use crate::core::format::Example;
use crate::core::view::{PageView, SubtypeView};

/// Something the selection cursor can rest on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Topic(usize),
    Subtype(usize, usize),
    /// A pure-URL example.
    Link {
        topic: usize,
        subtype: Option<usize>,
        example: usize,
    },
}

impl Target {
    /// Topic this target belongs to.
    pub fn topic(self) -> usize {
        match self {
            Target::Topic(t) | Target::Subtype(t, _) | Target::Link { topic: t, .. } => t,
        }
    }
}

/// One logical row (before wrapping).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Topic {
        topic: usize,
        expanded: bool,
    },
    Warning {
        topic: usize,
        subtype: Option<usize>,
    },
    Link {
        topic: usize,
        subtype: Option<usize>,
        example: usize,
    },
    TextExample {
        topic: usize,
        subtype: Option<usize>,
        example: usize,
    },
    /// "No subtypes" placeholder.
    Empty {
        topic: usize,
    },
    Subtype {
        topic: usize,
        subtype: usize,
        expandable: bool,
        expanded: bool,
    },
}

impl Row {
    /// Selection target for interactive rows.
    pub fn target(&self) -> Option<Target> {
        match *self {
            Row::Topic { topic, .. } => Some(Target::Topic(topic)),
            Row::Subtype {
                topic,
                subtype,
                expandable: true,
                ..
            } => Some(Target::Subtype(topic, subtype)),
            Row::Link {
                topic,
                subtype,
                example,
            } => Some(Target::Link {
                topic,
                subtype,
                example,
            }),
            _ => None,
        }
    }

    /// Nesting level: 0 for topics, 1 inside a topic, 2 inside a subtype.
    pub fn depth(&self) -> usize {
        match *self {
            Row::Topic { .. } => 0,
            Row::Subtype { .. } | Row::Empty { .. } => 1,
            Row::Warning { subtype, .. }
            | Row::Link { subtype, .. }
            | Row::TextExample { subtype, .. } => {
                if subtype.is_some() {
                    2
                } else {
                    1
                }
            }
        }
    }
}

fn push_body(
    rows: &mut Vec<Row>,
    topic: usize,
    subtype: Option<usize>,
    has_warning: bool,
    examples: &[Example<'_>],
) {
    if has_warning {
        rows.push(Row::Warning { topic, subtype });
    }
    for (example, value) in examples.iter().enumerate() {
        rows.push(match value {
            Example::Link(_) => Row::Link {
                topic,
                subtype,
                example,
            },
            Example::Text(_) => Row::TextExample {
                topic,
                subtype,
                example,
            },
        });
    }
}

fn push_subtype(
    rows: &mut Vec<Row>,
    topic: usize,
    index: usize,
    subtype: &SubtypeView<'_>,
    expansion: &ExpansionState,
) {
    let expandable = subtype.has_content();
    let expanded = expandable && expansion.is_subtype_expanded(topic, index);
    rows.push(Row::Subtype {
        topic,
        subtype: index,
        expandable,
        expanded,
    });
    if expanded {
        push_body(
            rows,
            topic,
            Some(index),
            subtype.warning.is_some(),
            &subtype.examples,
        );
    }
}

/// Rows shown for `view` under `expansion`, top to bottom.
pub fn visible_rows(view: &PageView<'_>, expansion: &ExpansionState) -> Vec<Row> {
    let mut rows = Vec::new();
    for (t_idx, topic) in view.topics.iter().enumerate() {
        let expanded = expansion.is_topic_expanded(t_idx);
        rows.push(Row::Topic {
            topic: t_idx,
            expanded,
        });
        if !expanded {
            continue;
        }
        push_body(&mut rows, t_idx, None, topic.warning.is_some(), &topic.examples);
        if topic.subtypes.is_empty() {
            if topic.shows_empty_marker() {
                rows.push(Row::Empty { topic: t_idx });
            }
        } else {
            for (s_idx, subtype) in topic.subtypes.iter().enumerate() {
                push_subtype(&mut rows, t_idx, s_idx, subtype, expansion);
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::database::Database;

    const JSON: &str = r#"{
        "1": {"type": "first", "warning": "w", "examples": ["https://a.com/x", "text"],
              "subtypes": [{"type": "s0", "examples": ["https://b.com"]}, {"type": "s1"}]},
        "2": {"type": "second", "examples": []}
    }"#;

    fn rows_for(expansion: &ExpansionState) -> Vec<Row> {
        let db = Database::from_json(JSON).expect("valid");
        let view = PageView::new(&db);
        visible_rows(&view, expansion)
    }

    #[test]
    fn default_state_shows_first_topic_body() {
        let rows = rows_for(&ExpansionState::for_topic_count(2));
        assert_eq!(
            rows,
            [
                Row::Topic {
                    topic: 0,
                    expanded: true
                },
                Row::Warning {
                    topic: 0,
                    subtype: None
                },
                Row::Link {
                    topic: 0,
                    subtype: None,
                    example: 0
                },
                Row::TextExample {
                    topic: 0,
                    subtype: None,
                    example: 1
                },
                Row::Subtype {
                    topic: 0,
                    subtype: 0,
                    expandable: true,
                    expanded: false
                },
                Row::Subtype {
                    topic: 0,
                    subtype: 1,
                    expandable: false,
                    expanded: false
                },
                Row::Topic {
                    topic: 1,
                    expanded: false
                },
            ]
        );
    }

    #[test]
    fn empty_topic_shows_marker_row() {
        let mut expansion = ExpansionState::default();
        expansion.toggle_topic(1);
        let rows = rows_for(&expansion);
        assert_eq!(rows.last(), Some(&Row::Empty { topic: 1 }));
    }

    #[test]
    fn expanded_subtype_shows_examples() {
        let mut expansion = ExpansionState::for_topic_count(2);
        expansion.toggle_subtype(0, 0);
        let rows = rows_for(&expansion);
        assert!(rows.contains(&Row::Link {
            topic: 0,
            subtype: Some(0),
            example: 0
        }));
    }

    #[test]
    fn contentless_subtype_never_expands() {
        let mut expansion = ExpansionState::for_topic_count(2);
        expansion.toggle_subtype(0, 1);
        let rows = rows_for(&expansion);
        assert!(rows.contains(&Row::Subtype {
            topic: 0,
            subtype: 1,
            expandable: false,
            expanded: false
        }));
    }

    #[test]
    fn only_interactive_rows_are_targets() {
        let rows = rows_for(&ExpansionState::for_topic_count(2));
        let targets: Vec<Target> = rows.iter().filter_map(Row::target).collect();
        assert_eq!(
            targets,
            [
                Target::Topic(0),
                Target::Link {
                    topic: 0,
                    subtype: None,
                    example: 0
                },
                Target::Subtype(0, 0),
                Target::Topic(1),
            ]
        );
    }

    #[test]
    fn depth_by_nesting() {
        assert_eq!(Row::Topic { topic: 0, expanded: false }.depth(), 0);
        assert_eq!(Row::Empty { topic: 0 }.depth(), 1);
        assert_eq!(
            Row::Warning {
                topic: 0,
                subtype: Some(1)
            }
            .depth(),
            2
        );
    }
}
