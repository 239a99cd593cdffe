//! Render model: a database turned into pre-formatted topic and subtype views.
//!
//! Both the HTML exporter and the terminal browser draw from a [`PageView`], so the
//! formatting rules (emphasis on labels only, linking in warnings and examples) live here once.

use crate::core::database::{Database, Subtype, Topic};
use crate::core::format::{self, Example, Fragment};

/// Shown inside an expanded topic that has neither examples nor subtypes.
pub const EMPTY_MARKER: &str = "No subtypes";

/// Label shown before warning text.
pub const WARNING_LABEL: &str = "Warning:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtypeView<'a> {
    pub label: Vec<Fragment<'a>>,
    pub warning: Option<Vec<Fragment<'a>>>,
    pub examples: Vec<Example<'a>>,
}

impl<'a> SubtypeView<'a> {
    fn new(subtype: &'a Subtype) -> Self {
        Self {
            label: format::parse_emphasis(&subtype.label),
            warning: subtype.warning.as_deref().map(format::link_urls),
            examples: subtype
                .examples
                .iter()
                .map(|e| format::classify_example(e))
                .collect(),
        }
    }

    /// Subtypes without content are plain labels, not toggles.
    pub fn has_content(&self) -> bool {
        self.warning.is_some() || !self.examples.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicView<'a> {
    pub label: Vec<Fragment<'a>>,
    pub warning: Option<Vec<Fragment<'a>>>,
    pub examples: Vec<Example<'a>>,
    pub subtypes: Vec<SubtypeView<'a>>,
}

impl<'a> TopicView<'a> {
    fn new(topic: &'a Topic) -> Self {
        Self {
            label: format::parse_emphasis(&topic.label),
            warning: topic.warning.as_deref().map(format::link_urls),
            examples: topic
                .examples
                .iter()
                .map(|e| format::classify_example(e))
                .collect(),
            subtypes: topic.subtypes.iter().map(SubtypeView::new).collect(),
        }
    }

    /// Expanded body shows [`EMPTY_MARKER`] instead of an empty region.
    /// Every topic stays a toggle, even one with nothing to show.
    pub fn shows_empty_marker(&self) -> bool {
        self.subtypes.is_empty() && self.examples.is_empty()
    }
}

/// All topics of a page, in numeric key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    pub topics: Vec<TopicView<'a>>,
}

impl<'a> PageView<'a> {
    pub fn new(database: &'a Database) -> Self {
        Self {
            topics: database.topics().map(TopicView::new).collect(),
        }
    }

    /// Subtype count per topic, for [`ExpansionState::expand_all`](crate::core::expansion::ExpansionState::expand_all).
    pub fn subtype_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.topics.iter().map(|t| t.subtypes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn database(json: &str) -> Database {
        Database::from_json(json).expect("valid database")
    }

    #[test]
    fn labels_get_emphasis_but_examples_do_not() {
        let db = database(r#"{"1": {"type": "a *b*", "examples": ["*c*"]}}"#);
        let view = PageView::new(&db);
        let topic = &view.topics[0];
        assert_eq!(
            topic.label,
            [Fragment::Plain("a "), Fragment::Emphasized("b")]
        );
        assert_eq!(
            topic.examples,
            [Example::Text(vec![Fragment::Plain("*c*")])]
        );
    }

    #[test]
    fn warnings_are_linked() {
        let db = database(r#"{"1": {"type": "a", "warning": "see https://x.io"}}"#);
        let view = PageView::new(&db);
        assert_eq!(
            view.topics[0].warning.as_deref(),
            Some(&[Fragment::Plain("see "), Fragment::Link("https://x.io")][..])
        );
    }

    #[test]
    fn pure_url_examples_become_links() {
        let db = database(
            r#"{"1": {"type": "a", "subtypes": [{"type": "s", "examples": [" https://x.io/v "]}]}}"#,
        );
        let view = PageView::new(&db);
        assert_eq!(
            view.topics[0].subtypes[0].examples,
            [Example::Link("https://x.io/v")]
        );
    }

    #[test]
    fn empty_topic_shows_marker() {
        let db = database(r#"{"1": {"type": "a", "examples": []}}"#);
        let view = PageView::new(&db);
        assert!(view.topics[0].shows_empty_marker());
    }

    #[test]
    fn topic_with_examples_or_subtypes_has_no_marker() {
        let db = database(
            r#"{"1": {"type": "a", "examples": ["x"]}, "2": {"type": "b", "subtypes": [{"type": "s"}]}}"#,
        );
        let view = PageView::new(&db);
        assert!(view.topics.iter().all(|t| !t.shows_empty_marker()));
    }

    #[test]
    fn subtype_without_content_is_plain_label() {
        let db = database(
            r#"{"1": {"type": "a", "subtypes": [{"type": "s", "examples": []}, {"type": "w", "warning": "!"}]}}"#,
        );
        let view = PageView::new(&db);
        assert!(!view.topics[0].subtypes[0].has_content());
        assert!(view.topics[0].subtypes[1].has_content());
    }

    #[test]
    fn bare_topic_shows_marker_and_subtype_content_follows_fields() {
        let db = database(
            r#"{"1": {"type": "bare"},
                "2": {"type": "parent", "subtypes": [
                    {"type": "first", "examples": ["x"]},
                    {"type": "second", "warning": "careful"},
                    {"type": "third"}
                ]}}"#,
        );
        let view = PageView::new(&db);
        assert!(view.topics[0].shows_empty_marker());
        let subs = &view.topics[1].subtypes;
        assert!(subs[0].has_content());
        assert!(subs[1].has_content());
        assert!(!subs[2].has_content());
    }

    #[test]
    fn topics_follow_numeric_order() {
        let db = database(r#"{"10": {"type": "ten"}, "9": {"type": "nine"}}"#);
        let view = PageView::new(&db);
        let labels: Vec<_> = view.topics.iter().map(|t| t.label[0].text()).collect();
        assert_eq!(labels, ["nine", "ten"]);
        assert_eq!(view.subtype_counts().collect::<Vec<_>>(), [0, 0]);
    }
}
