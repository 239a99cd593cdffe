//! Expand/collapse state for one page view.

use std::collections::BTreeSet;

/// Which topics and subtypes are expanded, by display index.
///
/// Subtype flags are independent of their topic's flag: collapsing a topic hides its subtypes
/// but keeps their state for when it is expanded again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    topics: BTreeSet<usize>,
    subtypes: BTreeSet<(usize, usize)>,
}

impl ExpansionState {
    /// Initial state for a page: only the first topic open, every subtype closed.
    pub fn for_topic_count(topic_count: usize) -> Self {
        let mut state = Self::default();
        if topic_count > 0 {
            state.topics.insert(0);
        }
        state
    }

    pub fn is_topic_expanded(&self, topic: usize) -> bool {
        self.topics.contains(&topic)
    }

    pub fn is_subtype_expanded(&self, topic: usize, subtype: usize) -> bool {
        self.subtypes.contains(&(topic, subtype))
    }

    /// Flip one topic. Returns the new state.
    pub fn toggle_topic(&mut self, topic: usize) -> bool {
        toggle(&mut self.topics, topic)
    }

    /// Flip one subtype. Returns the new state.
    pub fn toggle_subtype(&mut self, topic: usize, subtype: usize) -> bool {
        toggle(&mut self.subtypes, (topic, subtype))
    }

    /// Open every topic and every subtype. `subtype_counts[i]` is the subtype count of topic `i`.
    pub fn expand_all(&mut self, subtype_counts: impl IntoIterator<Item = usize>) {
        for (topic, count) in subtype_counts.into_iter().enumerate() {
            self.topics.insert(topic);
            self.subtypes.extend((0..count).map(|s| (topic, s)));
        }
    }

    pub fn collapse_all(&mut self) {
        self.topics.clear();
        self.subtypes.clear();
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, key: T) -> bool {
    if set.remove(&key) {
        false
    } else {
        set.insert(key);
        true
    }
}
