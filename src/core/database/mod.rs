//! Page databases: numeric-keyed topics with optional warnings, examples, and subtypes.
//!
//! A database is read once from JSON and never mutated. Shape is checked at load time:
//! keys must be non-negative integers and every value must look like a topic.

mod validation;

use std::fs;
use std::path::Path;

/// Second-level entry under a topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtype {
    /// Label; may contain `*emphasis*` markers.
    pub label: String,
    pub warning: Option<String>,
    pub examples: Vec<String>,
}

/// Top-level classification entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    /// Label; may contain `*emphasis*` markers.
    pub label: String,
    pub warning: Option<String>,
    pub examples: Vec<String>,
    pub subtypes: Vec<Subtype>,
}

/// Topic, subtype, and example counts (for `check` output and the browser header).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatabaseStats {
    pub topics: usize,
    pub subtypes: usize,
    pub examples: usize,
}

/// Error loading a database.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Failed to read database file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Key {0:?} is not a non-negative integer")]
    InvalidKey(String),
    #[error("Keys {first:?} and {second:?} have the same numeric value")]
    DuplicateKey { first: String, second: String },
    #[error("Topic {key:?}: {source}")]
    InvalidTopic {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Topics ordered by ascending numeric key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Database {
    topics: Vec<(u64, Topic)>,
}

impl Database {
    /// Parse and validate a database document.
    pub fn from_json(json: &str) -> Result<Self, DatabaseError> {
        let raw: validation::DatabaseFile = serde_json::from_str(json)?;
        let topics = validation::validate_and_convert(raw)?;
        log::debug!("Loaded database with {} topics", topics.len());
        Ok(Self { topics })
    }

    /// Read and validate a database file.
    pub fn load(path: &Path) -> Result<Self, DatabaseError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Topics in display order.
    pub fn topics(&self) -> impl ExactSizeIterator<Item = &Topic> {
        self.topics.iter().map(|(_, topic)| topic)
    }

    /// Numeric keys in display order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = u64> + '_ {
        self.topics.iter().map(|(key, _)| *key)
    }

    /// Topic at display position `index`.
    pub fn topic(&self, index: usize) -> Option<&Topic> {
        self.topics.get(index).map(|(_, topic)| topic)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn stats(&self) -> DatabaseStats {
        let mut stats = DatabaseStats {
            topics: self.topics.len(),
            ..Default::default()
        };
        for topic in self.topics() {
            stats.subtypes += topic.subtypes.len();
            stats.examples += topic.examples.len();
            stats.examples += topic
                .subtypes
                .iter()
                .map(|s| s.examples.len())
                .sum::<usize>();
        }
        stats
    }
}

#[cfg(test)]
mod tests;
