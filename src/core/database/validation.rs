//! Database validation: disk format and conversion to [`Topic`]s.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::Deserialize;
use serde_json::Value;

use super::{DatabaseError, Subtype, Topic};

/// JSON structure on disk: key -> topic object. Values are checked per key so errors can
/// name the offending topic.
pub(super) type DatabaseFile = BTreeMap<String, Value>;

#[derive(Debug, Deserialize)]
struct TopicEntry {
    #[serde(rename = "type")]
    label: String,
    #[serde(default)]
    warning: Option<String>,
    #[serde(default)]
    examples: Option<Vec<String>>,
    #[serde(default)]
    subtypes: Option<Vec<SubtypeEntry>>,
}

#[derive(Debug, Deserialize)]
struct SubtypeEntry {
    #[serde(rename = "type")]
    label: String,
    #[serde(default)]
    warning: Option<String>,
    #[serde(default)]
    examples: Option<Vec<String>>,
}

/// An empty warning shows nothing, same as a missing one.
fn non_empty(warning: Option<String>) -> Option<String> {
    warning.filter(|w| !w.is_empty())
}

impl From<SubtypeEntry> for Subtype {
    fn from(entry: SubtypeEntry) -> Self {
        Subtype {
            label: entry.label,
            warning: non_empty(entry.warning),
            examples: entry.examples.unwrap_or_default(),
        }
    }
}

impl From<TopicEntry> for Topic {
    fn from(entry: TopicEntry) -> Self {
        Topic {
            label: entry.label,
            warning: non_empty(entry.warning),
            examples: entry.examples.unwrap_or_default(),
            subtypes: entry
                .subtypes
                .unwrap_or_default()
                .into_iter()
                .map(Subtype::from)
                .collect(),
        }
    }
}

/// Parse keys, reject duplicates by numeric value, and convert entries.
/// Output is sorted by numeric key.
pub(super) fn validate_and_convert(file: DatabaseFile) -> Result<Vec<(u64, Topic)>, DatabaseError> {
    let mut by_number: BTreeMap<u64, (String, Topic)> = BTreeMap::new();

    for (key, value) in file {
        // Digits only: no sign, whitespace, or fraction.
        if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DatabaseError::InvalidKey(key));
        }
        let number: u64 = key
            .parse()
            .map_err(|_| DatabaseError::InvalidKey(key.clone()))?;
        let entry: TopicEntry =
            serde_json::from_value(value).map_err(|source| DatabaseError::InvalidTopic {
                key: key.clone(),
                source,
            })?;
        match by_number.entry(number) {
            Entry::Occupied(existing) => {
                return Err(DatabaseError::DuplicateKey {
                    first: existing.get().0.clone(),
                    second: key,
                });
            }
            Entry::Vacant(slot) => {
                slot.insert((key, Topic::from(entry)));
            }
        }
    }

    Ok(by_number
        .into_iter()
        .map(|(number, (_, topic))| (number, topic))
        .collect())
}
