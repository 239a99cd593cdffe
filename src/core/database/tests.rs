//! Database module tests.

use std::io::Write;

use super::{Database, DatabaseError, DatabaseStats};

fn labels(db: &Database) -> Vec<&str> {
    db.topics().map(|t| t.label.as_str()).collect()
}

#[test]
fn keys_sort_numerically_not_lexicographically() {
    let db = Database::from_json(
        r#"{"2": {"type": "two"}, "10": {"type": "ten"}, "1": {"type": "one"}}"#,
    )
    .expect("valid database");
    assert_eq!(db.keys().collect::<Vec<_>>(), [1, 2, 10]);
    assert_eq!(labels(&db), ["one", "two", "ten"]);
}

#[test]
fn optional_fields_default_to_empty() {
    let db = Database::from_json(r#"{"1": {"type": "bare"}}"#).expect("valid database");
    let topic = db.topic(0).expect("one topic");
    assert_eq!(topic.label, "bare");
    assert!(topic.warning.is_none());
    assert!(topic.examples.is_empty());
    assert!(topic.subtypes.is_empty());
}

#[test]
fn null_and_empty_warning_are_absent() {
    let db = Database::from_json(
        r#"{"1": {"type": "a", "warning": null, "examples": null},
            "2": {"type": "b", "warning": ""}}"#,
    )
    .expect("valid database");
    assert!(db.topics().all(|t| t.warning.is_none()));
}

#[test]
fn subtypes_keep_order_and_fields() {
    let db = Database::from_json(
        r#"{"1": {"type": "parent", "subtypes": [
            {"type": "first", "examples": ["x"]},
            {"type": "second", "warning": "careful"},
            {"type": "third"}
        ]}}"#,
    )
    .expect("valid database");
    let subs = &db.topic(0).expect("topic").subtypes;
    assert_eq!(subs.len(), 3);
    assert_eq!(subs[0].label, "first");
    assert_eq!(subs[0].examples, ["x"]);
    assert_eq!(subs[1].warning.as_deref(), Some("careful"));
    assert!(subs[2].warning.is_none());
    assert!(subs[2].examples.is_empty());
}

#[test]
fn unknown_fields_are_ignored() {
    let db = Database::from_json(r#"{"1": {"type": "a", "extra": 42}}"#).expect("valid");
    assert_eq!(db.len(), 1);
}

#[test]
fn empty_object_is_empty_database() {
    let db = Database::from_json("{}").expect("valid");
    assert!(db.is_empty());
    assert_eq!(db.stats(), DatabaseStats::default());
}

#[test]
fn root_must_be_object() {
    let err = Database::from_json(r#"[{"type": "a"}]"#).unwrap_err();
    assert!(matches!(err, DatabaseError::Json(_)), "got {:?}", err);
}

#[test]
fn non_numeric_key_is_rejected() {
    let err = Database::from_json(r#"{"one": {"type": "a"}}"#).unwrap_err();
    match err {
        DatabaseError::InvalidKey(key) => assert_eq!(key, "one"),
        other => panic!("expected InvalidKey, got {:?}", other),
    }
    for bad in ["-1", " 1", "1.5", ""] {
        let json = format!(r#"{{"{}": {{"type": "a"}}}}"#, bad);
        assert!(
            matches!(Database::from_json(&json), Err(DatabaseError::InvalidKey(_))),
            "key {:?} should be rejected",
            bad
        );
    }
}

#[test]
fn duplicate_numeric_key_is_rejected() {
    let err = Database::from_json(r#"{"1": {"type": "a"}, "01": {"type": "b"}}"#).unwrap_err();
    match err {
        DatabaseError::DuplicateKey { first, second } => {
            assert_eq!(first, "01");
            assert_eq!(second, "1");
        }
        other => panic!("expected DuplicateKey, got {:?}", other),
    }
}

#[test]
fn wrong_topic_shape_names_key() {
    let err = Database::from_json(r#"{"1": {"type": "a"}, "7": {"examples": ["x"]}}"#)
        .unwrap_err();
    match &err {
        DatabaseError::InvalidTopic { key, .. } => assert_eq!(key, "7"),
        other => panic!("expected InvalidTopic, got {:?}", other),
    }
    assert!(err.to_string().contains("type"));
}

#[test]
fn examples_must_be_strings() {
    let err = Database::from_json(r#"{"1": {"type": "a", "examples": [1, 2]}}"#).unwrap_err();
    assert!(matches!(err, DatabaseError::InvalidTopic { .. }));
}

#[test]
fn stats_count_nested_examples() {
    let db = Database::from_json(
        r#"{"1": {"type": "a", "examples": ["x", "y"], "subtypes": [
            {"type": "s1", "examples": ["z"]}, {"type": "s2"}
        ]}, "2": {"type": "b"}}"#,
    )
    .expect("valid");
    assert_eq!(
        db.stats(),
        DatabaseStats {
            topics: 2,
            subtypes: 2,
            examples: 3
        }
    );
}

#[test]
fn load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{"3": {{"type": "from disk"}}}}"#).expect("write");
    let db = Database::load(file.path()).expect("load");
    assert_eq!(labels(&db), ["from disk"]);
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let err = Database::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, DatabaseError::Io(_)));
}
