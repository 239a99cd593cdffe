//! Build script: validates the embedded page databases at compile time.

use std::collections::HashMap;
use std::path::PathBuf;

#[derive(serde::Deserialize)]
#[allow(dead_code)]
struct SubtypeEntry {
    r#type: String,
    warning: Option<String>,
    examples: Option<Vec<String>>,
}

#[derive(serde::Deserialize)]
#[allow(dead_code)]
struct TopicEntry {
    r#type: String,
    warning: Option<String>,
    examples: Option<Vec<String>>,
    subtypes: Option<Vec<SubtypeEntry>>,
}

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");
    for name in ["titles.json", "tricks.json"] {
        let data_path: PathBuf = [&manifest_dir, "data", name].iter().collect();
        println!("cargo:rerun-if-changed={}", data_path.display());
        let json = std::fs::read_to_string(&data_path).unwrap_or_else(|e| {
            panic!(
                "Failed to read {}: {}. {} must exist and be valid.",
                data_path.display(),
                e,
                name
            )
        });
        let topics: HashMap<String, TopicEntry> =
            serde_json::from_str(&json).unwrap_or_else(|e| {
                panic!("{} is invalid JSON: {}. Fix the file and rebuild.", name, e)
            });
        for key in topics.keys() {
            if key.parse::<u64>().is_err() {
                panic!("{}: key {:?} is not a non-negative integer", name, key);
            }
        }
    }
}
