//! Emphasis segmentation: `*segment*` runs become [`Fragment::Emphasized`].

use std::sync::OnceLock;

use regex::Regex;

use super::{Fragment, push_plain};

static EMPHASIS_RE: OnceLock<Regex> = OnceLock::new();

/// A single asterisk pair around non-empty text that contains no asterisk.
fn emphasis_re() -> &'static Regex {
    EMPHASIS_RE.get_or_init(|| Regex::new(r"\*[^*]+\*").expect("emphasis pattern is valid"))
}

/// Split `text` into Plain and Emphasized runs.
/// Matches are leftmost-first and stop at the first closing `*`; `**` never matches, and
/// unbalanced asterisks stay in the surrounding Plain text.
pub fn parse_emphasis(text: &str) -> Vec<Fragment<'_>> {
    let mut fragments = Vec::new();
    let mut last = 0;
    for m in emphasis_re().find_iter(text) {
        push_plain(&mut fragments, &text[last..m.start()]);
        // Both delimiters are ASCII, so slicing one byte off each end stays on char boundaries.
        fragments.push(Fragment::Emphasized(&text[m.start() + 1..m.end() - 1]));
        last = m.end();
    }
    push_plain(&mut fragments, &text[last..]);
    fragments
}
