//! Text formatting for page content: emphasis runs, inline links, and pure-URL detection.
//!
//! Every pass is a pure function from `&str` to a sequence of [`Fragment`]s borrowing from
//! the input, so renderers (HTML export, terminal browser) only decide how to draw each tag.

mod emphasis;
mod links;

pub use emphasis::parse_emphasis;
pub use links::{is_pure_url, link_urls, trim_blank};

/// A tagged run of display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    Plain(&'a str),
    /// Inner text of a `*...*` run, delimiters stripped.
    Emphasized(&'a str),
    /// An absolute http(s) URL found inside free text.
    Link(&'a str),
}

impl<'a> Fragment<'a> {
    /// Display text of the fragment, without any markup.
    pub fn text(&self) -> &'a str {
        match self {
            Fragment::Plain(s) | Fragment::Emphasized(s) | Fragment::Link(s) => s,
        }
    }
}

/// How an example value is presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Example<'a> {
    /// The whole value is one URL: a standalone link, no box.
    Link(&'a str),
    /// Free text in a bordered block, URLs inside it linked.
    Text(Vec<Fragment<'a>>),
}

/// Classify an example value: a pure URL becomes a standalone link (trimmed), anything else
/// is boxed text passed through the inline linker. Emphasis is not applied to examples.
pub fn classify_example(value: &str) -> Example<'_> {
    if is_pure_url(value) {
        Example::Link(trim_blank(value))
    } else {
        Example::Text(link_urls(value))
    }
}

/// Push `text` as a Plain fragment unless it is empty.
fn push_plain<'a>(fragments: &mut Vec<Fragment<'a>>, text: &'a str) {
    if !text.is_empty() {
        fragments.push(Fragment::Plain(text));
    }
}
