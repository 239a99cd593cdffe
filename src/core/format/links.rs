//! URL handling: inline auto-linking of http(s) URLs and whole-string URL detection.

use std::sync::OnceLock;

use regex::Regex;
use url::{Position, Url};

use super::{Fragment, push_plain};

/// Scheme (case-insensitive) followed by the longest run of URL characters: ASCII word
/// characters plus `- . _ ~ : / ? # [ ] @ ! $ & ' ( ) * + , ; = %`.
/// Closing punctuation in that set (`)`, `*`, `.`) is kept when it trails the URL.
const URL_PATTERN: &str = r"(?i-u:https?://)[A-Za-z0-9_\-._~:/?#\[\]@!$&'()*+,;=%]+";

static URL_RE: OnceLock<Regex> = OnceLock::new();

fn url_re() -> &'static Regex {
    URL_RE.get_or_init(|| Regex::new(URL_PATTERN).expect("URL pattern is valid"))
}

/// Split `text` into Plain runs and Link fragments, in order. Empty gaps are omitted.
pub fn link_urls(text: &str) -> Vec<Fragment<'_>> {
    let mut fragments = Vec::new();
    let mut last = 0;
    for m in url_re().find_iter(text) {
        push_plain(&mut fragments, &text[last..m.start()]);
        fragments.push(Fragment::Link(m.as_str()));
        last = m.end();
    }
    push_plain(&mut fragments, &text[last..]);
    fragments
}

/// Strip surrounding whitespace, including the U+FEFF byte order mark that `str::trim` keeps.
pub fn trim_blank(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// True when the trimmed text is exactly one absolute http(s) URL.
///
/// The text must survive a parse/serialize cycle unchanged, which rejects inputs whose parse
/// silently dropped or normalized characters. A bare origin (`https://example.com`) is
/// accepted even though its serialized form gains a root `/`.
pub fn is_pure_url(text: &str) -> bool {
    let trimmed = trim_blank(text);
    let url = match Url::parse(trimmed) {
        Ok(url) => url,
        Err(e) => {
            log::trace!("not a URL ({}): {:?}", e, trimmed);
            return false;
        }
    };
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    if url.as_str() == trimmed {
        return true;
    }
    // scheme://host[:port]/path?query#fragment, credentials left out
    let rebuilt = format!("{}://{}", url.scheme(), &url[Position::BeforeHost..]);
    if rebuilt == trimmed {
        return true;
    }
    url.path() == "/"
        && trimmed
            == format!(
                "{}{}",
                &url[..Position::BeforePath],
                &url[Position::AfterPath..]
            )
}
