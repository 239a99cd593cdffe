//! Static HTML export: one self-contained document per page.
//!
//! Topics and subtypes become `<details>` elements, so expand/collapse works without
//! scripts. The `open` attribute reflects the [`ExpansionState`] passed in.

use crate::core::expansion::ExpansionState;
use crate::core::format::{Example, Fragment};
use crate::core::page::{AUTHOR, Page};
use crate::core::view::{EMPTY_MARKER, PageView, SubtypeView, TopicView, WARNING_LABEL};

const STYLESHEET: &str = "\
body{margin:0;padding:24px;background:#fafafa;color:#18181b;font-family:system-ui,sans-serif}
main{max-width:56rem;margin:0 auto;background:#fff;border:1px solid #e4e4e7;border-radius:12px}
header{border-bottom:1px solid #e4e4e7;padding:20px}
h1{margin:0;font-size:1.5rem}
.disclaimer{font-size:.75rem;color:#71717a}
.credit{font-size:.875rem;color:#52525b}
section{padding:20px}
ul{list-style:none;margin:0;padding:0}
.topic{border:1px solid #e4e4e7;border-radius:8px;margin-bottom:12px}
.topic>details>summary{padding:12px 16px;cursor:pointer}
.topic-body{border-top:1px solid #e4e4e7;padding:12px 16px}
.warning{border:1px solid #fcd34d;background:#fffbeb;color:#78350f;border-radius:6px;padding:12px;margin-bottom:12px}
.example{border:1px solid #e4e4e7;border-radius:6px;padding:12px;margin-top:12px}
.example p{margin:0;font-size:.875rem}
.example-link{display:block;margin-top:12px;color:#2563eb;word-break:break-word}
a{color:#2563eb}
.subtypes>li{border:1px solid #e4e4e7;background:#fafafacc;border-radius:6px;padding:12px;margin-top:8px}
.subtypes summary,.subtype-label{font-size:.875rem;font-weight:500;cursor:pointer}
.subtype-label{cursor:default}
.empty{font-size:.875rem;color:#52525b}
";

/// Escape text content.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a double-quoted attribute value.
pub fn escape_html_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Render a complete HTML document for `page`.
pub fn render_page(page: Page, view: &PageView<'_>, expansion: &ExpansionState) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(page.title())));
    out.push_str(&format!(
        "<meta name=\"description\" content=\"{}\">\n",
        escape_html_attr(page.description())
    ));
    out.push_str(&format!(
        "<meta name=\"author\" content=\"{}\">\n",
        escape_html_attr(AUTHOR)
    ));
    out.push_str(&format!("<style>\n{}</style>\n", STYLESHEET));
    out.push_str("</head>\n<body>\n<main>\n<header>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(page.title())));
    if let Some(disclaimer) = page.disclaimer() {
        out.push_str(&format!(
            "<p class=\"disclaimer\"><strong>Disclaimer:</strong> {}</p>\n",
            escape_html(disclaimer)
        ));
    }
    out.push_str(&format!(
        "<p class=\"credit\">Created by {}</p>\n",
        escape_html(AUTHOR)
    ));
    out.push_str("</header>\n<section>\n<ul class=\"topics\">\n");
    for (t_idx, topic) in view.topics.iter().enumerate() {
        push_topic(&mut out, t_idx, topic, expansion);
    }
    out.push_str("</ul>\n</section>\n</main>\n</body>\n</html>\n");
    out
}

fn open_attr(open: bool) -> &'static str {
    if open { " open" } else { "" }
}

fn push_topic(out: &mut String, t_idx: usize, topic: &TopicView<'_>, expansion: &ExpansionState) {
    out.push_str(&format!(
        "<li class=\"topic\" id=\"topic-{}\">\n<details{}>\n<summary><strong>",
        t_idx,
        open_attr(expansion.is_topic_expanded(t_idx))
    ));
    push_fragments(out, &topic.label);
    out.push_str("</strong></summary>\n<div class=\"topic-body\">\n");

    if let Some(warning) = &topic.warning {
        push_warning(out, warning);
    }
    push_examples(out, &topic.examples);

    if topic.subtypes.is_empty() {
        if topic.shows_empty_marker() {
            out.push_str(&format!("<p class=\"empty\">{}</p>\n", EMPTY_MARKER));
        }
    } else {
        out.push_str("<ul class=\"subtypes\">\n");
        for (s_idx, subtype) in topic.subtypes.iter().enumerate() {
            push_subtype(out, t_idx, s_idx, subtype, expansion);
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</div>\n</details>\n</li>\n");
}

fn push_subtype(
    out: &mut String,
    t_idx: usize,
    s_idx: usize,
    subtype: &SubtypeView<'_>,
    expansion: &ExpansionState,
) {
    out.push_str(&format!("<li id=\"subtype-{}-{}\">\n", t_idx, s_idx));
    if !subtype.has_content() {
        out.push_str("<div class=\"subtype-label\">");
        push_fragments(out, &subtype.label);
        out.push_str("</div>\n</li>\n");
        return;
    }
    out.push_str(&format!(
        "<details{}>\n<summary>",
        open_attr(expansion.is_subtype_expanded(t_idx, s_idx))
    ));
    push_fragments(out, &subtype.label);
    out.push_str("</summary>\n");
    if let Some(warning) = &subtype.warning {
        push_warning(out, warning);
    }
    push_examples(out, &subtype.examples);
    out.push_str("</details>\n</li>\n");
}

fn push_warning(out: &mut String, warning: &[Fragment<'_>]) {
    out.push_str(&format!(
        "<div class=\"warning\"><strong>{}</strong> <span>",
        WARNING_LABEL
    ));
    push_fragments(out, warning);
    out.push_str("</span></div>\n");
}

fn push_examples(out: &mut String, examples: &[Example<'_>]) {
    if examples.is_empty() {
        return;
    }
    out.push_str("<div class=\"examples\">\n");
    for example in examples {
        match example {
            Example::Link(url) => {
                out.push_str(&format!(
                    "<a class=\"example-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\n",
                    escape_html_attr(url),
                    escape_html(url)
                ));
            }
            Example::Text(fragments) => {
                out.push_str("<div class=\"example\"><p>");
                push_fragments(out, fragments);
                out.push_str("</p></div>\n");
            }
        }
    }
    out.push_str("</div>\n");
}

fn push_fragments(out: &mut String, fragments: &[Fragment<'_>]) {
    for fragment in fragments {
        match fragment {
            Fragment::Plain(text) => out.push_str(&escape_html(text)),
            Fragment::Emphasized(text) => {
                out.push_str(&format!("<em>{}</em>", escape_html(text)));
            }
            Fragment::Link(url) => {
                out.push_str(&format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                    escape_html_attr(url),
                    escape_html(url)
                ));
            }
        }
    }
}
