//! Text wrapping for display.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use textwrap::core::{Fragment, display_width};
use textwrap::wrap_algorithms::wrap_first_fit;

/// Split text into lines of max width (columns). Uses textwrap for correct UTF-8 handling.
fn wrap_text(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![s.to_string()];
    }
    textwrap::wrap(s, width)
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect()
}

/// Split a message into display lines respecting message newlines, then wrap to `width`.
pub(crate) fn wrap_message(msg: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in msg.split('\n') {
        if line.is_empty() {
            out.push(String::new());
        } else {
            for chunk in wrap_text(line, width) {
                out.push(chunk);
            }
        }
    }
    out
}

/// A word plus its trailing whitespace, carrying the style of the span it came from.
#[derive(Debug)]
struct StyledWord<'a> {
    word: &'a str,
    whitespace: &'a str,
    style: Style,
}

impl Fragment for StyledWord<'_> {
    fn width(&self) -> f64 {
        display_width(self.word) as f64
    }

    fn whitespace_width(&self) -> f64 {
        display_width(self.whitespace) as f64
    }

    fn penalty_width(&self) -> f64 {
        0.0
    }
}

/// Split `text` into (word, trailing whitespace) pairs. Leading whitespace becomes an empty word.
fn split_words(text: &str) -> Vec<(&str, &str)> {
    let mut out = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (word, tail) = rest.split_at(word_end);
        let space_end = tail
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(tail.len());
        let (whitespace, next) = tail.split_at(space_end);
        out.push((word, whitespace));
        rest = next;
    }
    out
}

/// Push `word`, split by character into pieces of at most `width` columns when it is wider.
fn push_word<'a>(
    words: &mut Vec<StyledWord<'a>>,
    word: &'a str,
    whitespace: &'a str,
    style: Style,
    width: usize,
) {
    if display_width(word) <= width {
        words.push(StyledWord {
            word,
            whitespace,
            style,
        });
        return;
    }
    let mut start = 0;
    let mut used = 0;
    for (i, c) in word.char_indices() {
        let cw = display_width(&word[i..i + c.len_utf8()]);
        if used > 0 && used + cw > width {
            words.push(StyledWord {
                word: &word[start..i],
                whitespace: "",
                style,
            });
            start = i;
            used = 0;
        }
        used += cw;
    }
    words.push(StyledWord {
        word: &word[start..],
        whitespace,
        style,
    });
}

/// Append text to the line, merging with the last span when the style matches.
fn push_text(line: &mut Vec<Span<'static>>, text: &str, style: Style) {
    if text.is_empty() {
        return;
    }
    if let Some(last) = line.last_mut()
        && last.style == style
    {
        last.content.to_mut().push_str(text);
    } else {
        line.push(Span::styled(text.to_string(), style));
    }
}

/// Word-wrap styled spans to `width` columns, keeping each word's style.
/// Words longer than a line are split by character. Explicit newlines are kept.
pub(crate) fn wrap_spans(spans: &[Span<'_>], width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    // One word list per newline-separated segment.
    let mut segments: Vec<Vec<StyledWord<'_>>> = vec![Vec::new()];
    for span in spans {
        for (i, part) in span.content.split('\n').enumerate() {
            if i > 0 {
                segments.push(Vec::new());
            }
            if let Some(words) = segments.last_mut() {
                for (word, whitespace) in split_words(part) {
                    push_word(words, word, whitespace, span.style, width);
                }
            }
        }
    }

    let mut lines = Vec::new();
    for words in &segments {
        let wrapped = wrap_first_fit(words, &[width as f64]);
        if wrapped.is_empty() {
            lines.push(Line::default());
            continue;
        }
        for (n, line_words) in wrapped.iter().enumerate() {
            // Whitespace that only opened a wrapped line is dropped.
            let skip = if n == 0 {
                0
            } else {
                line_words.iter().take_while(|w| w.word.is_empty()).count()
            };
            // Trailing whitespace is dropped as well.
            let end = line_words
                .iter()
                .rposition(|w| !w.word.is_empty())
                .map_or(0, |p| p + 1);
            let mut line = Vec::new();
            for (i, w) in line_words.iter().enumerate().take(end).skip(skip) {
                push_text(&mut line, w.word, w.style);
                if i + 1 < end {
                    push_text(&mut line, w.whitespace, w.style);
                }
            }
            lines.push(Line::from(line));
        }
    }
    lines
}
