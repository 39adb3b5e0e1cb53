//! Inline lexer.
//!
//! Splits a run of text into typed [`TextSpan`]s in a fixed order of passes:
//!
//! 1. images `![alt](url)`
//! 2. links `[text](url)` not preceded by `!`
//! 3. code `` ` ``
//! 4. bold `**`
//! 5. italic `_`
//!
//! Each pass only looks at spans that are still plain. A span typed by an
//! earlier pass is opaque to later ones, so delimiters never nest and the
//! order of passes decides the output for mixed input.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::span::{SpanKind, TextSpan};

/// `![alt](url)`; alt excludes brackets and url excludes parentheses.
static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("invalid image regex")
});

/// `[text](url)`; the `!` exclusion is checked by [`find_links`].
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("invalid link regex")
});

/// A located `[text](url)` or `![alt](url)` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
struct InlineMatch<'a> {
    range: Range<usize>,
    text: &'a str,
    url: &'a str,
}

/// Lex `text` into spans.
///
/// Zero-length spans are dropped, except links and images which are always
/// kept. Unbalanced delimiters are not detected: text after the last
/// delimiter simply continues the alternation.
///
/// ```
/// use quire_markdown::{lex, TextSpan};
///
/// let spans = lex("a [link](/x)");
/// assert_eq!(spans, vec![TextSpan::plain("a "), TextSpan::link("link", "/x")]);
/// ```
pub fn lex(text: &str) -> Vec<TextSpan> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_images(spans);
    let spans = split_links(spans);
    let spans = split_delimiter(spans, "`", SpanKind::Code);
    let spans = split_delimiter(spans, "**", SpanKind::Bold);
    let spans = split_delimiter(spans, "_", SpanKind::Italic);

    spans
        .into_iter()
        .filter(|span| !span.content.is_empty() || span.kind.has_target())
        .collect()
}

/// Split plain spans on `delimiter`, alternating plain and `kind` segments.
///
/// Even segments stay plain, odd segments become `kind`. A plain span that
/// does not contain the delimiter passes through unchanged.
pub fn split_delimiter(spans: Vec<TextSpan>, delimiter: &str, kind: SpanKind) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() || !span.content.contains(delimiter) {
            out.push(span);
            continue;
        }

        out.extend(
            span.content
                .split(delimiter)
                .enumerate()
                .map(|(i, segment)| {
                    let segment_kind = if i % 2 == 0 { SpanKind::Plain } else { kind };
                    TextSpan::new(segment, segment_kind)
                }),
        );
    }

    out
}

/// Split plain spans on image syntax.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, find_images, |alt, url| TextSpan::image(alt, url))
}

/// Split plain spans on link syntax.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, find_links, |text, url| TextSpan::link(text, url))
}

/// Extract `(alt, url)` pairs of every image in `text`.
pub fn extract_images(text: &str) -> Vec<(&str, &str)> {
    find_images(text).into_iter().map(|m| (m.text, m.url)).collect()
}

/// Extract `(text, url)` pairs of every link in `text`, ignoring images.
pub fn extract_links(text: &str) -> Vec<(&str, &str)> {
    find_links(text).into_iter().map(|m| (m.text, m.url)).collect()
}

fn split_matches(
    spans: Vec<TextSpan>,
    find: fn(&str) -> Vec<InlineMatch<'_>>,
    build: fn(&str, &str) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let text = span.content.as_str();
        let matches = find(text);
        if matches.is_empty() {
            out.push(span);
            continue;
        }

        let mut pos = 0;
        for m in matches {
            let before = &text[pos..m.range.start];
            if !before.is_empty() {
                out.push(TextSpan::plain(before));
            }
            out.push(build(m.text, m.url));
            pos = m.range.end;
        }

        let after = &text[pos..];
        if !after.is_empty() {
            out.push(TextSpan::plain(after));
        }
    }

    out
}

fn find_images(text: &str) -> Vec<InlineMatch<'_>> {
    IMAGE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            Some(InlineMatch {
                range: caps.get(0)?.range(),
                text: caps.get(1)?.as_str(),
                url: caps.get(2)?.as_str(),
            })
        })
        .collect()
}

fn find_links(text: &str) -> Vec<InlineMatch<'_>> {
    let mut matches = Vec::new();
    let mut at = 0;

    while let Some(caps) = LINK_RE.captures_at(text, at) {
        let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            break;
        };

        // An image opener; resume right after its `[`.
        if text[..whole.start()].ends_with('!') {
            at = whole.start() + 1;
            continue;
        }

        matches.push(InlineMatch {
            range: whole.range(),
            text: label.as_str(),
            url: url.as_str(),
        });
        at = whole.end();
    }

    matches
}
