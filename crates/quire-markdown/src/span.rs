//! Typed inline text spans.

use std::fmt;

use quire_html::{Attributes, HtmlNode, LeafNode};

use crate::error::MarkdownError;

/// Inline span classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    /// Whether spans of this kind carry a target URL.
    pub fn has_target(self) -> bool {
        matches!(self, Self::Link | Self::Image)
    }

    fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Code => "code",
            Self::Link => "link",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fragment of inline text produced by the lexer.
///
/// `target` holds the URL of a link or image and is `None` for every other
/// kind. For images `content` is the alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub content: String,
    pub kind: SpanKind,
    pub target: Option<String>,
}

impl TextSpan {
    /// Span without a target.
    #[must_use]
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            content: content.into(),
            kind,
            target: None,
        }
    }

    #[must_use]
    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    #[must_use]
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: text.into(),
            kind: SpanKind::Link,
            target: Some(url.into()),
        }
    }

    #[must_use]
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: alt.into(),
            kind: SpanKind::Image,
            target: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    /// Convert to a render node.
    ///
    /// | kind   | node                              |
    /// |--------|-----------------------------------|
    /// | Plain  | raw text                          |
    /// | Bold   | `<b>`                             |
    /// | Italic | `<i>`                             |
    /// | Code   | `<code>`                          |
    /// | Link   | `<a href="target">`               |
    /// | Image  | `<img src="target" alt="content"/>` |
    pub fn to_html_node(&self) -> Result<HtmlNode, MarkdownError> {
        if self.kind.has_target() != self.target.is_some() {
            return Err(MarkdownError::InvalidSpan {
                kind: self.kind,
                reason: if self.kind.has_target() {
                    "missing target"
                } else {
                    "unexpected target"
                },
            });
        }
        let target = self.target.as_deref().unwrap_or_default();

        let leaf = match self.kind {
            SpanKind::Plain => LeafNode::text(self.content.as_str()),
            SpanKind::Bold => LeafNode::element("b", &self.content)?,
            SpanKind::Italic => LeafNode::element("i", &self.content)?,
            SpanKind::Code => LeafNode::element("code", &self.content)?,
            SpanKind::Link => LeafNode::element("a", &self.content)?
                .with_attributes(Attributes::new().with("href", target)),
            SpanKind::Image => LeafNode::void("img")?.with_attributes(
                Attributes::new()
                    .with("src", target)
                    .with("alt", self.content.as_str()),
            ),
        };
        Ok(leaf.into())
    }
}
