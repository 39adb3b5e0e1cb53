//! Document assembly: classified blocks to an HTML node tree.

use quire_html::{HtmlNode, LeafNode, ParentNode};

use crate::block::{self, Block, BlockType};
use crate::error::MarkdownError;
use crate::inline::lex;
use crate::span::TextSpan;

/// Convert a markdown document to its HTML string.
pub fn document_to_html(markdown: &str) -> Result<String, MarkdownError> {
    Ok(assemble(markdown)?.render())
}

/// Build the node tree for a markdown document.
///
/// A document consisting of a single list is returned as that `<ul>` or
/// `<ol>` element; anything else is wrapped in a `<div>`. A document with no
/// blocks, or an element whose inline content is empty, fails with
/// [`NodeError::NoChildren`].
///
/// [`NodeError::NoChildren`]: quire_html::NodeError::NoChildren
pub fn assemble(markdown: &str) -> Result<HtmlNode, MarkdownError> {
    let mut children = Vec::new();
    for block in block::blocks(markdown) {
        children.extend(block_to_nodes(block)?);
    }

    if children.len() == 1 && matches!(children[0].tag(), Some("ul" | "ol")) {
        return Ok(children.swap_remove(0));
    }

    Ok(ParentNode::new("div", children)?.into())
}

fn block_to_nodes(block: Block<'_>) -> Result<Vec<HtmlNode>, MarkdownError> {
    let text = block.text;
    let nodes = match block.kind {
        BlockType::Paragraph => vec![paragraph(text)?],
        BlockType::Heading => headings(text)?,
        BlockType::Code => vec![code(text)?],
        BlockType::Quote => vec![quote(text)?],
        BlockType::UnorderedList => vec![unordered_list(text)?],
        BlockType::OrderedList => vec![ordered_list(text)?],
    };
    Ok(nodes)
}

/// Lex inline text into render nodes.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, MarkdownError> {
    lex(text).iter().map(TextSpan::to_html_node).collect()
}

/// Wrap lexed `text` in a `tag` element.
///
/// Text that lexes to no spans fails with [`NodeError::NoChildren`].
///
/// [`NodeError::NoChildren`]: quire_html::NodeError::NoChildren
fn inline_element(tag: &str, text: &str) -> Result<HtmlNode, MarkdownError> {
    Ok(ParentNode::new(tag, text_to_children(text)?)?.into())
}

fn paragraph(text: &str) -> Result<HtmlNode, MarkdownError> {
    let joined = text.lines().map(str::trim).collect::<Vec<_>>().join(" ");
    inline_element("p", &joined)
}

/// Every non-blank line of a heading block becomes its own heading.
fn headings(text: &str) -> Result<Vec<HtmlNode>, MarkdownError> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let content = line.trim_start_matches('#');
            let level = line.len() - content.len();
            inline_element(&format!("h{level}"), content.trim())
        })
        .collect()
}

/// Code is not lexed; fence lines made only of backticks are dropped.
fn code(text: &str) -> Result<HtmlNode, MarkdownError> {
    let mut lines: Vec<&str> = text.lines().collect();
    if lines.first().is_some_and(|line| is_fence(line)) {
        lines.remove(0);
    }
    if lines.last().is_some_and(|line| is_fence(line)) {
        lines.pop();
    }

    let code = LeafNode::element("code", &lines.join("\n"))?;
    Ok(ParentNode::new("pre", vec![code.into()])?.into())
}

fn is_fence(line: &str) -> bool {
    line.trim_matches('`').is_empty()
}

fn quote(text: &str) -> Result<HtmlNode, MarkdownError> {
    let joined = text
        .lines()
        .map(|line| line.strip_prefix('>').map_or(line, str::trim_start))
        .collect::<Vec<_>>()
        .join(" ");
    inline_element("blockquote", &joined)
}

fn unordered_list(text: &str) -> Result<HtmlNode, MarkdownError> {
    list("ul", text, |line| {
        line.trim_start_matches(['-', '*', ' ']).trim()
    })
}

fn ordered_list(text: &str) -> Result<HtmlNode, MarkdownError> {
    list("ol", text, |line| match line.split_once('.') {
        Some((_, rest)) => rest.trim(),
        None => line.trim(),
    })
}

fn list(tag: &str, text: &str, item_text: fn(&str) -> &str) -> Result<HtmlNode, MarkdownError> {
    let items = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| inline_element("li", item_text(line)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new(tag, items)?.into())
}
