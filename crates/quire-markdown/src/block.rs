//! Block segmentation and classification.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// One to six `#` followed by a space at the start of a block.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6} ").expect("invalid heading regex"));

const CODE_FENCE: &str = "```";

/// Structural type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Paragraph => "paragraph",
            Self::Heading => "heading",
            Self::Code => "code",
            Self::Quote => "quote",
            Self::UnorderedList => "unordered_list",
            Self::OrderedList => "ordered_list",
        })
    }
}

/// A trimmed block of source lines and its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub text: &'a str,
    pub kind: BlockType,
}

impl<'a> Block<'a> {
    /// Classify a trimmed block.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            kind: classify(text),
        }
    }
}

/// Split a document into blocks on blank lines (`\n\n`).
///
/// Every block is trimmed; blocks that end up empty are dropped.
pub fn segment(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Segment and classify a document in source order.
pub fn blocks(document: &str) -> Vec<Block<'_>> {
    segment(document).into_iter().map(Block::new).collect()
}

/// Classify a block. The first matching rule wins:
///
/// 1. heading: starts with 1-6 `#` and a space
/// 2. code: starts and ends with three backticks
/// 3. quote: every line starts with `>`
/// 4. unordered list: every line starts with `- `
/// 5. ordered list: line `i` starts with `{i + 1}. `
/// 6. paragraph
pub fn classify(block: &str) -> BlockType {
    if HEADING_RE.is_match(block) {
        return BlockType::Heading;
    }
    if block.starts_with(CODE_FENCE) && block.ends_with(CODE_FENCE) {
        return BlockType::Code;
    }

    let lines: Vec<&str> = block.lines().collect();
    if lines.iter().all(|line| line.starts_with('>')) {
        BlockType::Quote
    } else if lines.iter().all(|line| line.starts_with("- ")) {
        BlockType::UnorderedList
    } else if is_ordered_list(&lines) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}

/// Numbering must start at 1 and increase by exactly one per line.
fn is_ordered_list(lines: &[&str]) -> bool {
    lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
}
