//! Markdown to HTML node tree conversion for quire.
//!
//! The conversion runs strictly forward through these stages:
//!
//! 1. [`segment`]: split the document into trimmed blocks on blank lines
//! 2. [`classify`]: assign each block a [`BlockType`]
//! 3. [`lex`]: split block text into typed [`TextSpan`]s
//! 4. [`assemble`]: build the [`HtmlNode`] tree from classified blocks
//!
//! Every stage is a pure function of its input. Only a small, fixed syntax is
//! supported: headings, fenced code, single-level quotes, flat lists, and
//! inline code, bold (`**`), italic (`_`), links and images.
//!
//! # Example
//!
//! ```
//! use quire_markdown::{document_to_html, extract_title};
//!
//! let markdown = "# Hello\n\nSome **bold** text";
//! assert_eq!(
//!     document_to_html(markdown)?,
//!     "<div><h1>Hello</h1><p>Some <b>bold</b> text</p></div>"
//! );
//! assert_eq!(extract_title(markdown)?, "Hello");
//! # Ok::<(), quire_markdown::MarkdownError>(())
//! ```
//!
//! [`HtmlNode`]: quire_html::HtmlNode

mod block;
mod document;
mod error;
pub mod inline;
mod span;
mod title;

pub use block::{Block, BlockType, blocks, classify, segment};
pub use document::{assemble, document_to_html, text_to_children};
pub use error::MarkdownError;
pub use inline::lex;
pub use span::{SpanKind, TextSpan};
pub use title::extract_title;
