//! Markdown conversion errors.

use quire_html::NodeError;

use crate::span::SpanKind;

/// Error returned by markdown conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    /// Building the node tree violated a node invariant.
    #[error(transparent)]
    Node(#[from] NodeError),
    /// A span does not satisfy its kind's contract.
    #[error("invalid {kind} span: {reason}")]
    InvalidSpan {
        kind: SpanKind,
        reason: &'static str,
    },
    /// Title extraction found no `# ` heading line.
    #[error("no top-level heading found")]
    NoHeadingFound,
}
