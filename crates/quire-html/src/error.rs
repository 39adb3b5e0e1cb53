//! Node construction errors.

/// Error returned when a node violates a structural invariant.
///
/// Raised at construction time only; a successfully built tree always renders.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    /// Element built with an empty tag name.
    #[error("element tag cannot be empty")]
    EmptyTag,
    /// Parent element built without children.
    #[error("<{tag}> must have at least one child")]
    NoChildren {
        /// Tag of the rejected parent.
        tag: String,
    },
    /// Leaf built without content where content is required.
    #[error("{} requires content", describe(.tag.as_deref()))]
    MissingContent {
        /// Tag of the rejected leaf, `None` for raw text.
        tag: Option<String>,
    },
}

fn describe(tag: Option<&str>) -> String {
    match tag {
        Some(tag) => format!("<{tag}>"),
        None => "text node".to_owned(),
    }
}
