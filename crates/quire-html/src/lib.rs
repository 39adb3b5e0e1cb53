//! Immutable HTML node tree with a string serializer.
//!
//! A document is a tree of [`HtmlNode`]s. Each node is either a
//! [`LeafNode`] (raw text or a self-contained element) or a [`ParentNode`]
//! (an element wrapping one or more children). Structural invariants are
//! checked when a node is constructed, so rendering never fails.
//!
//! # Example
//!
//! ```
//! use quire_html::{Attributes, HtmlNode, LeafNode, ParentNode};
//!
//! let link = LeafNode::element("a", "docs")?
//!     .with_attributes(Attributes::new().with("href", "/docs"));
//! let paragraph = ParentNode::new("p", vec![
//!     LeafNode::text("Read the ").into(),
//!     link.into(),
//! ])?;
//!
//! assert_eq!(
//!     HtmlNode::from(paragraph).render(),
//!     r#"<p>Read the <a href="/docs">docs</a></p>"#
//! );
//! # Ok::<(), quire_html::NodeError>(())
//! ```

mod attributes;
mod error;
mod node;

pub use attributes::Attributes;
pub use error::NodeError;
pub use node::{HtmlNode, LeafNode, ParentNode, SELF_CLOSING_TAGS, is_self_closing};
