//! Leaf and parent nodes and their HTML serialization.

use std::fmt;

use crate::attributes::Attributes;
use crate::error::NodeError;

/// Void elements rendered in `<tag/>` form. They never carry content.
pub const SELF_CLOSING_TAGS: &[&str] = &[
    "img", "br", "hr", "input", "meta", "link", "area", "base", "col", "embed", "source", "track",
    "wbr",
];

/// Whether `tag` is rendered as a self-closing element.
pub fn is_self_closing(tag: &str) -> bool {
    SELF_CLOSING_TAGS.contains(&tag)
}

/// A node of the render tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// Element tag, `None` for raw text.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf(leaf) => leaf.tag(),
            Self::Parent(parent) => Some(parent.tag()),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Self::Leaf(leaf) => leaf.attributes(),
            Self::Parent(parent) => parent.attributes(),
        }
    }

    /// Serialize the subtree to HTML.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Append the serialized subtree to `out`.
    pub fn render_into(&self, out: &mut String) {
        match self {
            Self::Leaf(leaf) => leaf.render_into(out),
            Self::Parent(parent) => parent.render_into(out),
        }
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        Self::Parent(parent)
    }
}

/// Raw text or an element without children.
///
/// Content is required unless the tag is self-closing, in which case any
/// content passed in is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    content: Option<String>,
    attributes: Attributes,
}

impl LeafNode {
    /// Build a leaf, enforcing the content rules.
    pub fn new(tag: Option<&str>, content: Option<&str>) -> Result<Self, NodeError> {
        let content = match tag {
            Some("") => return Err(NodeError::EmptyTag),
            Some(tag) if is_self_closing(tag) => None,
            _ => Some(content.ok_or_else(|| NodeError::MissingContent {
                tag: tag.map(ToOwned::to_owned),
            })?),
        };

        Ok(Self {
            tag: tag.map(ToOwned::to_owned),
            content: content.map(ToOwned::to_owned),
            attributes: Attributes::new(),
        })
    }

    /// Raw text, emitted verbatim.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: None,
            content: Some(content.into()),
            attributes: Attributes::new(),
        }
    }

    /// Element with content, e.g. `<b>content</b>`.
    pub fn element(tag: &str, content: &str) -> Result<Self, NodeError> {
        Self::new(Some(tag), Some(content))
    }

    /// Self-closing element, e.g. `<img/>`.
    ///
    /// Fails with [`NodeError::MissingContent`] if `tag` is not a void element.
    pub fn void(tag: &str) -> Result<Self, NodeError> {
        Self::new(Some(tag), None)
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn render_into(&self, out: &mut String) {
        let Some(tag) = self.tag.as_deref() else {
            out.push_str(self.content.as_deref().unwrap_or_default());
            return;
        };

        out.push('<');
        out.push_str(tag);
        self.attributes.write_to(out);
        if is_self_closing(tag) {
            out.push_str("/>");
            return;
        }
        out.push('>');
        out.push_str(self.content.as_deref().unwrap_or_default());
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

/// Element wrapping a non-empty, ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    tag: String,
    value: Option<String>,
    children: Vec<HtmlNode>,
    attributes: Attributes,
}

impl ParentNode {
    /// Build a parent element.
    ///
    /// Fails if `tag` is empty or `children` is empty.
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Result<Self, NodeError> {
        if tag.is_empty() {
            return Err(NodeError::EmptyTag);
        }
        if children.is_empty() {
            return Err(NodeError::NoChildren {
                tag: tag.to_owned(),
            });
        }

        Ok(Self {
            tag: tag.to_owned(),
            value: None,
            children,
            attributes: Attributes::new(),
        })
    }

    /// Text emitted right after the opening tag, before the children.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        self.attributes.write_to(out);
        out.push('>');
        if let Some(value) = &self.value {
            out.push_str(value);
        }
        for child in &self.children {
            child.render_into(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    static_assertions::assert_impl_all!(super::HtmlNode: Send, Sync);

    fn text(s: &str) -> HtmlNode {
        LeafNode::text(s).into()
    }

    fn element(tag: &str, content: &str) -> HtmlNode {
        LeafNode::element(tag, content).unwrap().into()
    }

    #[test]
    fn test_text_leaf_renders_verbatim() {
        assert_eq!(text("a < b & <em>raw</em>").render(), "a < b & <em>raw</em>");
    }

    #[test]
    fn test_element_leaf() {
        assert_eq!(element("p", "Hello").render(), "<p>Hello</p>");
    }

    #[test]
    fn test_element_leaf_with_attributes() {
        let link = LeafNode::element("a", "Click")
            .unwrap()
            .with_attributes(Attributes::new().with("href", "https://example.com"));
        assert_eq!(
            HtmlNode::from(link).render(),
            r#"<a href="https://example.com">Click</a>"#
        );
    }

    #[test]
    fn test_empty_content_is_allowed() {
        assert_eq!(element("code", "").render(), "<code></code>");
    }

    #[test]
    fn test_element_leaf_requires_content() {
        assert_eq!(
            LeafNode::new(Some("b"), None),
            Err(NodeError::MissingContent {
                tag: Some("b".to_owned())
            })
        );
    }

    #[test]
    fn test_text_leaf_requires_content() {
        assert_eq!(
            LeafNode::new(None, None),
            Err(NodeError::MissingContent { tag: None })
        );
    }

    #[test]
    fn test_leaf_rejects_empty_tag() {
        assert_eq!(LeafNode::new(Some(""), Some("x")), Err(NodeError::EmptyTag));
    }

    #[test]
    fn test_self_closing_needs_no_content() {
        let img = LeafNode::void("img")
            .unwrap()
            .with_attributes(Attributes::new().with("src", "/a.png").with("alt", "A"));
        assert_eq!(HtmlNode::from(img).render(), r#"<img src="/a.png" alt="A"/>"#);
    }

    #[test]
    fn test_self_closing_discards_content() {
        let br = LeafNode::element("br", "ignored").unwrap();
        assert_eq!(br.content(), None);
        assert_eq!(HtmlNode::from(br).render(), "<br/>");
    }

    #[test]
    fn test_void_rejects_normal_tag() {
        assert!(LeafNode::void("span").is_err());
    }

    #[test]
    fn test_every_self_closing_tag() {
        for tag in SELF_CLOSING_TAGS {
            let node = HtmlNode::from(LeafNode::void(tag).unwrap());
            assert_eq!(node.render(), format!("<{tag}/>"));
        }
    }

    #[test]
    fn test_parent_renders_children_in_order() {
        let node = ParentNode::new(
            "p",
            vec![
                element("b", "Bold text"),
                text("Normal text"),
                element("i", "italic text"),
                text("Normal text"),
            ],
        )
        .unwrap();
        assert_eq!(
            HtmlNode::from(node).render(),
            "<p><b>Bold text</b>Normal text<i>italic text</i>Normal text</p>"
        );
    }

    #[test]
    fn test_nested_parents() {
        let inner = ParentNode::new("span", vec![element("b", "grandchild")]).unwrap();
        let outer = ParentNode::new("div", vec![inner.into()]).unwrap();
        assert_eq!(
            HtmlNode::from(outer).render(),
            "<div><span><b>grandchild</b></span></div>"
        );
    }

    #[test]
    fn test_parent_value_precedes_children() {
        let node = ParentNode::new("div", vec![element("span", "child")])
            .unwrap()
            .with_value("lead")
            .with_attributes(Attributes::new().with("class", "box"));
        assert_eq!(
            HtmlNode::from(node).render(),
            r#"<div class="box">lead<span>child</span></div>"#
        );
    }

    #[test]
    fn test_parent_requires_children() {
        assert_eq!(
            ParentNode::new("ul", Vec::new()),
            Err(NodeError::NoChildren {
                tag: "ul".to_owned()
            })
        );
    }

    #[test]
    fn test_parent_requires_tag() {
        assert_eq!(
            ParentNode::new("", vec![text("x")]),
            Err(NodeError::EmptyTag)
        );
    }

    #[test]
    fn test_tag_accessor() {
        assert_eq!(text("x").tag(), None);
        assert_eq!(element("b", "x").tag(), Some("b"));
        let list = ParentNode::new("ol", vec![element("li", "x")]).unwrap();
        assert_eq!(HtmlNode::from(list).tag(), Some("ol"));
    }

    #[test]
    fn test_parent_accessors() {
        let children = vec![element("li", "one"), element("li", "two")];
        let list = ParentNode::new("ul", children.clone())
            .unwrap()
            .with_value("items")
            .with_attributes(Attributes::new().with("id", "nav"));

        assert_eq!(list.children(), children.as_slice());
        assert_eq!(list.value(), Some("items"));

        let node = HtmlNode::from(list);
        assert_eq!(node.attributes().get("id"), Some("nav"));
        assert!(text("x").attributes().is_empty());
    }

    #[test]
    fn test_render_is_repeatable() {
        let node: HtmlNode = ParentNode::new("div", vec![element("p", "x")]).unwrap().into();
        assert_eq!(node.render(), node.render());
        assert_eq!(node.to_string(), node.render());
    }
}
