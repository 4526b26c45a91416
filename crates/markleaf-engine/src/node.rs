//! # Node Model
//!
//! Tagged HTML elements that render themselves to text.
//!
//! - **`LeafNode`**: a tag (optional), a value and props. With no tag the value
//!   is emitted verbatim, which is how plain text reaches the output.
//! - **`ParentNode`**: a tag, props and owned children rendered in order.
//! - **`Node`**: the sum of the two; the only shape a tree is built from.
//! - **`HtmlNode`**: the bare shared contract. It carries every field but
//!   refuses to render.
//!
//! Rendering never escapes anything: values and attribute values pass through
//! as given. Trees are acyclic by construction, so recursion depth equals tree
//! depth and no cycle guard exists.

use std::fmt::{self, Write};

use crate::error::RenderError;

/// Insertion-ordered attribute map.
///
/// Attribute order is observable in the rendered HTML, so keys keep the order
/// they were first inserted in. Re-inserting a key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props(Vec<(String, String)>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders every pair as ` key="value"` in insertion order.
    pub fn to_html(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| format!(" {key}=\"{value}\""))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (key, value) in iter {
            props.insert(key, value);
        }
        props
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Props {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl fmt::Display for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{key}': '{value}'")?;
        }
        f.write_char('}')
    }
}

/// Shared rendering contract for every node shape.
pub trait Render {
    fn render(&self) -> Result<String, RenderError>;

    fn props(&self) -> Option<&Props>;

    /// Attribute text for the opening tag; empty when there are no props.
    fn render_attributes(&self) -> String {
        self.props().map(Props::to_html).unwrap_or_default()
    }
}

fn wrap(tag: &str, attributes: &str, inner: &str) -> String {
    format!("<{tag}{attributes}>{inner}</{tag}>")
}

/// The bare node contract with every field a node may hold.
///
/// Useful for exercising attribute rendering in isolation; it never renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub children: Option<Vec<Node>>,
    pub props: Option<Props>,
}

impl Render for HtmlNode {
    fn render(&self) -> Result<String, RenderError> {
        Err(RenderError::UnimplementedBaseRender)
    }

    fn props(&self) -> Option<&Props> {
        self.props.as_ref()
    }
}

/// A node with a direct value and no children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    /// Required for rendering; checked when [`Render::render`] runs.
    pub value: Option<String>,
    pub props: Option<Props>,
}

impl LeafNode {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            props: None,
        }
    }

    /// A tagless leaf whose value renders verbatim.
    pub fn raw(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            props: None,
        }
    }

    pub fn with_props(mut self, props: impl Into<Props>) -> Self {
        self.props = Some(props.into());
        self
    }
}

impl Render for LeafNode {
    fn render(&self) -> Result<String, RenderError> {
        let value = self.value.as_deref().ok_or(RenderError::MissingValue)?;
        match self.tag.as_deref() {
            None => Ok(value.to_string()),
            Some(tag) => Ok(wrap(tag, &self.render_attributes(), value)),
        }
    }

    fn props(&self) -> Option<&Props> {
        self.props.as_ref()
    }
}

/// A node whose content is the concatenated rendering of its children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    /// `Some(vec![])` is a valid empty element; `None` fails to render.
    pub children: Option<Vec<Node>>,
    pub props: Option<Props>,
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            tag: Some(tag.into()),
            children: Some(children),
            props: None,
        }
    }

    pub fn with_props(mut self, props: impl Into<Props>) -> Self {
        self.props = Some(props.into());
        self
    }
}

impl Render for ParentNode {
    fn render(&self) -> Result<String, RenderError> {
        let tag = self.tag.as_deref().ok_or(RenderError::MissingTag)?;
        let children = self
            .children
            .as_deref()
            .ok_or(RenderError::MissingChildren)?;

        let inner = children
            .iter()
            .map(Node::render)
            .collect::<Result<String, _>>()?;
        Ok(wrap(tag, &self.render_attributes(), &inner))
    }

    fn props(&self) -> Option<&Props> {
        self.props.as_ref()
    }
}

/// A renderable tree node: either a leaf or a parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl Render for Node {
    fn render(&self) -> Result<String, RenderError> {
        match self {
            Node::Leaf(leaf) => leaf.render(),
            Node::Parent(parent) => parent.render(),
        }
    }

    fn props(&self) -> Option<&Props> {
        match self {
            Node::Leaf(leaf) => leaf.props(),
            Node::Parent(parent) => parent.props(),
        }
    }
}

impl From<LeafNode> for Node {
    fn from(leaf: LeafNode) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<ParentNode> for Node {
    fn from(parent: ParentNode) -> Self {
        Node::Parent(parent)
    }
}

struct OrNone<'a, T>(Option<&'a T>);

impl<T: fmt::Display> fmt::Display for OrNone<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => fmt::Display::fmt(v, f),
            None => f.write_str("None"),
        }
    }
}

struct ChildList<'a>(Option<&'a [Node]>);

impl fmt::Display for ChildList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(children) = self.0 else {
            return f.write_str("None");
        };
        f.write_char('[')?;
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{child}")?;
        }
        f.write_char(']')
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HtmlNode({}, {}, children: {}, {})",
            OrNone(self.tag.as_ref()),
            OrNone(self.value.as_ref()),
            ChildList(self.children.as_deref()),
            OrNone(self.props.as_ref())
        )
    }
}

impl fmt::Display for LeafNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LeafNode({}, {}, {})",
            OrNone(self.tag.as_ref()),
            OrNone(self.value.as_ref()),
            OrNone(self.props.as_ref())
        )
    }
}

impl fmt::Display for ParentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ParentNode({}, children: {}, {})",
            OrNone(self.tag.as_ref()),
            ChildList(self.children.as_deref()),
            OrNone(self.props.as_ref())
        )
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(leaf) => fmt::Display::fmt(leaf, f),
            Node::Parent(parent) => fmt::Display::fmt(parent, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn attributes_render_in_insertion_order() {
        let node = HtmlNode {
            tag: Some("a".into()),
            value: Some("i am a link".into()),
            props: Some(Props::from([
                ("href", "https://boot.dev"),
                ("target", "_blank"),
            ])),
            ..Default::default()
        };
        assert_eq!(
            node.render_attributes(),
            r#" href="https://boot.dev" target="_blank""#
        );
    }

    #[test]
    fn reinserted_key_keeps_its_position() {
        let mut props = Props::from([("href", "old"), ("target", "_blank")]);
        props.insert("href", "new");
        assert_eq!(props.to_html(), r#" href="new" target="_blank""#);
        assert_eq!(props.len(), 2);
        assert_eq!(props.get("href"), Some("new"));
    }

    #[test]
    fn absent_and_empty_props_render_nothing() {
        let bare = HtmlNode::default();
        let empty = HtmlNode {
            props: Some(Props::new()),
            ..Default::default()
        };
        assert_eq!(bare.render_attributes(), "");
        assert_eq!(empty.render_attributes(), "");
    }

    #[test]
    fn attribute_values_are_not_escaped() {
        let props = Props::from([("title", "a < b & \"c\"")]);
        assert_eq!(props.to_html(), r#" title="a < b & "c"""#);
    }

    #[test]
    fn base_node_holds_all_fields_but_refuses_to_render() {
        let link = Node::from(LeafNode::new("a", "link").with_props([("href", "https://boot.dev")]));
        let node = HtmlNode {
            tag: Some("div".into()),
            value: Some("I wish I could read".into()),
            children: Some(vec![link.clone()]),
            props: Some(Props::from([("class", "container")])),
        };
        assert_eq!(node.tag.as_deref(), Some("div"));
        assert_eq!(node.value.as_deref(), Some("I wish I could read"));
        assert_eq!(node.children, Some(vec![link]));
        assert_eq!(node.props, Some(Props::from([("class", "container")])));
        assert_eq!(node.render(), Err(RenderError::UnimplementedBaseRender));
    }

    #[test]
    fn leaf_renders_tag_with_value() {
        assert_eq!(
            LeafNode::new("p", "Hello, world!").render().unwrap(),
            "<p>Hello, world!</p>"
        );
    }

    #[test]
    fn leaf_renders_props() {
        let leaf = LeafNode::new("a", "Click me!").with_props([("href", "https://www.google.com")]);
        assert_eq!(
            leaf.render().unwrap(),
            r#"<a href="https://www.google.com">Click me!</a>"#
        );
    }

    #[test]
    fn tagless_leaf_passes_value_through() {
        let value = "plain <b>text</b> & more";
        assert_eq!(LeafNode::raw(value).render().unwrap(), value);
    }

    #[test]
    fn leaf_without_value_fails() {
        let leaf = LeafNode {
            tag: Some("p".into()),
            ..Default::default()
        };
        assert_eq!(leaf.render(), Err(RenderError::MissingValue));
    }

    #[test]
    fn empty_leaf_value_is_not_missing() {
        let leaf = LeafNode::new("img", "").with_props([("src", "u"), ("alt", "x")]);
        assert_eq!(leaf.render().unwrap(), r#"<img src="u" alt="x"></img>"#);
    }

    #[test]
    fn parent_wraps_child() {
        let parent = ParentNode::new("div", vec![LeafNode::new("span", "child").into()]);
        assert_eq!(parent.render().unwrap(), "<div><span>child</span></div>");
    }

    #[test]
    fn parent_renders_grandchildren() {
        let child = ParentNode::new("span", vec![LeafNode::new("b", "grandchild").into()]);
        let parent = ParentNode::new("div", vec![child.into()]);
        assert_eq!(
            parent.render().unwrap(),
            "<div><span><b>grandchild</b></span></div>"
        );
    }

    #[test]
    fn parent_concatenates_children_in_order() {
        let parent = ParentNode::new(
            "p",
            vec![
                LeafNode::new("b", "Bold text").into(),
                LeafNode::raw("Normal text").into(),
                LeafNode::new("i", "italic text").into(),
                LeafNode::raw("Normal text").into(),
            ],
        )
        .with_props([("class", "intro")]);
        insta::assert_snapshot!(
            parent.render().unwrap(),
            @r#"<p class="intro"><b>Bold text</b>Normal text<i>italic text</i>Normal text</p>"#
        );
    }

    #[test]
    fn parent_with_empty_children_renders_empty_element() {
        assert_eq!(ParentNode::new("div", vec![]).render().unwrap(), "<div></div>");
    }

    #[test]
    fn parent_without_children_fails() {
        let parent = ParentNode {
            tag: Some("div".into()),
            ..Default::default()
        };
        assert_eq!(parent.render(), Err(RenderError::MissingChildren));
    }

    #[test]
    fn parent_without_tag_fails_before_children_check() {
        assert_eq!(ParentNode::default().render(), Err(RenderError::MissingTag));
    }

    #[test]
    fn child_failure_aborts_whole_render() {
        let parent = ParentNode::new(
            "div",
            vec![
                LeafNode::raw("fine").into(),
                LeafNode::default().into(),
            ],
        );
        assert_eq!(parent.render(), Err(RenderError::MissingValue));
    }

    #[test]
    fn rendering_is_repeatable() {
        let parent = ParentNode::new("div", vec![LeafNode::raw("x").into()]);
        assert_eq!(parent.render(), parent.render());
    }

    #[test]
    fn display_shows_nested_structure() {
        let inner = LeafNode::new("a", "i am a link")
            .with_props([("href", "https://boot.dev"), ("target", "_blank")]);
        let outer = ParentNode::new("p", vec![inner.into()]);
        assert_eq!(
            outer.to_string(),
            "ParentNode(p, children: [LeafNode(a, i am a link, {'href': 'https://boot.dev', 'target': '_blank'})], None)"
        );
        assert_eq!(
            HtmlNode::default().to_string(),
            "HtmlNode(None, None, children: None, None)"
        );
    }
}
