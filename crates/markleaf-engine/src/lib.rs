pub mod adapter;
pub mod error;
pub mod inline;
pub mod node;
pub mod text_span;

// Re-export key types for easier usage
pub use adapter::{span_to_node, spans_to_nodes};
pub use error::{AdaptError, Error, RenderError, TokenizeError};
pub use inline::text_to_spans;
pub use node::{HtmlNode, LeafNode, Node, ParentNode, Props, Render};
pub use text_span::{SpanKind, TextSpan};

/// Tokenizes `text` and adapts every span into a tree-ready [`Node`].
pub fn text_to_nodes(text: &str) -> Result<Vec<Node>, Error> {
    let spans = text_to_spans(text)?;
    let nodes = spans_to_nodes(&spans)?;
    Ok(nodes.into_iter().map(Node::from).collect())
}

/// Renders one inline run straight to HTML, without a wrapping element.
pub fn inline_to_html(text: &str) -> Result<String, Error> {
    let html = text_to_nodes(text)?
        .iter()
        .map(Node::render)
        .collect::<Result<String, _>>()?;
    Ok(html)
}
