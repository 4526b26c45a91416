use crate::{
    error::AdaptError,
    node::{LeafNode, Props},
    text_span::{SpanKind, TextSpan},
};

/// Maps one span onto the leaf that renders it.
///
/// | kind   | tag    | value     | props               |
/// |--------|--------|-----------|---------------------|
/// | Plain  | none   | text      | none                |
/// | Bold   | `b`    | text      | none                |
/// | Italic | `i`    | text      | none                |
/// | Code   | `code` | text      | none                |
/// | Link   | `a`    | text      | `href`              |
/// | Image  | `img`  | `""`      | `src`, `alt`        |
///
/// Link and image spans built without a URL fall outside the table and are
/// rejected.
pub fn span_to_node(span: &TextSpan) -> Result<LeafNode, AdaptError> {
    let text = span.text();
    let node = match span.kind() {
        SpanKind::Plain => LeafNode::raw(text),
        SpanKind::Bold => LeafNode::new("b", text),
        SpanKind::Italic => LeafNode::new("i", text),
        SpanKind::Code => LeafNode::new("code", text),
        SpanKind::Link => {
            let url = required_url(span)?;
            LeafNode::new("a", text).with_props([("href", url)])
        }
        SpanKind::Image => {
            let url = required_url(span)?;
            LeafNode::new("img", "").with_props(Props::from([("src", url), ("alt", text)]))
        }
    };
    Ok(node)
}

fn required_url(span: &TextSpan) -> Result<&str, AdaptError> {
    span.url()
        .ok_or_else(|| AdaptError::UnsupportedSpanKind(format!("{} without url", span.kind())))
}

/// Maps every span in order; the first failure aborts.
pub fn spans_to_nodes(spans: &[TextSpan]) -> Result<Vec<LeafNode>, AdaptError> {
    spans.iter().map(span_to_node).collect()
}
