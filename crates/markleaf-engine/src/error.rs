use crate::text_span::SpanKind;

/// Failures raised while rendering a node tree to HTML.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("All leaf nodes must have a value")]
    MissingValue,
    #[error("All parent nodes must have a tag")]
    MissingTag,
    #[error("All parent nodes must have children nodes")]
    MissingChildren,
    #[error("Base node cannot be rendered; render a leaf or parent node instead")]
    UnimplementedBaseRender,
}

/// Failures raised while splitting raw text into spans.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    #[error("invalid markdown, {kind} section opened with `{delimiter}` is not closed")]
    UnclosedDelimiter { delimiter: String, kind: SpanKind },
    #[error("invalid markdown, {kind} section `{section}` not closed")]
    UnclosedSection { kind: SpanKind, section: String },
}

/// Failures raised while mapping spans onto nodes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdaptError {
    #[error("Unsupported span kind: {0}")]
    UnsupportedSpanKind(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    #[error(transparent)]
    Adapt(#[from] AdaptError),
}
