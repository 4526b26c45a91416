//! Delimiter ownership for the inline dialect.
//!
//! Every literal marker lives here; the splitting stages never hardcode `**`,
//! `_` or `` ` ``.

use crate::text_span::SpanKind;

/// A literal marker that opens and closes a styled run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub marker: &'static str,
    pub kind: SpanKind,
}

impl Delimiter {
    pub const BOLD: Delimiter = Delimiter {
        marker: "**",
        kind: SpanKind::Bold,
    };
    pub const ITALIC: Delimiter = Delimiter {
        marker: "_",
        kind: SpanKind::Italic,
    };
    pub const CODE: Delimiter = Delimiter {
        marker: "`",
        kind: SpanKind::Code,
    };

    /// Splitting order. `**` must run before `_` so a two-character marker is
    /// never consumed as two single-character ones.
    pub const PIPELINE: [Delimiter; 3] = [Self::BOLD, Self::ITALIC, Self::CODE];
}

/// Patterns for the bracketed constructs. Alt and link text exclude `[`/`]`;
/// URLs exclude `(`/`)`.
pub struct Bracketed;

impl Bracketed {
    pub const IMAGE_PATTERN: &'static str = r"!\[([^\[\]]*)\]\(([^\(\)]*)\)";
    /// Matched only when the preceding character is not [`Bracketed::IMAGE_BANG`].
    pub const LINK_PATTERN: &'static str = r"\[([^\[\]]*)\]\(([^\(\)]*)\)";
    pub const IMAGE_BANG: char = '!';

    pub fn image_markup(alt: &str, url: &str) -> String {
        format!("![{alt}]({url})")
    }

    pub fn link_markup(text: &str, url: &str) -> String {
        format!("[{text}]({url})")
    }
}
