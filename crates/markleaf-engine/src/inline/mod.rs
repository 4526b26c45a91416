//! # Inline Tokenizing
//!
//! Turns one run of raw text into an ordered sequence of [`TextSpan`]s.
//!
//! ## Pipeline
//!
//! The stages run in a fixed order, each over the output of the previous one:
//!
//! 1. `**` → Bold
//! 2. `_` → Italic
//! 3. `` ` `` → Code
//! 4. `![alt](url)` → Image
//! 5. `[text](url)` → Link (never when preceded by `!`)
//!
//! Every stage rewrites plain spans only. Once a run is styled it is never
//! looked at again, so emphasis does not nest. Code is split after emphasis,
//! which means `**` or `_` between backticks still acts as a marker. There is
//! no escaping of markers.
//!
//! ## Modules
//!
//! - **`kinds`**: delimiter and bracket pattern constants
//! - **`delimited`**: balanced-marker splitting
//! - **`bracketed`**: image and link extraction

pub mod bracketed;
pub mod delimited;
pub mod kinds;

pub use bracketed::{extract_markdown_images, extract_markdown_links, split_spans_image, split_spans_link};
pub use delimited::split_spans_delimiter;
pub use kinds::Delimiter;

use crate::{error::TokenizeError, text_span::TextSpan};

/// Tokenizes `text` through the full inline pipeline.
///
/// Fails on the first unbalanced marker; there are no partial results.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>, TokenizeError> {
    let mut spans = vec![TextSpan::plain(text)];

    for delimiter in Delimiter::PIPELINE {
        spans = split_spans_delimiter(spans, delimiter)?;
        log::trace!("after `{}` split: {} spans", delimiter.marker, spans.len());
    }

    let spans = split_spans_link(split_spans_image(spans)?)?;
    log::debug!("tokenized {} bytes into {} spans", text.len(), spans.len());
    Ok(spans)
}
