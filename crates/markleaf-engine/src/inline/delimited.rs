use crate::{error::TokenizeError, text_span::TextSpan};

use super::kinds::Delimiter;

/// Splits every plain span on `delimiter`, turning the enclosed runs into
/// spans of `delimiter.kind`.
///
/// Parts alternate plain / styled / plain, so a plain span must split into an
/// odd number of parts; an even count means a marker was opened and never
/// closed. Empty parts are dropped. Non-plain spans pass through untouched.
pub fn split_spans_delimiter(
    spans: Vec<TextSpan>,
    delimiter: Delimiter,
) -> Result<Vec<TextSpan>, TokenizeError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let parts: Vec<&str> = span.text().split(delimiter.marker).collect();
        if parts.len() % 2 == 0 {
            return Err(TokenizeError::UnclosedDelimiter {
                delimiter: delimiter.marker.to_string(),
                kind: delimiter.kind,
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TextSpan::plain(part));
            } else {
                out.push(TextSpan::new(part, delimiter.kind, None));
            }
        }
    }

    Ok(out)
}
