use std::sync::OnceLock;

use regex::Regex;

use crate::{
    error::TokenizeError,
    text_span::{SpanKind, TextSpan},
};

use super::kinds::Bracketed;

fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| Regex::new(Bracketed::IMAGE_PATTERN).expect("Invalid image regex"))
}

fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| Regex::new(Bracketed::LINK_PATTERN).expect("Invalid link regex"))
}

/// All `![alt](url)` occurrences in `text`, left to right, as `(alt, url)`.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    image_regex()
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// All `[text](url)` occurrences in `text` that are not image syntax, left to
/// right, as `(text, url)`.
///
/// A candidate whose `[` directly follows `!` is rejected and the search
/// resumes one character later, so a link nested after a rejected image
/// opener is still found.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    let re = link_regex();
    let mut links = Vec::new();
    let mut pos = 0;

    while let Some(caps) = re.captures_at(text, pos) {
        let Some(whole) = caps.get(0) else { break };
        if text[..whole.start()].ends_with(Bracketed::IMAGE_BANG) {
            // `[` is one byte, so the next char boundary is start + 1.
            pos = whole.start() + 1;
            continue;
        }
        links.push((caps[1].to_string(), caps[2].to_string()));
        pos = whole.end();
    }

    links
}

/// Replaces image markup in plain spans with [`SpanKind::Image`] spans.
pub fn split_spans_image(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, TokenizeError> {
    split_spans_bracketed(
        spans,
        SpanKind::Image,
        extract_markdown_images,
        Bracketed::image_markup,
    )
}

/// Replaces link markup in plain spans with [`SpanKind::Link`] spans.
pub fn split_spans_link(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, TokenizeError> {
    split_spans_bracketed(
        spans,
        SpanKind::Link,
        extract_markdown_links,
        Bracketed::link_markup,
    )
}

fn split_spans_bracketed(
    spans: Vec<TextSpan>,
    kind: SpanKind,
    extract: fn(&str) -> Vec<(String, String)>,
    markup: fn(&str, &str) -> String,
) -> Result<Vec<TextSpan>, TokenizeError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let matches = extract(span.text());
        if matches.is_empty() {
            out.push(span);
            continue;
        }

        let mut rest = span.text();
        for (text, url) in matches {
            let section = markup(&text, &url);
            // Only reachable when `extract` reports markup absent from `rest`.
            let Some((before, after)) = rest.split_once(section.as_str()) else {
                return Err(TokenizeError::UnclosedSection { kind, section });
            };
            if !before.is_empty() {
                out.push(TextSpan::plain(before));
            }
            out.push(TextSpan::new(text, kind, Some(url)));
            rest = after;
        }

        if !rest.is_empty() {
            out.push(TextSpan::plain(rest));
        }
    }

    Ok(out)
}
