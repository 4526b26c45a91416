use markleaf_config::Config;
use markleaf_engine::{Error, Node, ParentNode, Render, text_to_nodes};

/// Splits on blank lines and joins each paragraph's lines with one space.
pub fn split_paragraphs(markdown: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in markdown.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
            continue;
        }
        current.push(line);
    }
    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    paragraphs
}

/// Builds the document tree: one paragraph element per paragraph, all inside
/// a single wrapper element.
pub fn build_document(markdown: &str, config: &Config) -> Result<ParentNode, Error> {
    let paragraphs = split_paragraphs(markdown)
        .iter()
        .map(|paragraph| -> Result<Node, Error> {
            let children = text_to_nodes(paragraph)?;
            Ok(Node::from(ParentNode::new(&config.paragraph_tag, children)))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    log::debug!("built {} paragraphs", paragraphs.len());
    Ok(ParentNode::new(&config.wrapper_tag, paragraphs))
}

pub fn render_document(markdown: &str, config: &Config) -> Result<String, Error> {
    Ok(build_document(markdown, config)?.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use markleaf_engine::{SpanKind, TokenizeError};
    use pretty_assertions::assert_eq;

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let md = "first line\ncontinues here\n\n\n  second  \n\nthird";
        assert_eq!(
            split_paragraphs(md),
            vec!["first line continues here", "second", "third"]
        );
    }

    #[test]
    fn blank_input_has_no_paragraphs() {
        assert!(split_paragraphs("\n   \n").is_empty());
    }

    #[test]
    fn renders_paragraphs_inside_wrapper() {
        let md = "This is **bolded** paragraph\ntext in a p\ntag here\n\nThis is another paragraph with _italic_ text and `code` here";
        assert_eq!(
            render_document(md, &Config::default()).unwrap(),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p>\
             <p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn uses_configured_tags() {
        let config = Config {
            wrapper_tag: "article".to_string(),
            paragraph_tag: "section".to_string(),
            output_dir: None,
        };
        assert_eq!(
            render_document("hi", &config).unwrap(),
            "<article><section>hi</section></article>"
        );
    }

    #[test]
    fn empty_document_renders_empty_wrapper() {
        assert_eq!(render_document("", &Config::default()).unwrap(), "<div></div>");
    }

    #[test]
    fn unbalanced_paragraph_fails_whole_document() {
        let err = render_document("fine\n\nbroken _italic", &Config::default()).unwrap_err();
        assert_eq!(
            err,
            Error::Tokenize(TokenizeError::UnclosedDelimiter {
                delimiter: "_".into(),
                kind: SpanKind::Italic,
            })
        );
    }
}
