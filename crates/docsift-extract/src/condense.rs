//! Condensed text: what a reader would read, as one line of words.
//!
//! Text nodes are concatenated in document order, non-visible subtrees are
//! skipped, block-level boundaries become spaces and whitespace runs collapse
//! to a single space.

use ego_tree::iter::Edge;
use scraper::{ElementRef, Node};

/// Elements whose content is never shown as prose.
pub const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Elements that start a new line of text when rendered.
pub const BLOCK_ELEMENTS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "br",
    "caption",
    "dd",
    "details",
    "dialog",
    "div",
    "dl",
    "dt",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "li",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "summary",
    "table",
    "tbody",
    "td",
    "tfoot",
    "th",
    "thead",
    "tr",
    "ul",
];

/// Whether an element is a block-level boundary.
pub fn is_block(name: &str) -> bool {
    BLOCK_ELEMENTS.contains(&name)
}

/// Heading permalink injected by the theme, e.g. `<a aria-hidden="true">#</a>`.
pub fn is_decorative_anchor(element: ElementRef<'_>) -> bool {
    let el = element.value();
    el.name() == "a" && el.attr("aria-hidden") == Some("true")
}

/// Whether an element and everything below it is left out of the text.
pub fn is_hidden(element: ElementRef<'_>) -> bool {
    let el = element.value();
    SKIPPED_ELEMENTS.contains(&el.name())
        || el.attr("hidden").is_some()
        || is_decorative_anchor(element)
}

/// Condensed text of an element's subtree.
///
/// The walk is iterative, so nesting depth is bounded only by memory.
pub fn condensed_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    // Open elements inside a hidden subtree, the hidden root included.
    let mut skip_depth = 0usize;

    for edge in element.traverse() {
        match edge {
            Edge::Open(node) => {
                if let Node::Text(text) = node.value() {
                    if skip_depth == 0 {
                        raw.push_str(text);
                    }
                    continue;
                }
                let Some(child) = ElementRef::wrap(node) else {
                    continue;
                };
                if child.id() == element.id() {
                    continue;
                }
                if skip_depth > 0 || is_hidden(child) {
                    skip_depth += 1;
                } else if is_block(child.value().name()) {
                    raw.push(' ');
                }
            }
            Edge::Close(node) => {
                let Some(child) = ElementRef::wrap(node) else {
                    continue;
                };
                if child.id() == element.id() {
                    continue;
                }
                if skip_depth > 0 {
                    skip_depth -= 1;
                } else if is_block(child.value().name()) {
                    raw.push(' ');
                }
            }
        }
    }

    collapse_whitespace(&raw)
}

/// Collapse whitespace runs (including newlines) to single spaces and trim.
pub fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(word);
    }
    result
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;

    fn body_text(markup: &str) -> String {
        let html = Html::parse_fragment(markup);
        condensed_text(html.root_element())
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\t b  "), "a b");
        assert_eq!(collapse_whitespace("\n\n"), "");
        assert_eq!(collapse_whitespace("a\u{a0}b"), "a b");
    }

    #[test]
    fn test_block_boundaries_separate_words() {
        assert_eq!(body_text("<p>one</p><p>two</p>"), "one two");
        assert_eq!(body_text("<ul><li>a</li><li>b</li></ul>"), "a b");
        assert_eq!(body_text("line<br>break"), "line break");
    }

    #[test]
    fn test_inline_elements_do_not_split_words() {
        assert_eq!(body_text("<p>un<em>believ</em>able</p>"), "unbelievable");
        assert_eq!(body_text("<p>Use <code>cargo</code> now</p>"), "Use cargo now");
    }

    #[test]
    fn test_skips_non_visible_content() {
        assert_eq!(
            body_text("<p>a</p><script>var x = 1;</script><style>p{}</style><p>b</p>"),
            "a b"
        );
        assert_eq!(body_text("<noscript>enable js</noscript>kept"), "kept");
        assert_eq!(body_text("<div hidden>secret</div>shown"), "shown");
    }

    #[test]
    fn test_skips_decorative_anchors() {
        assert_eq!(
            body_text(r##"<h2>Install<a aria-hidden="true" href="#install">#</a></h2>"##),
            "Install"
        );
        assert_eq!(
            body_text(r#"<a href="/x" aria-hidden="false">link</a>"#),
            "link"
        );
        assert_eq!(
            body_text(r#"<a href="/x" aria-hidden="TRUE">shouting</a>"#),
            "shouting"
        );
    }

    #[test]
    fn test_nested_hidden_subtrees() {
        assert_eq!(
            body_text("<div hidden><p>a<script>b</script></p><p>c</p></div><p>d</p>"),
            "d"
        );
        assert_eq!(
            body_text("<p>x<span><noscript><b>y</b></noscript>z</span></p>w"),
            "xz w"
        );
    }

    #[test]
    fn test_deeply_nested_markup() {
        let depth = 50_000;
        let markup = format!(
            "<main>{}deep{}</main>",
            "<span>".repeat(depth),
            "</span>".repeat(depth)
        );
        let html = Html::parse_document(&markup);
        let main = html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == "main")
            .expect("main element");

        assert_eq!(condensed_text(main), "deep");
    }

    #[test]
    fn test_decodes_entities() {
        assert_eq!(body_text("<p>a &amp; b &lt;c&gt;</p>"), "a & b <c>");
    }
}
