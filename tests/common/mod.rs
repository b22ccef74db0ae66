//! Test utilities and invariant checkers for the normalizer test suite

use rich_text_normalizer::utils::{is_blank_char, is_heading_tag};
use rich_text_normalizer::{Document, Element, Node, RichTextConfig, parse};
use tracing_subscriber::EnvFilter;

/// Install a test subscriber honouring `RUST_LOG`; repeated calls are no-ops
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Every element in the document, depth-first
#[allow(dead_code)]
pub fn all_elements(document: &Document) -> Vec<&Element> {
    fn walk<'a>(nodes: &'a [Node], out: &mut Vec<&'a Element>) {
        for node in nodes {
            if let Node::Element(element) = node {
                out.push(element);
                walk(&element.children, out);
            }
        }
    }
    let mut out = Vec::new();
    walk(&document.nodes, &mut out);
    out
}

/// Headings that contain another heading anywhere below them
#[allow(dead_code)]
pub fn nested_headings(html: &str) -> Vec<String> {
    all_elements(&parse(html))
        .into_iter()
        .filter(|element| element.is_heading() && element.contains_heading())
        .map(|element| element.tag.clone())
        .collect()
}

/// `p`, `div` and heading elements with no visible text and no content-bearing descendant
#[allow(dead_code)]
pub fn empty_blocks(html: &str, config: &RichTextConfig) -> Vec<String> {
    fn has_content_element(element: &Element, config: &RichTextConfig) -> bool {
        element.children.iter().any(|child| {
            child.as_element().is_some_and(|inner| {
                config.is_content_bearing(&inner.tag) || has_content_element(inner, config)
            })
        })
    }

    all_elements(&parse(html))
        .into_iter()
        .filter(|element| element.tag == "p" || element.tag == "div" || is_heading_tag(&element.tag))
        .filter(|element| {
            element.text_content().chars().all(is_blank_char)
                && !has_content_element(element, config)
        })
        .map(|element| element.tag.clone())
        .collect()
}

/// Tags present in the output that the configuration does not allow
#[allow(dead_code)]
pub fn disallowed_tags(html: &str, config: &RichTextConfig) -> Vec<String> {
    all_elements(&parse(html))
        .into_iter()
        .filter(|element| !config.allows_tag(&element.tag))
        .map(|element| element.tag.clone())
        .collect()
}

/// `property: value` pairs that are not allowed or restate inherited values
#[allow(dead_code)]
pub fn disallowed_declarations(html: &str, config: &RichTextConfig) -> Vec<String> {
    all_elements(&parse(html))
        .into_iter()
        .flat_map(|element| element.style.iter())
        .filter(|declaration| {
            !config.allows_style_property(&declaration.property)
                || declaration.is_noop()
                || declaration.is_unsafe()
        })
        .map(|declaration| format!("{}: {}", declaration.property, declaration.value))
        .collect()
}

/// Editor output the way a WYSIWYG surface produces it after a few edits
#[allow(dead_code)]
pub fn create_editor_html() -> String {
    r#"<div><span style="font-size: 1.875em;">Our services</span></div>
<div><br></div>
<h2><h2>What we do</h2></h2>
<div>We build <b><b>fast</b></b> sites&nbsp;and <span style="font-weight: normal; color: inherit;">apps</span>.</div>
<p>&nbsp;</p>
<p><span style="color: rgb(51, 51, 51); font-family: Arial;">Contact</span> us at <a href="mailto:hi@example.test" onclick="track()">hi@example.test</a></p>
<br><br><br><br>
<script>alert('x')</script>"#
        .to_string()
}
