//! Canonical markup serializer.
//!
//! Output is byte-identical for identical trees: attributes are emitted in
//! lexicographic order with `style` re-assembled from its sorted declaration
//! set, text and attribute values escape the five reserved characters, NBSP
//! is written as `&nbsp;`, and void elements are written without a slash or
//! end tag (`<br>`).

use super::dom::{Document, Element, Node};
use crate::utils::is_void_tag;

/// Serialize a document to its canonical markup string.
#[must_use]
pub fn serialize(document: &Document) -> String {
    let mut output = String::new();
    for node in &document.nodes {
        write_node(node, &mut output);
    }
    output
}

fn write_node(node: &Node, output: &mut String) {
    match node {
        Node::Text(text) => escape_into(&text.content, output),
        Node::Element(element) => write_element(element, output),
    }
}

fn write_element(element: &Element, output: &mut String) {
    output.push('<');
    output.push_str(&element.tag);

    let style = (!element.style.is_empty()).then(|| element.style.to_css());
    let mut style_written = style.is_none();
    for (name, value) in &element.attributes {
        if !style_written && name.as_str() > "style" {
            write_attribute("style", style.as_deref().unwrap_or_default(), output);
            style_written = true;
        }
        write_attribute(name, value, output);
    }
    if !style_written && let Some(css) = &style {
        write_attribute("style", css, output);
    }
    output.push('>');

    if is_void_tag(&element.tag) {
        return;
    }

    for child in &element.children {
        write_node(child, output);
    }

    output.push_str("</");
    output.push_str(&element.tag);
    output.push('>');
}

fn write_attribute(name: &str, value: &str, output: &mut String) {
    output.push(' ');
    output.push_str(name);
    output.push_str("=\"");
    escape_into(value, output);
    output.push('"');
}

/// Escape reserved characters for both text and double-quoted attribute values
fn escape_into(text: &str, output: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            '\u{00A0}' => output.push_str("&nbsp;"),
            c => output.push(c),
        }
    }
}
