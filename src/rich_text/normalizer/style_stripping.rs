//! Style declaration stripping.
//!
//! Keeps only declarations whose property is allowed, whose value changes
//! rendering and whose value cannot load resources or run script. A `span`
//! left without style or attributes has no structural purpose and is
//! replaced by its children.

use crate::config::RichTextConfig;
use crate::rich_text::dom::{Node, rewrite_bottom_up};

pub(super) fn strip_styles(nodes: Vec<Node>, config: &RichTextConfig) -> Vec<Node> {
    rewrite_bottom_up(nodes, &mut |mut element| {
        element.style.retain(|declaration| {
            config.allows_style_property(&declaration.property)
                && !declaration.is_noop()
                && !declaration.is_unsafe()
        });
        if element.tag == "span" && element.is_bare() {
            element.take_children()
        } else {
            vec![Node::Element(element)]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rich_text::dom::Document;
    use crate::rich_text::parser::parse;
    use crate::rich_text::serializer::serialize;

    fn run(html: &str) -> String {
        let config = RichTextConfig::default();
        serialize(&Document::new(strip_styles(parse(html).nodes, &config)))
    }

    #[test]
    fn test_noop_only_span_is_unwrapped() {
        assert_eq!(
            run(r#"<span style="font-weight: normal; color: inherit;">plain</span>"#),
            "plain"
        );
    }

    #[test]
    fn test_disallowed_properties_dropped() {
        assert_eq!(
            run(r#"<p style="font-family: Arial; font-size: 14px; color: #333">x</p>"#),
            r#"<p style="color: #333;">x</p>"#
        );
    }

    #[test]
    fn test_span_with_retained_style_kept() {
        assert_eq!(
            run(r#"<span style="font-weight: bold; font-size: 1em">b</span>"#),
            r#"<span style="font-weight: bold;">b</span>"#
        );
    }

    #[test]
    fn test_unsafe_values_dropped() {
        assert_eq!(
            run(r#"<p style="background-color: url(https://x.test/t.png); color: red">x</p>"#),
            r#"<p style="color: red;">x</p>"#
        );
    }

    #[test]
    fn test_span_with_other_attributes_kept() {
        assert_eq!(
            run(r#"<span lang="fr" style="color: inherit">oui</span>"#),
            r#"<span lang="fr">oui</span>"#
        );
    }

    #[test]
    fn test_nested_bare_spans_unwrap_completely() {
        assert_eq!(
            run(r#"<p><span><span style="font-size: 12px">a</span> b</span></p>"#),
            "<p>a b</p>"
        );
    }
}
