//! Font-size demotion.
//!
//! With the editor's block type set to "Normal", picking a size from the
//! size menu wraps the text in a `div`/`span` with one of the heading-like
//! `font-size` steps. Such an element is replaced by a plain `p` holding its
//! text. Headings are left alone: they already carry the semantics and
//! style stripping removes the size. Content the allow-list drops with its
//! element (`script`, `style`, `template`, ...) is left out of the text.

use super::allow_list::visible_text;
use crate::config::RichTextConfig;
use crate::rich_text::dom::{Element, Node};
use crate::utils::PROMOTABLE_TAGS;

pub(super) fn promote_font_sizes(nodes: Vec<Node>, config: &RichTextConfig) -> Vec<Node> {
    promote(nodes, false, config)
}

fn promote(nodes: Vec<Node>, in_heading: bool, config: &RichTextConfig) -> Vec<Node> {
    nodes
        .into_iter()
        .map(|node| match node {
            Node::Element(element) if !in_heading && is_pseudo_heading(&element, config) => {
                let text = visible_text(&element, config);
                let children = if text.is_empty() {
                    Vec::new()
                } else {
                    vec![Node::text(text)]
                };
                Node::Element(Element::new("p").with_children(children))
            }
            Node::Element(mut element) => {
                let inside = in_heading || element.is_heading();
                let children = element.take_children();
                element.children = promote(children, inside, config);
                Node::Element(element)
            }
            text => text,
        })
        .collect()
}

fn is_pseudo_heading(element: &Element, config: &RichTextConfig) -> bool {
    PROMOTABLE_TAGS.contains(&element.tag.as_str())
        && element
            .style
            .get("font-size")
            .is_some_and(|size| config.is_promoted_font_size(size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rich_text::dom::Document;
    use crate::rich_text::parser::parse;
    use crate::rich_text::serializer::serialize;

    fn run(html: &str) -> String {
        let config = RichTextConfig::default();
        serialize(&Document::new(promote_font_sizes(parse(html).nodes, &config)))
    }

    #[test]
    fn test_span_with_scale_step_becomes_paragraph() {
        assert_eq!(
            run(r#"<div><span style="font-size:1.875em;">Heading-looking text</span></div>"#),
            "<div><p>Heading-looking text</p></div>"
        );
    }

    #[test]
    fn test_every_default_step_is_promoted() {
        for size in ["1.875em", "1.5em", "1.25em", "1.125em", "1.0625em"] {
            let html = format!(r#"<span style="font-size: {size}">x</span>"#);
            assert_eq!(run(&html), "<p>x</p>", "size {size}");
        }
    }

    #[test]
    fn test_other_sizes_untouched() {
        let html = r#"<span style="font-size: 2em;">x</span><div style="font-size: 18px;">y</div>"#;
        assert_eq!(run(html), html);
    }

    #[test]
    fn test_style_and_markup_discarded() {
        assert_eq!(
            run(r#"<div style="color: red; font-size: 1.5em"><strong>Big</strong> text</div>"#),
            "<p>Big text</p>"
        );
    }

    #[test]
    fn test_skipped_inside_headings() {
        let html = r#"<h2><span style="font-size: 1.5em;">Title</span></h2>"#;
        assert_eq!(run(html), html);
    }

    #[test]
    fn test_configured_steps_replace_defaults() -> crate::config::ConfigResult<()> {
        let config = RichTextConfig::builder()
            .promoted_font_sizes(["2em"])
            .build()?;
        let doc = parse(r#"<span style="font-size: 2em">a</span><span style="font-size: 1.5em">b</span>"#);
        let html = serialize(&Document::new(promote_font_sizes(doc.nodes, &config)));
        assert_eq!(html, r#"<p>a</p><span style="font-size: 1.5em;">b</span>"#);
        Ok(())
    }

    #[test]
    fn test_dropped_content_not_flattened_into_paragraph() {
        assert_eq!(
            run(r#"<div style="font-size: 1.5em">Big<style>p { color: red }</style></div>"#),
            "<p>Big</p>"
        );
        assert_eq!(
            run(r#"<span style="font-size: 1.25em">a<template>secret</template>b</span>"#),
            "<p>ab</p>"
        );
    }

    #[test]
    fn test_unterminated_script_not_flattened() {
        assert_eq!(
            run(r#"<div style="font-size: 1.875em"><script><p href="javascript:alert(1)">"#),
            "<p></p>"
        );
    }
}
