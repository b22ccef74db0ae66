//! Top-level paragraph wrapping.
//!
//! Fields whose renderers expect block-level HTML enable
//! `wrap_plain_text`: every run of consecutive top-level inline nodes is
//! wrapped into one `p`. A run without content (stray breaks, whitespace)
//! is dropped rather than wrapped, since the paragraph would be pruned as
//! empty on the next round anyway.

use super::empty_pruning::has_content;
use crate::config::RichTextConfig;
use crate::rich_text::dom::{Element, Node};

pub(super) fn wrap_inline_runs(nodes: Vec<Node>, config: &RichTextConfig) -> Vec<Node> {
    if !config.wrap_plain_text() || !config.allows_tag("p") {
        return nodes;
    }

    let mut out = Vec::with_capacity(nodes.len());
    let mut run: Vec<Node> = Vec::new();
    for node in nodes {
        if node.is_block() {
            flush_run(&mut run, &mut out, config);
            out.push(node);
        } else {
            run.push(node);
        }
    }
    flush_run(&mut run, &mut out, config);
    out
}

fn flush_run(run: &mut Vec<Node>, out: &mut Vec<Node>, config: &RichTextConfig) {
    if run.is_empty() {
        return;
    }
    let children = std::mem::take(run);
    if has_content(&children, config) {
        out.push(Element::new("p").with_children(children).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rich_text::dom::Document;
    use crate::rich_text::parser::parse;
    use crate::rich_text::serializer::serialize;

    fn run(html: &str) -> String {
        let config = RichTextConfig::service_description();
        serialize(&Document::new(wrap_inline_runs(parse(html).nodes, &config)))
    }

    #[test]
    fn test_plain_text_wrapped() {
        assert_eq!(run("hello"), "<p>hello</p>");
    }

    #[test]
    fn test_inline_runs_between_blocks_wrapped() {
        assert_eq!(
            run("a <em>b</em><h2>T</h2>c<br>d<ul><li>x</li></ul>"),
            "<p>a <em>b</em></p><h2>T</h2><p>c<br>d</p><ul><li>x</li></ul>"
        );
    }

    #[test]
    fn test_runs_without_content_dropped() {
        assert_eq!(run("<br><br><p>x</p>\u{a0}"), "<p>x</p>");
    }

    #[test]
    fn test_disabled_by_default() {
        let config = RichTextConfig::default();
        let doc = parse("hello <em>x</em>");
        let html = serialize(&Document::new(wrap_inline_runs(doc.nodes, &config)));
        assert_eq!(html, "hello <em>x</em>");
    }
}
