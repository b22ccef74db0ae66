//! Empty-node pruning.
//!
//! Bottom-up, so removing an inner empty node is seen by its parent in the
//! same sweep and no second sweep is needed. An element is empty when it
//! has no visible text (NBSP, zero-width space and BOM count as whitespace)
//! and no content-bearing descendant such as an image or a rule. Line breaks
//! are preserved themselves but do not keep a block alive.
//!
//! Empty blocks are removed with everything in them. Empty inline elements
//! are unwrapped instead, so `a<em> </em>b` keeps its space and a lone
//! `<span><br></span>` keeps its break.

use crate::config::RichTextConfig;
use crate::rich_text::dom::{Element, Node, is_blank, rewrite_bottom_up};
use crate::utils::is_block_tag;

pub(super) fn prune_empty(nodes: Vec<Node>, config: &RichTextConfig) -> Vec<Node> {
    rewrite_bottom_up(nodes, &mut |mut element| {
        if config.preserves_when_empty(&element.tag) || has_content(&element.children, config) {
            vec![Node::Element(element)]
        } else if is_block_tag(&element.tag) {
            Vec::new()
        } else {
            element.take_children()
        }
    })
}

/// Whether any node holds visible text or a content-bearing element.
pub(crate) fn has_content(nodes: &[Node], config: &RichTextConfig) -> bool {
    nodes.iter().any(|node| match node {
        Node::Text(text) => !is_blank(&text.content),
        Node::Element(element) => element_has_content(element, config),
    })
}

fn element_has_content(element: &Element, config: &RichTextConfig) -> bool {
    config.is_content_bearing(&element.tag) || has_content(&element.children, config)
}
