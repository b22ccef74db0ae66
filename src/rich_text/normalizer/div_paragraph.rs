//! Div-to-paragraph normalization.
//!
//! Editing surfaces emit `div` for what is semantically a paragraph. A
//! `div` holding only inline content becomes a `p`. A `div` with no
//! attributes that only wraps blocks adds nothing and is unwrapped, which
//! lets a demoted pseudo-heading surface as a top-level paragraph.
//! Anything else (mixed inline and block children) stays a `div`.

use crate::config::RichTextConfig;
use crate::rich_text::dom::{Node, rewrite_bottom_up};

pub(super) fn divs_to_paragraphs(nodes: Vec<Node>, config: &RichTextConfig) -> Vec<Node> {
    let paragraphs_allowed = config.allows_tag("p");
    rewrite_bottom_up(nodes, &mut |mut element| {
        if element.tag != "div" {
            return vec![Node::Element(element)];
        }
        if paragraphs_allowed && !element.children.iter().any(Node::is_block) {
            element.tag = "p".to_string();
            return vec![Node::Element(element)];
        }
        let wraps_blocks_only = element
            .children
            .iter()
            .all(|child| child.is_block() || child.is_whitespace_text());
        if element.is_bare() && wraps_blocks_only {
            return element.take_children();
        }
        vec![Node::Element(element)]
    })
}
