//! Same-tag nesting merge.
//!
//! `p > p`, `h2 > h2`, `strong > strong` and friends collapse into the outer
//! element. An inner element that is the only child (surrounding whitespace
//! aside) is merged with its attributes: the outer values win and the inner
//! ones fill gaps. An inner element with siblings is merged only when it
//! carries no attributes, so a styled fragment inside a larger run keeps
//! its style.

use crate::rich_text::dom::{Element, Node, coalesce_text, rewrite_bottom_up};
use crate::utils::MERGEABLE_TAGS;

pub(super) fn merge_nested(nodes: Vec<Node>) -> Vec<Node> {
    rewrite_bottom_up(nodes, &mut |mut element| {
        if MERGEABLE_TAGS.contains(&element.tag.as_str()) {
            merge_same_tag_children(&mut element);
        }
        vec![Node::Element(element)]
    })
}

fn merge_same_tag_children(element: &mut Element) {
    let sole_child = sole_element_child(element);
    let children = element.take_children();
    let mut merged = Vec::with_capacity(children.len());
    for child in children {
        match child {
            Node::Element(mut inner)
                if inner.tag == element.tag && (sole_child || inner.is_bare()) =>
            {
                element.absorb_attributes(&inner);
                merged.extend(inner.take_children());
            }
            other => merged.push(other),
        }
    }
    coalesce_text(&mut merged);
    element.children = merged;
}

/// Whether the element has exactly one element child and only whitespace text besides.
fn sole_element_child(element: &Element) -> bool {
    let mut elements = 0;
    for child in &element.children {
        match child {
            Node::Element(_) => elements += 1,
            Node::Text(_) if child.is_whitespace_text() => {}
            Node::Text(_) => return false,
        }
    }
    elements == 1
}
