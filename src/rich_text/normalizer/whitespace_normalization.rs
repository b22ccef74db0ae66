//! Whitespace and line-break normalization.
//!
//! For every node list outside `pre`/`textarea`:
//!
//! 1. adjacent text nodes are merged
//! 2. runs of `<br>` (separated by nothing but whitespace) longer than
//!    `max_consecutive_breaks` are cut to that length
//! 3. runs of ASCII whitespace inside text collapse to one space
//! 4. inline runs are trimmed where they meet a block boundary: the start
//!    and end of a block container and either side of a block child. The
//!    trim reaches into the first and last inline descendants, so
//!    `<p><em> x</em></p>` becomes `<p><em>x</em></p>`
//! 5. text nodes left empty are removed
//!
//! NBSP is content, not whitespace, and is never collapsed or trimmed.

use crate::config::RichTextConfig;
use crate::rich_text::dom::{Element, Node, coalesce_text};
use crate::utils::{PREFORMATTED_TAGS, is_block_tag, is_collapsible_whitespace, is_void_tag};

pub(super) fn normalize_whitespace(nodes: Vec<Node>, config: &RichTextConfig) -> Vec<Node> {
    let mut nodes = nodes;
    normalize_children(&mut nodes, false, true, config.max_consecutive_breaks());
    nodes
}

fn normalize_children(
    nodes: &mut Vec<Node>,
    preformatted: bool,
    block_container: bool,
    max_breaks: usize,
) {
    for node in nodes.iter_mut() {
        if let Node::Element(element) = node {
            let preformatted = preformatted || is_preformatted(element);
            let block = is_block_tag(&element.tag);
            normalize_children(&mut element.children, preformatted, block, max_breaks);
        }
    }

    coalesce_text(nodes);
    if preformatted {
        return;
    }

    cap_line_breaks(nodes, max_breaks);
    coalesce_text(nodes);
    for node in nodes.iter_mut() {
        if let Node::Text(text) = node {
            text.content = collapse_whitespace(&text.content);
        }
    }
    trim_block_boundaries(nodes, block_container);
    drop_empty_text(nodes);
}

fn is_preformatted(element: &Element) -> bool {
    PREFORMATTED_TAGS.contains(&element.tag.as_str())
}

/// Collapse each run of ASCII whitespace to a single space.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if is_collapsible_whitespace(c) {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Drop `<br>` elements beyond `max` in any run of breaks.
fn cap_line_breaks(nodes: &mut Vec<Node>, max: usize) {
    let mut run = 0;
    nodes.retain(|node| {
        if node.is_element("br") {
            run += 1;
            return run <= max;
        }
        if !node.is_whitespace_text() {
            run = 0;
        }
        true
    });
}

fn trim_block_boundaries(nodes: &mut [Node], block_container: bool) {
    let len = nodes.len();
    let mut start = 0;
    while start <= len {
        let mut end = start;
        while end < len && !nodes[end].is_block() {
            end += 1;
        }
        // A run that does not start the list follows a block child
        let leading = start > 0 || block_container;
        let trailing = end < len || block_container;
        let run = &mut nodes[start..end];
        if leading {
            trim_run_start(run);
        }
        if trailing {
            trim_run_end(run);
        }
        start = end + 1;
    }
}

/// Whether trimming continues into an inline element's children.
fn trims_into(element: &Element) -> bool {
    !is_void_tag(&element.tag) && !is_block_tag(&element.tag) && !is_preformatted(element)
}

/// Trim leading whitespace; returns true once visible content is reached.
fn trim_run_start(nodes: &mut [Node]) -> bool {
    for node in nodes {
        match node {
            Node::Text(text) => {
                let trimmed = text.content.trim_start_matches(is_collapsible_whitespace);
                if trimmed.len() != text.content.len() {
                    text.content = trimmed.to_string();
                }
                if !text.content.is_empty() {
                    return true;
                }
            }
            Node::Element(element) if trims_into(element) => {
                let reached = trim_run_start(&mut element.children);
                drop_empty_text(&mut element.children);
                if reached {
                    return true;
                }
            }
            Node::Element(_) => return true,
        }
    }
    false
}

/// Trim trailing whitespace; returns true once visible content is reached.
fn trim_run_end(nodes: &mut [Node]) -> bool {
    for node in nodes.iter_mut().rev() {
        match node {
            Node::Text(text) => {
                let trimmed = text.content.trim_end_matches(is_collapsible_whitespace);
                if trimmed.len() != text.content.len() {
                    text.content = trimmed.to_string();
                }
                if !text.content.is_empty() {
                    return true;
                }
            }
            Node::Element(element) if trims_into(element) => {
                let reached = trim_run_end(&mut element.children);
                drop_empty_text(&mut element.children);
                if reached {
                    return true;
                }
            }
            Node::Element(_) => return true,
        }
    }
    false
}

fn drop_empty_text(nodes: &mut Vec<Node>) {
    nodes.retain(|node| !matches!(node, Node::Text(text) if text.content.is_empty()));
}
