//! Document tree for rich-text content.
//!
//! A `Document` is a forest: editor content is a sequence of sibling blocks,
//! not a single rooted element. Trees are built fresh for every call and are
//! never shared.

use std::collections::BTreeMap;

use super::style::StyleSet;
use crate::utils::{
    is_blank_char, is_block_tag, is_collapsible_whitespace, is_heading_tag, is_void_tag,
};

/// Attributes other than `style`, kept in canonical (lexicographic) order.
pub type Attributes = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(Text),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Attributes,
    /// Parsed `style` attribute; empty means no `style` attribute.
    pub style: StyleSet,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(Text {
            content: content.into(),
        })
    }

    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(&text.content),
            Node::Element(_) => None,
        }
    }

    #[must_use]
    pub fn is_element(&self, tag: &str) -> bool {
        self.as_element().is_some_and(|element| element.tag == tag)
    }

    #[must_use]
    pub fn is_block(&self) -> bool {
        self.as_element()
            .is_some_and(|element| is_block_tag(&element.tag))
    }

    /// Text node made only of collapsible (ASCII) whitespace, or empty
    #[must_use]
    pub fn is_whitespace_text(&self) -> bool {
        self.as_text()
            .is_some_and(|text| text.chars().all(is_collapsible_whitespace))
    }

    /// Concatenated text of this node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        self.collect_text_where(out, &|_| false);
    }

    fn collect_text_where(&self, out: &mut String, skip: &dyn Fn(&str) -> bool) {
        match self {
            Node::Text(text) => out.push_str(&text.content),
            Node::Element(element) if skip(&element.tag) => {}
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text_where(out, skip);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::new(),
            style: StyleSet::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleSet) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn is_heading(&self) -> bool {
        is_heading_tag(&self.tag)
    }

    /// Carries neither attributes nor style declarations
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.attributes.is_empty() && self.style.is_empty()
    }

    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Like `text_content`, leaving out descendants whose tag `skip` matches.
    #[must_use]
    pub fn text_content_without(&self, skip: &dyn Fn(&str) -> bool) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text_where(&mut out, skip);
        }
        out
    }

    /// Whether any descendant is a heading element.
    #[must_use]
    pub fn contains_heading(&self) -> bool {
        self.children.iter().any(|child| {
            child
                .as_element()
                .is_some_and(|element| element.is_heading() || element.contains_heading())
        })
    }

    /// Take ownership of the children, leaving the element empty.
    pub fn take_children(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
    }

    /// Fold another element's attributes and style into this one.
    ///
    /// Values already present here win.
    pub fn absorb_attributes(&mut self, other: &Element) {
        for (name, value) in &other.attributes {
            self.attributes
                .entry(name.clone())
                .or_insert_with(|| value.clone());
        }
        self.style.merge_missing(&other.style);
    }
}

impl Document {
    #[must_use]
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Deepest element nesting level (a top-level element is depth 1).
    #[must_use]
    pub fn depth(&self) -> usize {
        fn depth_of(nodes: &[Node]) -> usize {
            nodes
                .iter()
                .filter_map(Node::as_element)
                .map(|element| 1 + depth_of(&element.children))
                .max()
                .unwrap_or(0)
        }
        depth_of(&self.nodes)
    }

    /// Unwrap every element nested deeper than `max_depth`.
    ///
    /// Mirrors what the parser does with over-deep start tags, so a clamped
    /// tree re-parses to itself.
    #[must_use]
    pub fn clamp_depth(self, max_depth: usize) -> Self {
        fn clamp(nodes: Vec<Node>, depth: usize, max_depth: usize) -> Vec<Node> {
            let mut out = Vec::with_capacity(nodes.len());
            for node in nodes {
                match node {
                    // Void elements never open a level, the parser keeps them anywhere
                    Node::Element(mut element)
                        if depth > max_depth && !is_void_tag(&element.tag) =>
                    {
                        let children = element.take_children();
                        out.extend(clamp(children, depth, max_depth));
                    }
                    Node::Element(mut element) => {
                        let children = element.take_children();
                        element.children = clamp(children, depth + 1, max_depth);
                        out.push(Node::Element(element));
                    }
                    text => out.push(text),
                }
            }
            coalesce_text(&mut out);
            out
        }
        Self::new(clamp(self.nodes, 1, max_depth))
    }
}

/// Rebuild a node list bottom-up.
///
/// Children are rewritten before their parent is handed to `rewrite`, which
/// returns the nodes that replace the element (itself, its children when
/// unwrapping, or nothing when removing).
pub(crate) fn rewrite_bottom_up<F>(nodes: Vec<Node>, rewrite: &mut F) -> Vec<Node>
where
    F: FnMut(Element) -> Vec<Node>,
{
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            Node::Element(mut element) => {
                let children = element.take_children();
                element.children = rewrite_bottom_up(children, rewrite);
                out.extend(rewrite(element));
            }
            text => out.push(text),
        }
    }
    out
}

/// Merge adjacent text nodes and drop empty ones.
pub(crate) fn coalesce_text(nodes: &mut Vec<Node>) {
    let mut merged: Vec<Node> = Vec::with_capacity(nodes.len());
    for node in nodes.drain(..) {
        match node {
            Node::Text(text) if text.content.is_empty() => {}
            Node::Text(text) => {
                if let Some(Node::Text(previous)) = merged.last_mut() {
                    previous.content.push_str(&text.content);
                } else {
                    merged.push(Node::Text(text));
                }
            }
            element => merged.push(element),
        }
    }
    *nodes = merged;
}

/// Whether text holds nothing but whitespace-like characters
pub(crate) fn is_blank(text: &str) -> bool {
    text.chars().all(is_blank_char)
}
