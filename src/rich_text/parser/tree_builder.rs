//! Builds a `Document` from tokens with best-effort recovery.
//!
//! - Elements nest exactly as written; there are no implied end tags, so
//!   `<p><p>x</p></p>` yields a nested pair for the normalizer to merge.
//! - An end tag closes the nearest open element of the same name, auto-closing
//!   everything opened after it. An end tag with no open match is ignored.
//! - Elements still open at end of input are closed.
//! - Start tags beyond the depth limit are ignored (their content flattens
//!   into the deepest open element), together with their matching end tag.
//!
//! The builder keeps an explicit stack, so no input nesting can exhaust the
//! call stack here.

use std::collections::HashMap;

use super::tokenizer::Token;
use crate::rich_text::dom::{Document, Element, Node};
use crate::rich_text::style::StyleSet;
use crate::utils::is_void_tag;

pub(crate) struct TreeBuilder {
    roots: Vec<Node>,
    open: Vec<Element>,
    /// Start tags dropped by the depth limit and not yet closed, per name
    suppressed: HashMap<String, usize>,
    max_depth: usize,
    ignored_end_tags: usize,
    truncated_start_tags: usize,
}

impl TreeBuilder {
    pub(crate) fn new(max_depth: usize) -> Self {
        Self {
            roots: Vec::new(),
            open: Vec::new(),
            suppressed: HashMap::new(),
            max_depth,
            ignored_end_tags: 0,
            truncated_start_tags: 0,
        }
    }

    pub(crate) fn process(&mut self, token: Token) {
        match token {
            Token::Text(text) => self.append_text(text),
            Token::StartTag {
                name,
                attributes,
                self_closing,
            } => self.start_tag(name, attributes, self_closing),
            Token::EndTag { name } => self.end_tag(&name),
        }
    }

    pub(crate) fn finish(mut self) -> Document {
        self.close_to(0);
        if self.ignored_end_tags > 0 || self.truncated_start_tags > 0 {
            tracing::debug!(
                ignored_end_tags = self.ignored_end_tags,
                truncated_start_tags = self.truncated_start_tags,
                max_depth = self.max_depth,
                "Recovered from malformed rich-text markup"
            );
        }
        Document::new(self.roots)
    }

    fn children_mut(&mut self) -> &mut Vec<Node> {
        match self.open.last_mut() {
            Some(parent) => &mut parent.children,
            None => &mut self.roots,
        }
    }

    fn append_text(&mut self, text: String) {
        if text.is_empty() {
            return;
        }
        let children = self.children_mut();
        if let Some(Node::Text(previous)) = children.last_mut() {
            previous.content.push_str(&text);
        } else {
            children.push(Node::text(text));
        }
    }

    fn start_tag(&mut self, name: String, attributes: Vec<(String, String)>, self_closing: bool) {
        let element = build_element(name, attributes);

        if is_void_tag(&element.tag) || self_closing {
            self.children_mut().push(Node::Element(element));
        } else if self.open.len() >= self.max_depth {
            self.truncated_start_tags += 1;
            *self.suppressed.entry(element.tag).or_default() += 1;
        } else {
            self.open.push(element);
        }
    }

    fn end_tag(&mut self, name: &str) {
        // `</br>` is treated as a line break, as browsers do
        if name == "br" {
            self.children_mut().push(Node::Element(Element::new("br")));
            return;
        }
        if let Some(count) = self.suppressed.get_mut(name)
            && *count > 0
        {
            *count -= 1;
            return;
        }
        match self.open.iter().rposition(|element| element.tag == name) {
            Some(index) => self.close_to(index),
            None => self.ignored_end_tags += 1,
        }
    }

    /// Pop open elements until only `depth` remain, attaching each to its parent.
    fn close_to(&mut self, depth: usize) {
        while self.open.len() > depth {
            let Some(element) = self.open.pop() else {
                break;
            };
            self.children_mut().push(Node::Element(element));
        }
    }
}

/// Turn raw attributes into an element; `style` is parsed, first duplicate wins.
fn build_element(tag: String, attributes: Vec<(String, String)>) -> Element {
    let mut element = Element::new(tag);
    let mut seen_style = false;
    for (name, value) in attributes {
        if name == "style" {
            if !seen_style {
                element.style = StyleSet::parse(&value);
                seen_style = true;
            }
        } else {
            element.attributes.entry(name).or_insert(value);
        }
    }
    element
}
