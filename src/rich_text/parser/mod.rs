//! Markup parser.
//!
//! `parse` accepts any string and always produces a `Document`: unclosed
//! elements are closed at end of input, unmatched end tags are ignored and
//! stray angle brackets become text. Entities are decoded into literal
//! text; the serializer re-encodes what must be encoded.

mod tokenizer;
mod tree_builder;

use super::dom::Document;
use crate::utils::DEFAULT_MAX_DEPTH;
use tokenizer::Tokenizer;
use tree_builder::TreeBuilder;

/// Parse markup with the default nesting limit.
#[must_use]
pub fn parse(raw: &str) -> Document {
    parse_with_depth(raw, DEFAULT_MAX_DEPTH)
}

/// Parse markup, flattening elements nested deeper than `max_depth`.
#[must_use]
pub fn parse_with_depth(raw: &str, max_depth: usize) -> Document {
    let mut builder = TreeBuilder::new(max_depth.max(1));
    for token in Tokenizer::new(raw) {
        builder.process(token);
    }
    builder.finish()
}
