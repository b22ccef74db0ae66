//! Ordered tree-rewrite passes.
//!
//! Each pass is a pure `Document -> Document` rewrite enforcing one
//! structural or stylistic invariant. The order in `Pass::ORDER` is
//! load-bearing: promotion must see `font-size` before stripping deletes it,
//! the allow-list must run before pruning so unwrapped wrappers are judged on
//! what remains, and whitespace trimming needs the final block structure.

mod allow_list;
mod block_wrapping;
mod div_paragraph;
mod empty_pruning;
mod heading_collapse;
mod nested_merge;
mod style_promotion;
mod style_stripping;
mod whitespace_normalization;


use std::fmt;

use super::dom::Document;
use crate::config::RichTextConfig;

/// One normalization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    /// Flatten headings nested inside headings into the outer heading
    HeadingCollapse,
    /// Demote font-size pseudo-headings on `div`/`span` to paragraphs
    StylePromotion,
    /// Drop disallowed, no-op and unsafe style declarations; unwrap bare spans
    StyleStripping,
    /// Enforce the tag, attribute and URL-scheme allow-lists
    AllowList,
    /// Remove elements with no content
    EmptyPruning,
    /// Retag inline-only `div`s as paragraphs
    DivToParagraph,
    /// Collapse directly nested same-tag wrappers
    NestedMerge,
    /// Collapse whitespace, cap line-break runs, trim at block boundaries
    Whitespace,
    /// Wrap top-level inline runs into paragraphs (when configured)
    BlockWrapping,
}

impl Pass {
    /// The fixed pass order.
    pub const ORDER: [Pass; 9] = [
        Pass::HeadingCollapse,
        Pass::StylePromotion,
        Pass::StyleStripping,
        Pass::AllowList,
        Pass::EmptyPruning,
        Pass::DivToParagraph,
        Pass::NestedMerge,
        Pass::Whitespace,
        Pass::BlockWrapping,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Pass::HeadingCollapse => "heading_collapse",
            Pass::StylePromotion => "style_promotion",
            Pass::StyleStripping => "style_stripping",
            Pass::AllowList => "allow_list",
            Pass::EmptyPruning => "empty_pruning",
            Pass::DivToParagraph => "div_to_paragraph",
            Pass::NestedMerge => "nested_merge",
            Pass::Whitespace => "whitespace",
            Pass::BlockWrapping => "block_wrapping",
        }
    }

    /// Apply this pass to a document.
    #[must_use]
    pub fn apply(self, document: Document, config: &RichTextConfig) -> Document {
        let nodes = document.nodes;
        let nodes = match self {
            Pass::HeadingCollapse => heading_collapse::collapse_headings(nodes, config),
            Pass::StylePromotion => style_promotion::promote_font_sizes(nodes, config),
            Pass::StyleStripping => style_stripping::strip_styles(nodes, config),
            Pass::AllowList => allow_list::enforce_allow_list(nodes, config),
            Pass::EmptyPruning => empty_pruning::prune_empty(nodes, config),
            Pass::DivToParagraph => div_paragraph::divs_to_paragraphs(nodes, config),
            Pass::NestedMerge => nested_merge::merge_nested(nodes),
            Pass::Whitespace => whitespace_normalization::normalize_whitespace(nodes, config),
            Pass::BlockWrapping => block_wrapping::wrap_inline_runs(nodes, config),
        };
        Document::new(nodes)
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run every pass once, in order.
#[must_use]
pub fn run_passes(document: Document, config: &RichTextConfig) -> Document {
    let mut document = document;
    for pass in Pass::ORDER {
        // Comparing before/after costs a clone, so only do it when someone listens
        if tracing::enabled!(tracing::Level::TRACE) {
            let next = pass.apply(document.clone(), config);
            if next != document {
                tracing::trace!(pass = %pass, "Pass rewrote document");
            }
            document = next;
        } else {
            document = pass.apply(document, config);
        }
    }
    document
}
