//! Rich-text normalization pipeline.
//!
//! Parser -> normalizer passes -> serializer. The passes are repeated until
//! the tree stops changing, and the serializer/parser pair reproduces every
//! normalized tree exactly, which together make normalization idempotent:
//! re-saving already-normalized content never drifts.

pub mod dom;
pub mod normalizer;
pub mod parser;
pub mod serializer;
pub mod style;

use std::sync::{Arc, LazyLock};

use crate::config::RichTextConfig;
use crate::utils::MAX_NORMALIZATION_ROUNDS;

pub use dom::{Attributes, Document, Element, Node, Text};
pub use normalizer::{Pass, run_passes};
pub use parser::{parse, parse_with_depth};
pub use serializer::serialize;
pub use style::{StyleDeclaration, StyleSet};

static DEFAULT_NORMALIZER: LazyLock<RichTextNormalizer> =
    LazyLock::new(|| RichTextNormalizer::new(RichTextConfig::default()));

/// A normalization pipeline bound to one field's configuration.
///
/// Cheap to clone; the configuration is shared. `normalize` holds no state
/// between calls, so one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct RichTextNormalizer {
    config: Arc<RichTextConfig>,
}

impl RichTextNormalizer {
    #[must_use]
    pub fn new(config: RichTextConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &RichTextConfig {
        &self.config
    }

    /// Normalize raw editor markup into canonical HTML.
    ///
    /// Never fails: malformed markup is recovered and disallowed content is
    /// unwrapped or dropped. The empty string normalizes to itself.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        let document = parse_with_depth(raw, self.config.max_depth());
        serialize(&self.normalize_document(document))
    }

    /// Run the pass sequence to a fixed point, then clamp nesting depth.
    #[must_use]
    pub fn normalize_document(&self, document: Document) -> Document {
        normalize_to_fixed_point(document, &self.config)
    }
}

fn normalize_to_fixed_point(document: Document, config: &RichTextConfig) -> Document {
    let max_depth = config.max_depth();
    let mut document = document;
    for round in 1..=MAX_NORMALIZATION_ROUNDS {
        let next = run_passes(document.clone(), config).clamp_depth(max_depth);
        if next == document {
            // The first round does the work, the next one confirms it
            if round > 2 {
                tracing::debug!(rounds = round - 1, "Normalization needed extra rounds");
            }
            return next;
        }
        document = next;
    }
    tracing::warn!(
        rounds = MAX_NORMALIZATION_ROUNDS,
        "Normalization did not reach a fixed point; returning last round"
    );
    document
}

impl Default for RichTextNormalizer {
    fn default() -> Self {
        DEFAULT_NORMALIZER.clone()
    }
}

/// Normalize with the default configuration.
#[must_use]
pub fn normalize(raw: &str) -> String {
    DEFAULT_NORMALIZER.normalize(raw)
}

/// Normalize with an explicit configuration.
#[must_use]
pub fn normalize_with(raw: &str, config: &RichTextConfig) -> String {
    let document = parse_with_depth(raw, config.max_depth());
    serialize(&normalize_to_fixed_point(document, config))
}
