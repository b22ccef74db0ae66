//! Core configuration types for rich-text normalization
//!
//! This module contains the `RichTextConfig` struct that carries the
//! per-field allow-lists and limits consumed by the normalization pipeline.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::errors::{ConfigError, ConfigResult};
use crate::utils::{
    DEFAULT_ALLOWED_ATTRIBUTES, DEFAULT_ALLOWED_STYLE_PROPERTIES, DEFAULT_ALLOWED_TAGS,
    DEFAULT_ALLOWED_URL_SCHEMES, DEFAULT_DROPPED_CONTENT_TAGS, DEFAULT_MAX_CONSECUTIVE_BREAKS,
    DEFAULT_MAX_DEPTH, DEFAULT_PRESERVED_EMPTY_TAGS, DEFAULT_PROMOTED_FONT_SIZES,
};

/// Main configuration struct for one rich-text field
///
/// Every allow-list is externally supplied so the same engine can clean
/// several independent fields, each with its own policy.
///
/// **INVARIANT:** Every instance holds lower-cased, trimmed names and
/// validated limits; deserialization runs the builder's validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRichTextConfig")]
pub struct RichTextConfig {
    /// Tags permitted to survive normalization. Anything else is unwrapped.
    pub(crate) allowed_tags: BTreeSet<String>,

    /// Attributes permitted per tag. The `"*"` key applies to every tag.
    pub(crate) allowed_attributes: BTreeMap<String, BTreeSet<String>>,

    /// CSS properties permitted inside `style` attributes.
    pub(crate) allowed_style_properties: BTreeSet<String>,

    /// URL schemes accepted in `href` and `src`.
    ///
    /// Relative URLs and fragment links carry no scheme and are always kept.
    pub(crate) allowed_url_schemes: BTreeSet<String>,

    /// Font sizes that mark a `div`/`span` as a pseudo-heading to demote.
    ///
    /// Default: the editor's five scale steps (`1.875em` down to `1.0625em`)
    pub(crate) promoted_font_sizes: Vec<String>,

    /// Tags removed together with their entire content.
    pub(crate) dropped_content_tags: BTreeSet<String>,

    /// Tags exempt from empty-node pruning.
    pub(crate) preserved_empty_tags: BTreeSet<String>,

    /// Longest run of consecutive `<br>` elements kept.
    ///
    /// Default: 2
    pub(crate) max_consecutive_breaks: usize,

    /// Maximum element nesting depth.
    ///
    /// Deeper markup is flattened rather than walked, which bounds every
    /// recursive traversal in the pipeline.
    ///
    /// Default: 256
    pub(crate) max_depth: usize,

    /// Wrap top-level inline content (including bare text) into paragraphs.
    ///
    /// Fields whose consumers expect block-level HTML enable this.
    ///
    /// Default: false
    pub(crate) wrap_plain_text: bool,
}

/// Unvalidated wire form of `RichTextConfig`; missing fields take the defaults.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub(crate) struct RawRichTextConfig {
    allowed_tags: BTreeSet<String>,
    allowed_attributes: BTreeMap<String, BTreeSet<String>>,
    allowed_style_properties: BTreeSet<String>,
    allowed_url_schemes: BTreeSet<String>,
    promoted_font_sizes: Vec<String>,
    dropped_content_tags: BTreeSet<String>,
    preserved_empty_tags: BTreeSet<String>,
    max_consecutive_breaks: usize,
    max_depth: usize,
    wrap_plain_text: bool,
}

impl Default for RawRichTextConfig {
    fn default() -> Self {
        let defaults = RichTextConfig::default();
        Self {
            allowed_tags: defaults.allowed_tags,
            allowed_attributes: defaults.allowed_attributes,
            allowed_style_properties: defaults.allowed_style_properties,
            allowed_url_schemes: defaults.allowed_url_schemes,
            promoted_font_sizes: defaults.promoted_font_sizes,
            dropped_content_tags: defaults.dropped_content_tags,
            preserved_empty_tags: defaults.preserved_empty_tags,
            max_consecutive_breaks: defaults.max_consecutive_breaks,
            max_depth: defaults.max_depth,
            wrap_plain_text: defaults.wrap_plain_text,
        }
    }
}

impl TryFrom<RawRichTextConfig> for RichTextConfig {
    type Error = ConfigError;

    fn try_from(raw: RawRichTextConfig) -> ConfigResult<Self> {
        Self {
            allowed_tags: raw.allowed_tags,
            allowed_attributes: raw.allowed_attributes,
            allowed_style_properties: raw.allowed_style_properties,
            allowed_url_schemes: raw.allowed_url_schemes,
            promoted_font_sizes: raw.promoted_font_sizes,
            dropped_content_tags: raw.dropped_content_tags,
            preserved_empty_tags: raw.preserved_empty_tags,
            max_consecutive_breaks: raw.max_consecutive_breaks,
            max_depth: raw.max_depth,
            wrap_plain_text: raw.wrap_plain_text,
        }
        .validated()
    }
}

pub(crate) fn string_set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

impl Default for RichTextConfig {
    fn default() -> Self {
        Self {
            allowed_tags: string_set(DEFAULT_ALLOWED_TAGS),
            allowed_attributes: DEFAULT_ALLOWED_ATTRIBUTES
                .iter()
                .map(|(tag, attrs)| ((*tag).to_string(), string_set(attrs)))
                .collect(),
            allowed_style_properties: string_set(DEFAULT_ALLOWED_STYLE_PROPERTIES),
            allowed_url_schemes: string_set(DEFAULT_ALLOWED_URL_SCHEMES),
            promoted_font_sizes: DEFAULT_PROMOTED_FONT_SIZES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            dropped_content_tags: string_set(DEFAULT_DROPPED_CONTENT_TAGS),
            preserved_empty_tags: string_set(DEFAULT_PRESERVED_EMPTY_TAGS),
            max_consecutive_breaks: DEFAULT_MAX_CONSECUTIVE_BREAKS,
            max_depth: DEFAULT_MAX_DEPTH,
            wrap_plain_text: false,
        }
    }
}
