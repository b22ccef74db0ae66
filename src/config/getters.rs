//! Accessors for `RichTextConfig`
//!
//! Lookups take names that are already lower-cased, which is what the
//! parser produces for tags, attributes and style properties.

use std::collections::BTreeSet;

use super::types::RichTextConfig;
use crate::rich_text::style::parse_em_length;
use crate::utils::{GLOBAL_ATTRIBUTE_KEY, LINE_BREAK_TAGS, is_void_tag};

impl RichTextConfig {
    #[must_use]
    pub fn allowed_tags(&self) -> &BTreeSet<String> {
        &self.allowed_tags
    }

    #[must_use]
    pub fn allowed_style_properties(&self) -> &BTreeSet<String> {
        &self.allowed_style_properties
    }

    #[must_use]
    pub fn allowed_url_schemes(&self) -> &BTreeSet<String> {
        &self.allowed_url_schemes
    }

    #[must_use]
    pub fn promoted_font_sizes(&self) -> &[String] {
        &self.promoted_font_sizes
    }

    #[must_use]
    pub fn max_consecutive_breaks(&self) -> usize {
        self.max_consecutive_breaks
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[must_use]
    pub fn wrap_plain_text(&self) -> bool {
        self.wrap_plain_text
    }

    #[must_use]
    pub fn allows_tag(&self, tag: &str) -> bool {
        self.allowed_tags.contains(tag)
    }

    /// Whether `attribute` may stay on `tag`, either per-tag or through `"*"`
    #[must_use]
    pub fn allows_attribute(&self, tag: &str, attribute: &str) -> bool {
        [tag, GLOBAL_ATTRIBUTE_KEY].iter().any(|key| {
            self.allowed_attributes
                .get(*key)
                .is_some_and(|attrs| attrs.contains(attribute))
        })
    }

    #[must_use]
    pub fn allows_style_property(&self, property: &str) -> bool {
        self.allowed_style_properties.contains(property)
    }

    #[must_use]
    pub fn allows_url_scheme(&self, scheme: &str) -> bool {
        self.allowed_url_schemes.contains(scheme)
    }

    #[must_use]
    pub fn drops_content_of(&self, tag: &str) -> bool {
        self.dropped_content_tags.contains(tag)
    }

    /// Exempt from empty-node pruning (configured exceptions plus all void elements)
    #[must_use]
    pub fn preserves_when_empty(&self, tag: &str) -> bool {
        is_void_tag(tag) || self.preserved_empty_tags.contains(tag)
    }

    /// Counts as content when deciding whether its ancestors are empty.
    ///
    /// Line breaks are preserved themselves but do not keep a block alive,
    /// so `<p><br></p>` is still pruned.
    #[must_use]
    pub fn is_content_bearing(&self, tag: &str) -> bool {
        self.preserves_when_empty(tag) && !LINE_BREAK_TAGS.contains(&tag)
    }

    /// Whether a `font-size` value matches one of the heading-like scale steps
    #[must_use]
    pub fn is_promoted_font_size(&self, value: &str) -> bool {
        let Some(em) = parse_em_length(value) else {
            return false;
        };
        self.promoted_font_sizes
            .iter()
            .filter_map(|step| parse_em_length(step))
            .any(|step| (step - em).abs() < 1e-6)
    }
}
