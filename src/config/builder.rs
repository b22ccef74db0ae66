//! Fluent builder for `RichTextConfig`
//!
//! The builder starts from the default allow-lists and validates the result
//! in `build()`, so a `RichTextConfig` handed to the pipeline is always
//! well-formed.

use std::collections::BTreeSet;

use super::errors::{ConfigError, ConfigResult};
use super::types::{RawRichTextConfig, RichTextConfig};
use crate::rich_text::style::parse_em_length;
use crate::utils::MAX_SUPPORTED_DEPTH;

pub struct RichTextConfigBuilder {
    pub(crate) draft: RichTextConfig,
}

impl Default for RichTextConfigBuilder {
    fn default() -> Self {
        Self {
            draft: RichTextConfig::default(),
        }
    }
}

impl RichTextConfig {
    /// Create a builder seeded with the default allow-lists
    #[must_use]
    pub fn builder() -> RichTextConfigBuilder {
        RichTextConfigBuilder::default()
    }

    /// Continue editing an existing configuration (e.g. a preset)
    #[must_use]
    pub fn to_builder(&self) -> RichTextConfigBuilder {
        RichTextConfigBuilder {
            draft: self.clone(),
        }
    }

    /// Decode a configuration from JSON and validate it.
    ///
    /// Missing fields fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and the matching
    /// validation error for out-of-range values.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let raw: RawRichTextConfig = serde_json::from_str(json)?;
        let config = RichTextConfig::try_from(raw)?;
        tracing::debug!(
            tags = config.allowed_tags.len(),
            style_properties = config.allowed_style_properties.len(),
            "Loaded rich-text configuration from JSON"
        );
        Ok(config)
    }

    /// Canonicalize names and check limits.
    pub(crate) fn validated(mut self) -> ConfigResult<Self> {
        self.allowed_tags = canonical_names(&self.allowed_tags);
        self.allowed_style_properties = canonical_names(&self.allowed_style_properties);
        self.allowed_url_schemes = canonical_names(&self.allowed_url_schemes);
        self.dropped_content_tags = canonical_names(&self.dropped_content_tags);
        self.preserved_empty_tags = canonical_names(&self.preserved_empty_tags);
        self.allowed_attributes = self
            .allowed_attributes
            .iter()
            .map(|(tag, attrs)| (tag.trim().to_ascii_lowercase(), canonical_names(attrs)))
            .collect();

        if self.allowed_tags.is_empty() {
            return Err(ConfigError::EmptyTagAllowList);
        }
        if self.max_consecutive_breaks < 1 {
            return Err(ConfigError::InvalidLimit {
                name: "max_consecutive_breaks",
                value: self.max_consecutive_breaks,
                min: 1,
            });
        }
        if self.max_depth < 1 {
            return Err(ConfigError::InvalidLimit {
                name: "max_depth",
                value: self.max_depth,
                min: 1,
            });
        }
        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(ConfigError::LimitTooLarge {
                name: "max_depth",
                value: self.max_depth,
                max: MAX_SUPPORTED_DEPTH,
            });
        }

        let mut sizes = Vec::with_capacity(self.promoted_font_sizes.len());
        for size in &self.promoted_font_sizes {
            let canonical = size.trim().to_ascii_lowercase();
            match parse_em_length(&canonical) {
                Some(em) if em > 0.0 => sizes.push(canonical),
                _ => return Err(ConfigError::InvalidFontSize(size.clone())),
            }
        }
        self.promoted_font_sizes = sizes;

        Ok(self)
    }
}

fn canonical_names(names: &BTreeSet<String>) -> BTreeSet<String> {
    names
        .iter()
        .map(|name| name.trim().to_ascii_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}

impl RichTextConfigBuilder {
    /// Validate and produce the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a limit is out of range, a promoted font size is
    /// not an `em` length, or the tag allow-list is empty.
    pub fn build(self) -> ConfigResult<RichTextConfig> {
        self.draft.validated()
    }
}
