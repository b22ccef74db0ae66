//! Per-field presets
//!
//! The admin panel has two independent rich-text fields that used to carry
//! their own copy of the cleaning rules. Each gets a named configuration
//! here instead, so their differences are explicit.

use super::types::{RichTextConfig, string_set};
use crate::utils::PROJECT_EXTRA_TAGS;

impl RichTextConfig {
    /// Service descriptions: text formatting, lists and links, no media.
    #[must_use]
    pub fn service_description() -> Self {
        Self {
            wrap_plain_text: true,
            ..Self::default()
        }
    }

    /// Project descriptions: everything services allow plus images and tables.
    #[must_use]
    pub fn project_description() -> Self {
        let mut config = Self::service_description();
        config.allowed_tags.extend(string_set(PROJECT_EXTRA_TAGS));
        config
    }
}
