//! Setter methods for `RichTextConfigBuilder`
//!
//! Names are stored as given; `build()` lower-cases and trims them.

use std::collections::BTreeSet;

use super::builder::RichTextConfigBuilder;

fn collect_names<I, S>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

impl RichTextConfigBuilder {
    /// Replace the tag allow-list
    #[must_use]
    pub fn allowed_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.draft.allowed_tags = collect_names(tags);
        self
    }

    #[must_use]
    pub fn allow_tag(mut self, tag: impl Into<String>) -> Self {
        self.draft.allowed_tags.insert(tag.into());
        self
    }

    #[must_use]
    pub fn disallow_tag(mut self, tag: &str) -> Self {
        self.draft.allowed_tags.remove(tag);
        self
    }

    /// Replace the attributes permitted on `tag` (`"*"` for every tag)
    #[must_use]
    pub fn allowed_attributes<I, S>(mut self, tag: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.draft
            .allowed_attributes
            .insert(tag.into(), collect_names(attributes));
        self
    }

    #[must_use]
    pub fn allowed_style_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.draft.allowed_style_properties = collect_names(properties);
        self
    }

    #[must_use]
    pub fn allow_style_property(mut self, property: impl Into<String>) -> Self {
        self.draft.allowed_style_properties.insert(property.into());
        self
    }

    #[must_use]
    pub fn allowed_url_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.draft.allowed_url_schemes = collect_names(schemes);
        self
    }

    /// Replace the heading-mimicking font-size steps demoted to paragraphs
    #[must_use]
    pub fn promoted_font_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.draft.promoted_font_sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn dropped_content_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.draft.dropped_content_tags = collect_names(tags);
        self
    }

    #[must_use]
    pub fn preserved_empty_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.draft.preserved_empty_tags = collect_names(tags);
        self
    }

    #[must_use]
    pub fn max_consecutive_breaks(mut self, max: usize) -> Self {
        self.draft.max_consecutive_breaks = max;
        self
    }

    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.draft.max_depth = depth;
        self
    }

    /// Wrap top-level inline content into paragraphs
    ///
    /// Enable for fields whose renderers expect block-level HTML. Bare text
    /// such as `hello` then normalizes to `<p>hello</p>`.
    #[must_use]
    pub fn wrap_plain_text(mut self, wrap: bool) -> Self {
        self.draft.wrap_plain_text = wrap;
        self
    }
}
