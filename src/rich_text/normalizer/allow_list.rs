//! Tag, attribute and URL allow-list enforcement.
//!
//! Stored markup is rendered back into the page verbatim, so this pass is
//! the boundary that decides what reaches the browser:
//!
//! - tags in `dropped_content_tags` (`script`, `style`, `iframe`, ...) are
//!   removed with everything inside them, and so are `script`/`style`
//!   whatever the configuration says: their raw content cannot be escaped
//!   and read back unchanged
//! - any other tag outside `allowed_tags` is unwrapped, keeping its content
//! - attributes not allowed for the tag (or through `"*"`) are dropped, as is
//!   the parsed `style` when `style` is not allowed
//! - `href`/`src` values with a scheme outside `allowed_url_schemes` are
//!   dropped; relative URLs and fragment links have no scheme and are kept

use url::Url;

use crate::config::RichTextConfig;
use crate::rich_text::dom::{Element, Node, rewrite_bottom_up};
use crate::utils::{RAW_TEXT_TAGS, URL_ATTRIBUTES};

pub(super) fn enforce_allow_list(nodes: Vec<Node>, config: &RichTextConfig) -> Vec<Node> {
    rewrite_bottom_up(nodes, &mut |mut element| {
        if drops_content(&element.tag, config) {
            return Vec::new();
        }
        if !config.allows_tag(&element.tag) {
            return element.take_children();
        }
        filter_attributes(&mut element, config);
        vec![Node::Element(element)]
    })
}

/// Whether `tag` is removed together with everything inside it.
pub(super) fn drops_content(tag: &str, config: &RichTextConfig) -> bool {
    config.drops_content_of(tag) || RAW_TEXT_TAGS.contains(&tag)
}

/// Text content without the content of dropped elements.
///
/// Passes that flatten to text run before this one and must use this.
pub(super) fn visible_text(element: &Element, config: &RichTextConfig) -> String {
    element.text_content_without(&|tag| drops_content(tag, config))
}

fn filter_attributes(element: &mut Element, config: &RichTextConfig) {
    let tag = element.tag.as_str();
    element.attributes.retain(|name, value| {
        config.allows_attribute(tag, name)
            && (!URL_ATTRIBUTES.contains(&name.as_str()) || is_allowed_url(value, config))
    });
    if !config.allows_attribute(tag, "style") {
        element.style = Default::default();
    }
}

/// Whether a URL attribute value may stay.
///
/// Absolute URLs must use an allowed scheme. `url` strips the control
/// characters and embedded tabs browsers ignore, so `java\tscript:` is
/// still recognised as `javascript`.
fn is_allowed_url(value: &str, config: &RichTextConfig) -> bool {
    match Url::parse(value) {
        Ok(url) => config.allows_url_scheme(url.scheme()),
        Err(url::ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}
