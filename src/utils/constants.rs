//! Shared default values for the rich-text normalizer
//!
//! This module contains the default allow-lists, tag classifications and
//! limits used throughout the codebase to ensure consistency and avoid magic
//! strings inside the individual passes.

/// Elements that never have children and never take an end tag.
pub const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements whose content is read verbatim by the parser (no nested markup).
pub const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

/// Block-level elements. Everything else is treated as inline content.
pub const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "caption", "dd", "details", "div", "dl",
    "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5",
    "h6", "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "tbody",
    "td", "tfoot", "th", "thead", "tr", "ul",
];

pub const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Elements that may carry a heading-mimicking `font-size`.
pub const PROMOTABLE_TAGS: &[&str] = &["div", "span"];

/// Tags whose direct same-tag nesting is collapsed into one element.
pub const MERGEABLE_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "strong", "b", "em", "i", "u", "s",
];

/// Line-break elements. They are exempt from pruning but do not count as content.
pub const LINE_BREAK_TAGS: &[&str] = &["br", "wbr"];

/// Attributes whose value is a URL and is checked against the scheme allow-list.
pub const URL_ATTRIBUTES: &[&str] = &["href", "src"];

/// Key in the attribute allow-list that applies to every tag.
pub const GLOBAL_ATTRIBUTE_KEY: &str = "*";

/// Elements preformatted whitespace is preserved inside.
pub const PREFORMATTED_TAGS: &[&str] = &["pre", "textarea"];

/// Default tag allow-list for general rich-text fields.
pub const DEFAULT_ALLOWED_TAGS: &[&str] = &[
    "a", "b", "blockquote", "br", "code", "div", "em", "h1", "h2", "h3", "h4", "h5", "h6",
    "hr", "i", "li", "ol", "p", "pre", "s", "span", "strong", "sub", "sup", "u", "ul",
];

/// Extra tags the project-description field accepts on top of the defaults.
pub const PROJECT_EXTRA_TAGS: &[&str] = &[
    "img", "table", "tbody", "td", "th", "thead", "tr",
];

/// Default attribute allow-list as `(tag, attributes)` pairs.
pub const DEFAULT_ALLOWED_ATTRIBUTES: &[(&str, &[&str])] = &[
    (GLOBAL_ATTRIBUTE_KEY, &["style"]),
    ("a", &["href", "rel", "target", "title"]),
    ("img", &["alt", "height", "src", "title", "width"]),
    ("ol", &["start"]),
    ("td", &["colspan", "rowspan"]),
    ("th", &["colspan", "rowspan"]),
];

/// Default CSS properties that survive style stripping.
pub const DEFAULT_ALLOWED_STYLE_PROPERTIES: &[&str] = &[
    "background-color",
    "color",
    "font-style",
    "font-weight",
    "text-align",
    "text-decoration",
];

/// Default URL schemes accepted in `href`/`src`.
pub const DEFAULT_ALLOWED_URL_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// The editor's five heading-like font-size steps (h1 through h5 equivalents).
pub const DEFAULT_PROMOTED_FONT_SIZES: &[&str] =
    &["1.875em", "1.5em", "1.25em", "1.125em", "1.0625em"];

/// Elements removed together with everything inside them.
pub const DEFAULT_DROPPED_CONTENT_TAGS: &[&str] = &[
    "head", "iframe", "noscript", "object", "script", "style", "template", "title",
];

/// Void/structural exceptions to empty-node pruning.
pub const DEFAULT_PRESERVED_EMPTY_TAGS: &[&str] = &["br", "hr", "img", "td", "th", "wbr"];

/// Longest run of consecutive `<br>` elements that survives.
pub const DEFAULT_MAX_CONSECUTIVE_BREAKS: usize = 2;

/// Maximum element nesting depth kept by the parser.
///
/// Deeper start tags are ignored and their content is flattened into the
/// deepest open element. This bounds every recursive walk in the pipeline.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Largest `max_depth` a configuration may request; passes recurse per level.
pub const MAX_SUPPORTED_DEPTH: usize = 1024;

/// Upper bound on full pass-sequence rounds while searching for a fixed point.
pub const MAX_NORMALIZATION_ROUNDS: usize = 16;

/// Characters treated as whitespace when deciding whether content is empty.
///
/// Editing surfaces insert NBSP, zero-width spaces and BOMs as caret anchors.
pub fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{00A0}' | '\u{200B}' | '\u{FEFF}')
}

/// Whitespace collapsed outside preformatted content (HTML's ASCII whitespace).
pub fn is_collapsible_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{000C}')
}

pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
}

pub fn is_heading_tag(tag: &str) -> bool {
    HEADING_TAGS.contains(&tag)
}
