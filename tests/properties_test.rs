//! Property tests for the invariants every normalized document must satisfy

use proptest::prelude::*;
use proptest::sample::select;
use rich_text_normalizer::{RichTextConfig, normalize_with};

mod common;

const TAGS: &[&str] = &[
    "p", "div", "span", "h1", "h2", "h3", "strong", "b", "em", "u", "a", "ul", "li", "pre",
    "font", "section", "script", "table", "td", "blockquote",
];

const ATTRIBUTES: &[&str] = &[
    "",
    r#" style="font-size: 1.875em""#,
    r#" style="font-size:1.25em;color:red""#,
    r#" style="font-weight: normal; color: inherit""#,
    r#" style="font-family: Arial; text-align: center""#,
    r#" style="background-color: url(x.png)""#,
    r#" class="MsoNormal""#,
    r#" href="javascript:alert(1)""#,
    r#" href="/relative" title="t""#,
    r#" onclick="x()""#,
];

const LEAVES: &[&str] = &[
    "&nbsp;",
    "<br>",
    "<br/>",
    "<hr>",
    "  \n ",
    "<",
    "&amp;",
    "</p>",
    "</h1>",
    "<!-- c -->",
    "\u{200b}",
];

/// Editor-like markup: nested, styled, partially unclosed
fn markup() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        "[a-zA-Z ]{0,8}",
        select(LEAVES).prop_map(str::to_string),
    ];
    leaf.prop_recursive(5, 48, 4, |inner| {
        (
            select(TAGS),
            select(ATTRIBUTES),
            prop::collection::vec(inner, 0..4),
            any::<bool>(),
        )
            .prop_map(|(tag, attributes, children, closed)| {
                let body = children.concat();
                if closed {
                    format!("<{tag}{attributes}>{body}</{tag}>")
                } else {
                    format!("<{tag}{attributes}>{body}")
                }
            })
    })
}

fn configs() -> impl Strategy<Value = RichTextConfig> {
    prop_oneof![
        Just(RichTextConfig::default()),
        Just(RichTextConfig::service_description()),
        Just(RichTextConfig::project_description()),
    ]
}

proptest! {
    #[test]
    fn prop_idempotent(html in markup(), config in configs()) {
        let once = normalize_with(&html, &config);
        prop_assert_eq!(normalize_with(&once, &config), once);
    }

    #[test]
    fn prop_idempotent_for_arbitrary_strings(raw in any::<String>()) {
        let config = RichTextConfig::default();
        let once = normalize_with(&raw, &config);
        prop_assert_eq!(normalize_with(&once, &config), once);
    }

    #[test]
    fn prop_idempotent_for_tag_soup(raw in r#"[<>/a-z"'= &;!-]{0,60}"#) {
        let config = RichTextConfig::service_description();
        let once = normalize_with(&raw, &config);
        prop_assert_eq!(normalize_with(&once, &config), once);
    }

    #[test]
    fn prop_no_nested_headings(html in markup(), config in configs()) {
        let output = normalize_with(&html, &config);
        prop_assert!(common::nested_headings(&output).is_empty(), "{}", output);
    }

    #[test]
    fn prop_no_empty_blocks(html in markup(), config in configs()) {
        let output = normalize_with(&html, &config);
        prop_assert!(common::empty_blocks(&output, &config).is_empty(), "{}", output);
    }

    #[test]
    fn prop_style_allow_list_closure(html in markup(), config in configs()) {
        let output = normalize_with(&html, &config);
        prop_assert!(common::disallowed_declarations(&output, &config).is_empty(), "{}", output);
    }

    #[test]
    fn prop_tag_allow_list_closure(html in markup(), config in configs()) {
        let output = normalize_with(&html, &config);
        prop_assert!(common::disallowed_tags(&output, &config).is_empty(), "{}", output);
    }

    #[test]
    fn prop_no_script_urls(html in markup()) {
        let output = normalize_with(&html, &RichTextConfig::project_description());
        prop_assert!(!output.contains("javascript:"), "{}", output);
    }
}
