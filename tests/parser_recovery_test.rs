//! Malformed markup is recovered, never reported

use rich_text_normalizer::{Node, normalize, parse, serialize};

mod common;

#[test]
fn test_unclosed_tags_closed_at_end() {
    assert_eq!(normalize("<p>Hello <strong>world"), "<p>Hello <strong>world</strong></p>");
}

#[test]
fn test_unmatched_closing_tags_ignored() {
    assert_eq!(normalize("</div>text</span></p>"), "text");
}

#[test]
fn test_mismatched_nesting_closes_intermediate_elements() {
    assert_eq!(
        normalize("<p><em>a<strong>b</em>c</p>"),
        "<p><em>a<strong>b</strong></em>c</p>"
    );
}

#[test]
fn test_stray_angle_brackets_become_text() {
    assert_eq!(normalize("<p>1 < 2 and 3 > 2</p>"), "<p>1 &lt; 2 and 3 &gt; 2</p>");
    assert_eq!(normalize("a <> b"), "a &lt;&gt; b");
}

#[test]
fn test_unterminated_tag_is_text() {
    assert_eq!(normalize("<p>ok</p><div class=\"x"), "<p>ok</p>&lt;div class=&quot;x");
}

#[test]
fn test_comments_and_doctype_discarded() {
    assert_eq!(
        normalize("<!DOCTYPE html><!-- saved by editor --><p>x</p><!-- unterminated"),
        "<p>x</p>"
    );
}

#[test]
fn test_uppercase_markup_canonicalized() {
    assert_eq!(
        normalize(r#"<P STYLE="COLOR: red">x</P>"#),
        r#"<p style="color: red;">x</p>"#
    );
}

#[test]
fn test_entities_decoded_and_reencoded() {
    assert_eq!(
        normalize("<p>Fish &amp; Chips &copy; &#8364;5 &quot;ok&quot;</p>"),
        "<p>Fish &amp; Chips \u{a9} \u{20ac}5 &quot;ok&quot;</p>"
    );
}

#[test]
fn test_end_br_tag_is_a_break() {
    assert_eq!(normalize("a</br>b"), "a<br>b");
}

#[test]
fn test_serialized_tree_reparses_identically() {
    let html = normalize(&common::create_editor_html());
    let document = parse(&html);
    assert_eq!(serialize(&document), html);
}

#[test]
fn test_pathological_nesting_is_flattened() {
    let raw = "<span><em>".repeat(50_000) + "deep" + &"</em></span>".repeat(50_000);
    let output = normalize(&raw);
    assert!(output.contains("deep"));
    assert_eq!(normalize(&output), output);
}

#[test]
fn test_parse_produces_forest() {
    let document = parse("<p>a</p>b<h2>c</h2>");
    assert_eq!(document.nodes.len(), 3);
    assert!(matches!(&document.nodes[1], Node::Text(text) if text.content == "b"));
}
