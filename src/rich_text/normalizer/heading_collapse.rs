//! Heading collapse.
//!
//! Editing surfaces re-wrap a heading whenever the block-type dropdown is
//! toggled, producing `h1 > h1` or `h1 > div > span > h1`. Any heading with
//! a heading descendant is flattened to the outer tag holding the plain text
//! of everything inside it. Content of elements the allow-list drops with
//! their content (`script`, `template`, ...) is not part of that text.

use super::allow_list::visible_text;
use crate::config::RichTextConfig;
use crate::rich_text::dom::{Node, rewrite_bottom_up};

pub(super) fn collapse_headings(nodes: Vec<Node>, config: &RichTextConfig) -> Vec<Node> {
    rewrite_bottom_up(nodes, &mut |mut element| {
        if element.is_heading() && element.contains_heading() {
            let text = visible_text(&element, config);
            element.children = if text.is_empty() {
                Vec::new()
            } else {
                vec![Node::text(text)]
            };
        }
        vec![Node::Element(element)]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rich_text::dom::Document;
    use crate::rich_text::parser::parse;
    use crate::rich_text::serializer::serialize;

    fn run_with(html: &str, config: &RichTextConfig) -> String {
        serialize(&Document::new(collapse_headings(parse(html).nodes, config)))
    }

    fn run(html: &str) -> String {
        run_with(html, &RichTextConfig::default())
    }

    #[test]
    fn test_direct_nesting() {
        assert_eq!(run("<h1><h1>Title</h1></h1>"), "<h1>Title</h1>");
    }

    #[test]
    fn test_nesting_through_wrappers() {
        assert_eq!(
            run("<h1><div><span><h1>Title</h1></span></div></h1>"),
            "<h1>Title</h1>"
        );
    }

    #[test]
    fn test_outer_tag_and_attributes_win() {
        assert_eq!(
            run(r#"<h2 style="color: red"><h3>A <em>b</em></h3></h2>"#),
            r#"<h2 style="color: red;">A b</h2>"#
        );
    }

    #[test]
    fn test_headings_without_nesting_untouched() {
        let html = "<h1>A <em>b</em></h1><h2>c</h2>";
        assert_eq!(run(html), html);
    }

    #[test]
    fn test_heading_inside_paragraph_untouched() {
        let html = "<p><h1>x</h1></p>";
        assert_eq!(run(html), html);
    }

    #[test]
    fn test_dropped_content_not_flattened_into_heading() {
        assert_eq!(
            run("<h1><h1>Title</h1><script>alert(document.cookie)</script></h1>"),
            "<h1>Title</h1>"
        );
        assert_eq!(
            run("<h2><h2>T</h2><template>secret</template><style>p {}</style></h2>"),
            "<h2>T</h2>"
        );
    }

    #[test]
    fn test_configured_dropped_tags_not_flattened() -> crate::config::ConfigResult<()> {
        let config = RichTextConfig::builder()
            .dropped_content_tags(["aside"])
            .build()?;
        assert_eq!(
            run_with("<h3><h3>Keep</h3><aside>note</aside></h3>", &config),
            "<h3>Keep</h3>"
        );
        Ok(())
    }
}
