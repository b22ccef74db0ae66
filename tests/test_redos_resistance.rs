//! Adversarial input must stay linear-ish and must never overflow the stack
//!
//! Bounds are generous so debug builds on slow CI machines pass; a
//! quadratic regression on these sizes takes minutes, not seconds.

use rich_text_normalizer::normalize;
use std::time::{Duration, Instant};

const BUDGET: Duration = Duration::from_secs(5);

fn assert_fast(name: &str, input: &str) -> String {
    let start = Instant::now();
    let output = normalize(input);
    let elapsed = start.elapsed();
    println!("{name}: {elapsed:?}");
    assert!(elapsed < BUDGET, "{name} took {elapsed:?}");
    output
}

#[test]
fn test_unterminated_style_attribute() {
    let adversarial = "<div style=\"".to_string() + &"a".repeat(100_000);
    let output = assert_fast("unterminated style", &adversarial);
    assert!(output.starts_with("&lt;div style=&quot;aaa"));
}

#[test]
fn test_deep_unclosed_nesting() {
    let adversarial = "<div>".repeat(100_000) + "x";
    assert_eq!(assert_fast("deep divs", &adversarial), "<p>x</p>");
}

#[test]
fn test_deep_nesting_with_unrelated_end_tags() {
    let adversarial = "<span>".repeat(50_000) + "x" + &"</div>".repeat(50_000);
    assert_eq!(assert_fast("unrelated end tags", &adversarial), "x");
}

#[test]
fn test_many_raw_text_elements() {
    let adversarial = "<script>a</script>".repeat(20_000) + "ok";
    assert_eq!(assert_fast("script elements", &adversarial), "ok");
}

#[test]
fn test_long_break_run() {
    let adversarial = "<br>".repeat(100_000);
    assert_eq!(assert_fast("break run", &adversarial), "<br><br>");
}

#[test]
fn test_many_style_declarations() {
    let style = "color: red; ".repeat(20_000);
    let adversarial = format!(r#"<p style="{style}">x</p>"#);
    assert_eq!(
        assert_fast("style declarations", &adversarial),
        r#"<p style="color: red;">x</p>"#
    );
}

#[test]
fn test_stray_brackets() {
    let adversarial = "< ".repeat(100_000);
    let output = assert_fast("stray brackets", &adversarial);
    assert!(output.starts_with("&lt; &lt;"));
}

#[test]
fn test_many_empty_paragraphs() {
    let adversarial = "<p>&nbsp;</p>".repeat(50_000) + "<p>end</p>";
    assert_eq!(assert_fast("empty paragraphs", &adversarial), "<p>end</p>");
}
