//! Tests for result markup rendering

use resolution_solver::core::services::{RenderOptions, escape_html, translate_line_breaks};

#[test]
fn test_escape_html_special_characters() {
    assert_eq!(escape_html(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
}

#[test]
fn test_escape_html_leaves_formula_symbols() {
    assert_eq!(escape_html("{p, ¬q} ✅"), "{p, ¬q} ✅");
}

#[test]
fn test_translate_every_line_ending() {
    assert_eq!(translate_line_breaks("a\nb\r\nc\rd", "|"), "a|b|c|d");
}

#[test]
fn test_custom_line_break() {
    let options = RenderOptions {
        line_break: "<br/>".to_string(),
        escape_html: true,
    };
    assert_eq!(options.render("7\n2"), "7<br/>2");
}

#[test]
fn test_inserted_line_breaks_are_not_escaped() {
    assert_eq!(RenderOptions::html().render("x\n<y>"), "x<br>&lt;y&gt;");
}

#[test]
fn test_default_is_html() {
    assert_eq!(RenderOptions::default(), RenderOptions::html());
}
