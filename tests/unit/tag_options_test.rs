//! Tests for tag specification shorthand (`name.class#id`)

use htmlconv::conversion::{convert_json_to_html, ConversionConfig, TagMapping};
use htmlconv::formatter::{split_tag_options, TagSpec};
use pretty_assertions::assert_eq;
use serde_json::json;

fn pair(opening: &str, bare: &str) -> (String, String) {
    (opening.to_string(), bare.to_string())
}

#[test]
fn test_classes_and_id_opening_tag() {
    assert_eq!(
        split_tag_options("p.my-class-1.my-class-2#my-id"),
        pair("p id=\"my-id\" class=\"my-class-1 my-class-2\"", "p")
    );
}

#[test]
fn test_plain_name_is_unchanged() {
    for spec in ["p", "h1", "section", "my-element"] {
        assert_eq!(split_tag_options(spec), pair(spec, spec));
    }
}

#[test]
fn test_edge_cases() {
    assert_eq!(split_tag_options("p.cls"), pair("p class=\"cls\"", "p"));
    assert_eq!(split_tag_options("p#id1"), pair("p id=\"id1\"", "p"));
    assert_eq!(
        split_tag_options("p.cls1.cls2#id1"),
        pair("p id=\"id1\" class=\"cls1 cls2\"", "p")
    );
}

#[test]
fn test_parse_is_deterministic() {
    let spec = "div.a.b#c";
    assert_eq!(TagSpec::parse(spec), TagSpec::parse(spec));
    assert_eq!(split_tag_options(spec), split_tag_options(spec));
}

#[test]
fn test_closing_tag_uses_bare_name() {
    let config = ConversionConfig::default()
        .with_tag_options(true)
        .with_tag_mapping(TagMapping::new().with("intro", "p.lead#intro"));

    let html = convert_json_to_html(&json!({"intro": "Hi"}), &config).unwrap();
    assert_eq!(html.content, "<p id=\"intro\" class=\"lead\">Hi</p>");
}

#[test]
fn test_unmapped_keys_are_parsed_too() {
    let config = ConversionConfig::default().with_tag_options(true);
    let html = convert_json_to_html(&json!({"span.note": "x"}), &config).unwrap();
    assert_eq!(html.content, "<span class=\"note\">x</span>");
}

#[test]
fn test_several_hashes_make_several_id_words() {
    assert_eq!(
        split_tag_options("p.a#x#y"),
        pair("p id=\"x y\" class=\"a\"", "p")
    );
    assert_eq!(split_tag_options("p#x#y"), pair("p id=\"x y\"", "p"));
}
