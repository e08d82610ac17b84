//! Unit tests for string-to-HTML conversion functionality
//!
//! Tests cover:
//! - Key order and tag mapping in the rendered markup
//! - Escaping of text values
//! - Rejection of scalar documents and malformed arrays
//! - Error handling for invalid JSON

use htmlconv::conversion::{convert, convert_json_string, ConversionConfig, TagMapping};
use htmlconv::error::{ConversionError, ConversionErrorKind};
use htmlconv::formatter::escape_html;
use htmlconv::DataNode;
use assert_matches::assert_matches;
use serde_json::json;

#[cfg(test)]
mod string_conversion_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Mapped keys become the mapped tags, in document order
    #[test]
    fn test_title_and_subtitle() {
        let data = DataNode::from(json!({"title": "Hello", "subtitle": "World"}));
        let mapping = TagMapping::new().with("title", "h1").with("subtitle", "p");

        let html = convert(&data, false, true, false, &mapping).unwrap();
        assert_eq!(html, "<h1>Hello</h1><p>World</p>");
    }

    /// Without escaping or tag options the output is `<key>value</key>` per key
    #[test]
    fn test_key_order_is_preserved() {
        let config = ConversionConfig::default().with_html_like_text(false);
        let json_str = r#"{"zeta": "1", "alpha": "2", "mid": "3"}"#;

        let html = convert_json_string(json_str, &config).unwrap();
        assert_eq!(html.content, "<zeta>1</zeta><alpha>2</alpha><mid>3</mid>");
    }

    #[test]
    fn test_escape_reserved_characters() {
        assert_eq!(escape_html("<a&b>"), "&lt;a&amp;b&gt;");
        assert_eq!(escape_html("it's \"x\""), "it&apos;s &quot;x&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_text_values_are_escaped_by_default() {
        let config = ConversionConfig::default();
        let html = convert_json_string(r#"{"p": "<script>alert('x')</script>"}"#, &config)
            .unwrap();
        assert_eq!(
            html.content,
            "<p>&lt;script&gt;alert(&apos;x&apos;)&lt;/script&gt;</p>"
        );
    }

    #[test]
    fn test_raw_text_when_escaping_disabled() {
        let config = ConversionConfig::default().with_html_like_text(false);
        let html = convert_json_string(r#"{"div": "<b>bold</b>"}"#, &config).unwrap();
        assert_eq!(html.content, "<div><b>bold</b></div>");
    }

    #[test]
    fn test_numbers_and_booleans_use_json_spelling() {
        let config = ConversionConfig::default();
        let html = convert_json_string(r#"{"count": 3, "ratio": 0.5, "ok": false}"#, &config)
            .unwrap();
        assert_eq!(html.content, "<count>3</count><ratio>0.5</ratio><ok>false</ok>");
    }

    #[test]
    fn test_flat_array_concatenates_objects() {
        let config = ConversionConfig::default();
        let html = convert_json_string(r#"[{"h2": "A"}, {"h2": "B", "p": "b"}]"#, &config)
            .unwrap();
        assert_eq!(html.content, "<h2>A</h2><h2>B</h2><p>b</p>");
    }

    #[test]
    fn test_scalar_documents_are_rejected() {
        let mapping = TagMapping::new();
        for value in [json!("a string"), json!(42)] {
            let err = convert(&DataNode::from(value), false, true, false, &mapping).unwrap_err();
            assert_matches!(
                err.kind(),
                Some(ConversionErrorKind::InvalidInputKind { .. })
            );
        }
    }

    #[test]
    fn test_flat_array_with_scalar_item() {
        let config = ConversionConfig::default();
        let err = convert_json_string(r#"[{"p": "ok"}, 7]"#, &config).unwrap_err();
        assert_matches!(
            err.kind(),
            Some(ConversionErrorKind::MalformedItem { index: 1, found: "number" })
        );
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let config = ConversionConfig::default();
        let err = convert_json_string(r#"{"p": "unterminated"#, &config).unwrap_err();
        match err {
            ConversionError::ParseError(parse) => assert!(parse.location.is_some()),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_string_is_parse_error() {
        let config = ConversionConfig::default();
        let err = convert_json_string("   ", &config).unwrap_err();
        assert_matches!(err, ConversionError::ParseError(_));
    }

    #[test]
    fn test_input_size_limit() {
        let config = ConversionConfig::default().with_max_input_size(1024);
        let big = format!(r#"{{"p": "{}"}}"#, "x".repeat(2048));

        let err = convert_json_string(&big, &config).unwrap_err();
        assert_matches!(
            err.kind(),
            Some(ConversionErrorKind::InputTooLarge { limit: 1024, .. })
        );
    }
}
