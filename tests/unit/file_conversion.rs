//! Unit tests for file-based conversion
//!
//! Load -> convert -> append, through both the engine and the
//! `json_to_html` entry point.

use htmlconv::conversion::{convert_file, ConversionConfig, TagMapping};
use htmlconv::error::{ConversionError, ConversionErrorKind};
use htmlconv::json_to_html;
use assert_matches::assert_matches;
use std::fs;
use tempfile::tempdir;

#[cfg(test)]
mod file_conversion_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_file_to_html_file() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("page.json");
        let destination = dir.path().join("page.html");
        fs::write(&source, r#"{"title": "Hello", "subtitle": "World"}"#).unwrap();

        let config = ConversionConfig::default()
            .with_tag_mapping(TagMapping::new().with("title", "h1").with("subtitle", "p"));
        json_to_html(&source, &destination, &config).unwrap();

        assert_eq!(
            fs::read_to_string(&destination).unwrap(),
            "<h1>Hello</h1><p>World</p>"
        );
    }

    #[test]
    fn test_two_runs_append() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");
        let destination = dir.path().join("out.html");
        fs::write(&first, r#"{"h1": "One"}"#).unwrap();
        fs::write(&second, r#"[{"p": "Two"}]"#).unwrap();

        let config = ConversionConfig::default();
        json_to_html(&first, &destination, &config).unwrap();
        json_to_html(&second, &destination, &config).unwrap();

        assert_eq!(
            fs::read_to_string(&destination).unwrap(),
            "<h1>One</h1><p>Two</p>"
        );
    }

    #[test]
    fn test_metadata_reports_sizes() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("in.json");
        let destination = dir.path().join("out/in.html");
        let json = r#"{"p": "a", "q": "b"}"#;
        fs::write(&source, json).unwrap();

        let html = convert_file(&source, &destination, &ConversionConfig::default()).unwrap();
        assert_eq!(html.metadata.input_size, json.len() as u64);
        assert_eq!(html.metadata.output_size, html.content.len() as u64);
        assert_eq!(html.metadata.element_count, 2);
        assert!(destination.exists());
    }

    #[test]
    fn test_missing_source_fails_without_output() {
        let dir = tempdir().unwrap();
        let destination = dir.path().join("out.html");

        let err = json_to_html(
            &dir.path().join("missing.json"),
            &destination,
            &ConversionConfig::default(),
        )
        .unwrap_err();
        assert_matches!(err, ConversionError::ParseError(_));
        assert!(!destination.exists());
    }

    #[test]
    fn test_scalar_file_leaves_destination_untouched() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("scalar.json");
        let destination = dir.path().join("out.html");
        fs::write(&source, "42").unwrap();
        fs::write(&destination, "<p>before</p>").unwrap();

        let err = json_to_html(&source, &destination, &ConversionConfig::default()).unwrap_err();
        assert_matches!(
            err.kind(),
            Some(ConversionErrorKind::InvalidInputKind { found: "number" })
        );
        assert_eq!(fs::read_to_string(&destination).unwrap(), "<p>before</p>");
    }

    #[test]
    fn test_oversized_file_is_rejected_before_reading() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("big.json");
        fs::write(&source, format!(r#"{{"p": "{}"}}"#, "x".repeat(4096))).unwrap();

        let config = ConversionConfig::default().with_max_input_size(1024);
        let err = json_to_html(&source, &dir.path().join("out.html"), &config).unwrap_err();
        assert_matches!(err.kind(), Some(ConversionErrorKind::InputTooLarge { .. }));
    }

    #[test]
    fn test_unwritable_destination_is_io_error() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("in.json");
        fs::write(&source, r#"{"p": "x"}"#).unwrap();

        // a directory cannot be opened for appending
        let err = json_to_html(&source, dir.path(), &ConversionConfig::default()).unwrap_err();
        assert_matches!(err.kind(), Some(ConversionErrorKind::Io { .. }));
    }
}
