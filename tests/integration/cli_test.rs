//! Integration tests for the htmlconv binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn htmlconv_cmd() -> Command {
    Command::cargo_bin("htmlconv").expect("Failed to find htmlconv binary")
}

#[test]
fn test_inline_json_to_stdout() {
    htmlconv_cmd()
        .args([
            r#"{"title": "Hello", "subtitle": "World"}"#,
            "-m",
            "title=h1",
            "-m",
            "subtitle=p",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("<h1>Hello</h1><p>World</p>"));
}

#[test]
fn test_stdin_input() {
    htmlconv_cmd()
        .arg("--stdin")
        .write_stdin(r#"[{"p": "a < b"}]"#)
        .assert()
        .success()
        .stdout(predicate::str::diff("<p>a &lt; b</p>"));
}

#[test]
fn test_mode_flags() {
    htmlconv_cmd()
        .args([
            r#"[{"a": [{"b": "<i>x</i>"}]}]"#,
            "--table-like",
            "--no-escape",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<ul><li><a><ul><li><b><i>x</i></b></li></ul></a></li></ul>",
        ));

    htmlconv_cmd()
        .args([r#"{"title": "T"}"#, "--tag-options", "-m", "title=h1.big#top"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1 id=\"top\" class=\"big\">T</h1>"));
}

#[test]
fn test_file_output_is_appended() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.json");
    let output = dir.path().join("out.html");
    fs::write(&input, r#"{"p": "again"}"#).unwrap();

    for _ in 0..2 {
        htmlconv_cmd()
            .arg(&input)
            .arg("-o")
            .arg(&output)
            .arg("--quiet")
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "<p>again</p><p>again</p>"
    );
}

#[test]
fn test_map_file() {
    let dir = tempdir().unwrap();
    let map_file = dir.path().join("tags.json");
    fs::write(&map_file, r#"{"name": "h2", "bio": "p"}"#).unwrap();

    htmlconv_cmd()
        .arg(r#"{"name": "Ada", "bio": "Engineer"}"#)
        .arg("--map-file")
        .arg(&map_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("<h2>Ada</h2><p>Engineer</p>"));
}

#[test]
fn test_invalid_json_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.json");
    fs::write(&input, r#"{"p": "#).unwrap();

    htmlconv_cmd()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON parse error"));
}

#[test]
fn test_scalar_document_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("scalar.json");
    fs::write(&input, r#""a string""#).unwrap();

    htmlconv_cmd()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("top-level string"));
}

#[test]
fn test_missing_input_fails() {
    htmlconv_cmd()
        .arg("does/not/exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input path does not exist"));

    htmlconv_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input provided"));
}

#[test]
fn test_bad_map_entry_fails() {
    htmlconv_cmd()
        .args([r#"{"p": "x"}"#, "-m", "no-equals-sign"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected KEY=TAG"));
}

#[test]
fn test_validate_only_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("ok.json");
    let output = dir.path().join("out.html");
    fs::write(&input, r#"{"p": "x"}"#).unwrap();

    htmlconv_cmd()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--validate-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid JSON"));
    assert!(!output.exists());

    fs::write(&input, "42").unwrap();
    htmlconv_cmd()
        .arg(&input)
        .arg("--validate-only")
        .assert()
        .failure();
}

#[test]
fn test_stats_go_to_stderr() {
    htmlconv_cmd()
        .args([r#"{"p": "x"}"#, "--stats"])
        .assert()
        .success()
        .stdout(predicate::str::diff("<p>x</p>"))
        .stderr(predicate::str::contains("Conversion Statistics"));
}

#[test]
fn test_max_input_size() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("big.json");
    fs::write(&input, format!(r#"{{"p": "{}"}}"#, "x".repeat(4096))).unwrap();

    htmlconv_cmd()
        .arg(&input)
        .args(["--max-input-size", "1KB"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn test_stdout_matches_file_output_byte_for_byte() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.html");
    let json = r#"[{"h1": "A"}, {"p": "b & c"}]"#;

    let printed = htmlconv_cmd().arg(json).assert().success().get_output().stdout.clone();

    htmlconv_cmd()
        .arg(json)
        .arg("-o")
        .arg(&output)
        .arg("--quiet")
        .assert()
        .success();

    assert_eq!(printed, fs::read(&output).unwrap());
    assert_eq!(printed, b"<h1>A</h1><p>b &amp; c</p>".to_vec());
}
