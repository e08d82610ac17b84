//! JSON loading: sources, parsing and directory discovery

pub mod directory;
pub mod node;

pub use node::{DataNode, Scalar};

use crate::error::{ParseError, ParseResult};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source for parsing operations
#[derive(Debug, Clone, PartialEq)]
pub enum JsonSource {
    /// Raw JSON string input
    String(String),
    /// Single JSON file path
    File(PathBuf),
    /// Directory containing multiple JSON files
    Directory(PathBuf),
    /// Standard input stream
    Stdin,
}

impl JsonSource {
    /// Parse JSON from this source
    pub fn parse(&self) -> ParseResult<serde_json::Value> {
        match self {
            JsonSource::String(content) => parse_from_string(content),
            JsonSource::File(path) => parse_from_file(path),
            JsonSource::Stdin => parse_from_stdin(),
            JsonSource::Directory(_) => Err(ParseError::new(
                "Cannot parse directory as single JSON value".to_string(),
                None,
            )),
        }
    }

    /// Parse this source straight into a data tree
    pub fn load(&self) -> ParseResult<DataNode> {
        self.parse().map(DataNode::from)
    }

    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            JsonSource::String(_) => "string input".to_string(),
            JsonSource::File(path) => format!("file: {}", path.display()),
            JsonSource::Directory(path) => format!("directory: {}", path.display()),
            JsonSource::Stdin => "standard input".to_string(),
        }
    }

    /// Check if the source exists and is accessible
    pub fn exists(&self) -> bool {
        match self {
            JsonSource::String(_) | JsonSource::Stdin => true,
            JsonSource::File(path) => path.is_file(),
            JsonSource::Directory(path) => path.is_dir(),
        }
    }

    /// Get the size of the source in bytes, when it is known before reading
    pub fn estimated_size(&self) -> Option<u64> {
        match self {
            JsonSource::String(s) => Some(s.len() as u64),
            JsonSource::File(path) => std::fs::metadata(path).ok().map(|m| m.len()),
            JsonSource::Directory(_) | JsonSource::Stdin => None,
        }
    }
}

/// Parse JSON from a string
pub fn parse_from_string(content: &str) -> ParseResult<serde_json::Value> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ParseError::new("Empty JSON string".to_string(), None));
    }

    serde_json::from_str(trimmed).map_err(|e| {
        let location = error_location(&e);
        let error = ParseError::new(format!("Invalid JSON: {}", e), location);
        match location.and_then(|loc| error_preview(trimmed, loc)) {
            Some(preview) => error.with_preview(preview),
            None => error,
        }
    })
}

/// Parse JSON from a file
fn parse_from_file(path: &Path) -> ParseResult<serde_json::Value> {
    debug!(path = %path.display(), "reading JSON file");
    let content = std::fs::read_to_string(path).map_err(|e| {
        ParseError::new(
            format!("Failed to read file {}: {}", path.display(), e),
            None,
        )
    })?;

    parse_from_string(&content)
}

/// Parse JSON from standard input
fn parse_from_stdin() -> ParseResult<serde_json::Value> {
    debug!("reading JSON from stdin");
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| ParseError::new(format!("Failed to read stdin: {}", e), None))?;

    parse_from_string(&buffer)
}

/// Line and column of a syntax error, when serde_json knows them
fn error_location(error: &serde_json::Error) -> Option<(usize, usize)> {
    match (error.line(), error.column()) {
        (0, _) => None,
        (line, column) => Some((line, column)),
    }
}

/// The offending line with a caret under the error column
fn error_preview(content: &str, (line, column): (usize, usize)) -> Option<String> {
    let error_line = content.lines().nth(line - 1)?;
    let caret_offset = error_line
        .chars()
        .take(column.saturating_sub(1))
        .count();
    Some(format!("{}\n{}^", error_line, " ".repeat(caret_offset)))
}
