//! JSON to HTML converter
//!
//! Renders JSON data as an HTML fragment: object keys become tags (optionally
//! remapped and carrying `.class`/`#id` shorthand), text is escaped, and
//! arrays of objects can be rendered as nested `<ul>`/`<li>` lists.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod sink;

use std::path::Path;

// Re-export commonly used types
pub use conversion::{
    convert, convert_json_to_html, ConversionConfig, ConversionResult, HtmlData, TagMapping,
};
pub use error::{ConversionError, ConversionErrorKind, ParseError};
pub use formatter::HtmlFormatter;
pub use parser::{DataNode, JsonSource};

/// Convert JSON data to HTML with default configuration
pub fn convert_json(json: &serde_json::Value) -> ConversionResult<String> {
    let config = ConversionConfig::default();
    convert_json_with_config(json, &config)
}

/// Convert JSON data to HTML with custom configuration
pub fn convert_json_with_config(
    json: &serde_json::Value,
    config: &ConversionConfig,
) -> ConversionResult<String> {
    let result = convert_json_to_html(json, config)?;
    Ok(result.content)
}

/// Load the JSON file at `source`, render it and append the HTML to `destination`.
pub fn json_to_html(
    source: &Path,
    destination: &Path,
    config: &ConversionConfig,
) -> ConversionResult<()> {
    conversion::convert_file(source, destination, config).map(|_| ())
}
