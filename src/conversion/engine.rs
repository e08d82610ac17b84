//! Core conversion engine for JSON to HTML transformation

use crate::conversion::config::ConversionConfig;
use crate::conversion::limits;
use crate::conversion::ConversionResult;
use crate::formatter::HtmlFormatter;
use crate::parser::{DataNode, JsonSource};
use crate::sink;
use serde_json::Value;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Core conversion result
#[derive(Debug, Clone)]
pub struct HtmlData {
    pub content: String,
    pub metadata: ConversionMetadata,
}

impl HtmlData {
    /// Create a new HTML data result
    pub fn new(content: String, metadata: ConversionMetadata) -> Self {
        Self { content, metadata }
    }

    /// Get the rendered HTML
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Get the length of the output in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the output is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Metadata about the conversion process
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionMetadata {
    /// Bytes of JSON read; 0 when an in-memory tree was converted
    pub input_size: u64,
    pub output_size: u64,
    pub element_count: usize,
    pub processing_time_ms: u64,
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Convert a data tree to HTML
    pub fn convert(&self, data: &DataNode) -> ConversionResult<HtmlData> {
        self.convert_sized(data, 0)
    }

    /// Convert a parsed JSON value to HTML
    pub fn convert_json(&self, json_data: &Value) -> ConversionResult<HtmlData> {
        self.convert(&DataNode::from(json_data))
    }

    /// Convert JSON from a source to HTML
    pub fn convert_from_source(&self, source: &JsonSource) -> ConversionResult<HtmlData> {
        // Check source size before reading to avoid loading very large files
        limits::check_source_size_before_read(source, &self.config)?;

        debug!(source = %source.description(), "loading JSON");
        let data = source.load()?;

        self.convert_sized(&data, source.estimated_size().unwrap_or(0))
    }

    /// Convert JSON string to HTML
    pub fn convert_string(&self, json_str: &str) -> ConversionResult<HtmlData> {
        let source = JsonSource::String(json_str.to_string());
        self.convert_from_source(&source)
    }

    /// Load `source`, convert it and append the HTML to `destination`.
    ///
    /// Any failure propagates; a failed append may leave a partial write.
    pub fn convert_file(&self, source: &Path, destination: &Path) -> ConversionResult<HtmlData> {
        let html = self.convert_from_source(&JsonSource::File(source.to_path_buf()))?;
        sink::append_html(destination, &html.content)?;
        debug!(
            source = %source.display(),
            destination = %destination.display(),
            bytes = html.len(),
            "appended HTML"
        );
        Ok(html)
    }

    fn convert_sized(&self, data: &DataNode, input_size: u64) -> ConversionResult<HtmlData> {
        let start_time = Instant::now();

        let mut formatter = HtmlFormatter::new(&self.config);
        let content = formatter.format(data)?;

        let metadata = ConversionMetadata {
            input_size,
            output_size: content.len() as u64,
            element_count: formatter.element_count(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };
        debug!(
            elements = metadata.element_count,
            bytes = metadata.output_size,
            "rendered HTML"
        );

        Ok(HtmlData::new(content, metadata))
    }
}

// High-level conversion functions
/// Convert a data tree to an HTML string with the three mode flags and a tag mapping
pub fn convert(
    data: &DataNode,
    table_like: bool,
    html_like_text: bool,
    tag_options: bool,
    tag_mapping: &crate::conversion::TagMapping,
) -> ConversionResult<String> {
    let config = ConversionConfig::default()
        .with_table_like(table_like)
        .with_html_like_text(html_like_text)
        .with_tag_options(tag_options)
        .with_tag_mapping(tag_mapping.clone());
    Ok(ConversionEngine::new(config).convert(data)?.content)
}

/// Convert JSON value to HTML
pub fn convert_json_to_html(
    json_data: &Value,
    config: &ConversionConfig,
) -> ConversionResult<HtmlData> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert_json(json_data)
}

/// Convert JSON string to HTML
pub fn convert_json_string(
    json_str: &str,
    config: &ConversionConfig,
) -> ConversionResult<HtmlData> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert_string(json_str)
}

/// Convert a JSON file and append the HTML to `destination`
pub fn convert_file(
    source: &Path,
    destination: &Path,
    config: &ConversionConfig,
) -> ConversionResult<HtmlData> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert_file(source, destination)
}
