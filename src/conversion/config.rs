//! Configuration options for JSON to HTML conversion

use crate::conversion::mapping::TagMapping;

/// Default input size limit (100MB)
pub const DEFAULT_MAX_INPUT_SIZE: usize = 100 * 1024 * 1024;

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Render arrays of objects as nested `<ul><li>` lists
    pub table_like: bool,
    /// Escape HTML reserved characters in text values
    pub html_like_text: bool,
    /// Parse `name.class#id` shorthand in tag specifications
    pub tag_options: bool,
    /// Data key to tag specification mapping
    pub tag_mapping: TagMapping,
    /// Maximum accepted input size in bytes
    pub max_input_size: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            table_like: false,
            html_like_text: true,
            tag_options: false,
            tag_mapping: TagMapping::default(),
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable/disable table (nested list) mode
    pub fn with_table_like(mut self, enabled: bool) -> Self {
        self.table_like = enabled;
        self
    }

    /// Enable/disable escaping of text values
    pub fn with_html_like_text(mut self, enabled: bool) -> Self {
        self.html_like_text = enabled;
        self
    }

    /// Enable/disable class and id shorthand in tag specifications
    pub fn with_tag_options(mut self, enabled: bool) -> Self {
        self.tag_options = enabled;
        self
    }

    /// Replace the tag mapping
    pub fn with_tag_mapping(mut self, mapping: TagMapping) -> Self {
        self.tag_mapping = mapping;
        self
    }

    /// Map a single data key to a tag specification
    pub fn with_tag(mut self, key: impl Into<String>, spec: impl Into<String>) -> Self {
        self.tag_mapping.insert(key, spec);
        self
    }

    /// Set the input size limit
    pub fn with_max_input_size(mut self, limit_bytes: usize) -> Self {
        self.max_input_size = limit_bytes;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.max_input_size < 1024 {
            return Err("Input size limit must be at least 1KB".to_string());
        }

        if let Some((key, _)) = self
            .tag_mapping
            .iter()
            .find(|(_, spec)| spec.trim().is_empty())
        {
            return Err(format!("Tag mapping for '{}' is empty", key));
        }

        Ok(())
    }
}
