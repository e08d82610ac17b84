//! HTML formatting module
//!
//! Walks a [`DataNode`] tree depth-first and renders every key/value pair as
//! `<tag>value</tag>`, concatenated without separators or whitespace.

pub mod escape;
pub mod table;
pub mod tags;

pub use escape::escape_html;
pub use tags::{split_tag_options, TagSpec};

use crate::conversion::{ConversionConfig, ConversionResult};
use crate::error::{ConversionError, ConversionErrorKind};
use crate::parser::{DataNode, Scalar};
use std::borrow::Cow;
use tracing::trace;

/// A rendered value waiting to be placed between tags
#[derive(Debug, Clone, PartialEq)]
pub enum Content<'v> {
    /// Raw text from the data, escaped when `html_like_text` is on
    Text(&'v str),
    /// Already rendered markup, or a non-text scalar; embedded as is
    Markup(String),
}

/// Main HTML formatter
pub struct HtmlFormatter<'a> {
    config: &'a ConversionConfig,
    elements: usize,
}

impl<'a> HtmlFormatter<'a> {
    /// Create a new formatter with configuration
    pub fn new(config: &'a ConversionConfig) -> Self {
        Self {
            config,
            elements: 0,
        }
    }

    /// Number of elements rendered so far
    pub fn element_count(&self) -> usize {
        self.elements
    }

    /// Format a data tree as HTML.
    ///
    /// Only a mapping or a sequence is accepted at the top level; a scalar
    /// fails with `InvalidInputKind` before anything is rendered.
    pub fn format(&mut self, data: &DataNode) -> ConversionResult<String> {
        let mut out = String::new();
        match data {
            DataNode::Mapping(entries) => self.render_mapping(entries, &mut out)?,
            DataNode::Sequence(items) => self.render_sequence(items, &mut out)?,
            DataNode::Scalar(_) => {
                return Err(ConversionError::conversion(
                    ConversionErrorKind::invalid_input_kind(data.kind_name()),
                ))
            }
        }
        Ok(out)
    }

    /// Render each entry as an element, in key order
    fn render_mapping(
        &mut self,
        entries: &[(String, DataNode)],
        out: &mut String,
    ) -> ConversionResult<()> {
        let config = self.config;
        for (key, value) in entries {
            let content = self.render_value(value)?;
            self.render_element(config.tag_mapping.resolve(key), &content, out);
        }
        Ok(())
    }

    fn render_sequence(&mut self, items: &[DataNode], out: &mut String) -> ConversionResult<()> {
        if self.config.table_like {
            self.render_table(items, out)
        } else {
            self.render_flat(items, out)
        }
    }

    /// Concatenate the elements of every item, with no per-item wrapper
    fn render_flat(&mut self, items: &[DataNode], out: &mut String) -> ConversionResult<()> {
        for (index, item) in items.iter().enumerate() {
            let entries = expect_mapping(index, item)?;
            self.render_mapping(entries, out)?;
        }
        Ok(())
    }

    /// Turn a value into element content, rendering nested structures first
    fn render_value<'v>(&mut self, value: &'v DataNode) -> ConversionResult<Content<'v>> {
        let content = match value {
            DataNode::Scalar(Scalar::Text(text)) => Content::Text(text),
            DataNode::Scalar(other) => Content::Markup(other.to_string()),
            DataNode::Mapping(entries) => {
                let mut inner = String::new();
                self.render_mapping(entries, &mut inner)?;
                Content::Markup(inner)
            }
            DataNode::Sequence(items) => {
                let mut inner = String::new();
                self.render_sequence(items, &mut inner)?;
                Content::Markup(inner)
            }
        };
        Ok(content)
    }

    /// Emit `<opening>content</name>` for one tag specification
    fn render_element(&mut self, spec: &str, content: &Content<'_>, out: &mut String) {
        self.elements += 1;
        trace!(spec, "rendering element");

        let body: Cow<'_, str> = match content {
            Content::Text(text) if self.config.html_like_text => escape_html(text),
            Content::Text(text) => Cow::Borrowed(*text),
            Content::Markup(markup) => Cow::Borrowed(markup.as_str()),
        };

        if self.config.tag_options {
            let tag = TagSpec::parse(spec);
            push_element(out, &tag.opening(), &body, tag.name());
        } else {
            push_element(out, spec, &body, spec);
        }
    }
}

fn push_element(out: &mut String, opening: &str, body: &str, closing: &str) {
    out.reserve(opening.len() + body.len() + closing.len() + 5);
    out.push('<');
    out.push_str(opening);
    out.push('>');
    out.push_str(body);
    out.push_str("</");
    out.push_str(closing);
    out.push('>');
}

/// Sequence items must be mappings; anything else is reported with its index
fn expect_mapping(index: usize, item: &DataNode) -> ConversionResult<&[(String, DataNode)]> {
    match item {
        DataNode::Mapping(entries) => Ok(entries),
        other => Err(ConversionError::conversion(
            ConversionErrorKind::malformed_item(index, other.kind_name()),
        )),
    }
}

/// Format a data tree as HTML with the given configuration
pub fn format_to_html(data: &DataNode, config: &ConversionConfig) -> ConversionResult<String> {
    HtmlFormatter::new(config).format(data)
}
