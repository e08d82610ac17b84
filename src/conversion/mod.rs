//! JSON to HTML conversion module
//!
//! This module contains the conversion engine, configuration, tag mapping and statistics.

pub mod batch;
pub mod config;
pub mod engine;
pub mod limits;
pub mod mapping;
pub mod stats;

pub use config::ConversionConfig;
pub use engine::{convert, convert_file, convert_json_string, convert_json_to_html, HtmlData};
pub use mapping::TagMapping;

pub use crate::error::ConversionResult;
