//! Mapping from data keys to tag specifications

use crate::error::{ConversionError, ConversionErrorKind, ConversionResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Data key to tag specification lookup.
///
/// Keys without an entry are used as their own tag specification, so an empty
/// mapping renders `{"title": "x"}` as `<title>x</title>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagMapping {
    tags: BTreeMap<String, String>,
}

impl TagMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the specification for `key`
    pub fn insert(&mut self, key: impl Into<String>, spec: impl Into<String>) -> Option<String> {
        self.tags.insert(key.into(), spec.into())
    }

    /// Builder form of [`TagMapping::insert`]
    pub fn with(mut self, key: impl Into<String>, spec: impl Into<String>) -> Self {
        self.insert(key, spec);
        self
    }

    /// Tag specification for `key`, falling back to the key itself
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.tags.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Copy every entry of `other` into this mapping, replacing duplicates
    pub fn extend_from(&mut self, other: TagMapping) {
        self.tags.extend(other.tags);
    }

    /// Parse a single `KEY=TAG` entry
    pub fn parse_entry(entry: &str) -> ConversionResult<(String, String)> {
        match entry.split_once('=') {
            Some((key, spec)) if !key.trim().is_empty() && !spec.trim().is_empty() => {
                Ok((key.trim().to_string(), spec.trim().to_string()))
            }
            _ => Err(ConversionError::conversion(ConversionErrorKind::configuration(
                format!("Invalid tag mapping '{}': expected KEY=TAG", entry),
            ))),
        }
    }

    /// Build a mapping from `KEY=TAG` entries
    pub fn from_entries<S: AsRef<str>>(entries: &[S]) -> ConversionResult<Self> {
        entries
            .iter()
            .map(|entry| Self::parse_entry(entry.as_ref()))
            .collect()
    }

    /// Load a mapping from a JSON object of string values
    pub fn from_json_str(json: &str) -> ConversionResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            ConversionError::conversion(ConversionErrorKind::configuration(format!(
                "Tag mapping must be a JSON object of strings: {}",
                e
            )))
        })
    }

    /// Load a mapping file, see [`TagMapping::from_json_str`]
    pub fn from_json_file(path: &Path) -> ConversionResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConversionError::io(e, path))?;
        Self::from_json_str(&content)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TagMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            tags: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
