//! Generic data tree handed to the HTML formatter
//!
//! JSON objects become [`DataNode::Mapping`] with their key order preserved,
//! arrays become [`DataNode::Sequence`] and everything else is a [`Scalar`].

use serde_json::{Number, Value};
use std::fmt;

/// A node of the input data tree
#[derive(Debug, Clone, PartialEq)]
pub enum DataNode {
    /// Ordered key/value pairs, keys unique
    Mapping(Vec<(String, DataNode)>),
    /// Ordered list of items
    Sequence(Vec<DataNode>),
    /// A leaf rendered as text
    Scalar(Scalar),
}

/// Leaf values
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Number(Number),
    Bool(bool),
    Null,
}

impl DataNode {
    pub fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Human-readable name of the node kind, used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Mapping(_) => "object",
            Self::Sequence(_) => "array",
            Self::Scalar(Scalar::Text(_)) => "string",
            Self::Scalar(Scalar::Number(_)) => "number",
            Self::Scalar(Scalar::Bool(_)) => "boolean",
            Self::Scalar(Scalar::Null) => "null",
        }
    }

    /// Look up a value by key on a mapping
    pub fn get(&self, key: &str) -> Option<&DataNode> {
        match self {
            Self::Mapping(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Count every node in the tree, this one included
    pub fn node_count(&self) -> usize {
        match self {
            Self::Mapping(entries) => 1 + entries.iter().map(|(_, v)| v.node_count()).sum::<usize>(),
            Self::Sequence(items) => 1 + items.iter().map(DataNode::node_count).sum::<usize>(),
            Self::Scalar(_) => 1,
        }
    }
}

/// Non-text scalars use their JSON spelling
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Null => f.write_str("null"),
        }
    }
}

impl From<Value> for DataNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(obj) => {
                DataNode::Mapping(obj.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
            Value::Array(arr) => DataNode::Sequence(arr.into_iter().map(DataNode::from).collect()),
            Value::String(s) => DataNode::Scalar(Scalar::Text(s)),
            Value::Number(n) => DataNode::Scalar(Scalar::Number(n)),
            Value::Bool(b) => DataNode::Scalar(Scalar::Bool(b)),
            Value::Null => DataNode::Scalar(Scalar::Null),
        }
    }
}

impl From<&Value> for DataNode {
    fn from(value: &Value) -> Self {
        DataNode::from(value.clone())
    }
}
