//! YAML value representation.
//!
//! This module provides the tree that the decoder produces and the matcher
//! walks. Every decoded YAML document becomes a `YamlValue`: mappings keep
//! their keys in document order (so re-encoding a matched subtree gives the
//! same layout the user piped in), sequences stay ordered, and everything
//! else is a scalar.
//!
//! # Example
//!
//! ```
//! use kubectl_grep::document::node::{YamlNumber, YamlValue};
//! use indexmap::IndexMap;
//!
//! let mut container = IndexMap::new();
//! container.insert("name".to_string(), YamlValue::String("nginx".to_string()));
//! container.insert("port".to_string(), YamlValue::Number(YamlNumber::Integer(80)));
//! let container = YamlValue::Object(container);
//!
//! assert_eq!(container.get("port"), Some(&YamlValue::Number(YamlNumber::Integer(80))));
//! assert_eq!(container.get("name").and_then(YamlValue::as_str), Some("nginx"));
//! ```

use indexmap::IndexMap;

/// Represents YAML numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum YamlNumber {
    Integer(i64),
    /// Integers above `i64::MAX`.
    Unsigned(u64),
    Float(f64),
}

impl std::fmt::Display for YamlNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YamlNumber::Integer(i) => write!(f, "{}", i),
            YamlNumber::Unsigned(u) => write!(f, "{}", u),
            YamlNumber::Float(fl) => write!(f, "{}", fl),
        }
    }
}

/// A decoded YAML node.
///
/// Objects and arrays own their children, so a matched subtree can be cloned
/// out of the document and handed to the encoder unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum YamlValue {
    /// A YAML mapping with string keys, in document order
    Object(IndexMap<String, YamlValue>),
    /// A YAML sequence
    Array(Vec<YamlValue>),
    /// A YAML string scalar
    String(String),
    /// A YAML number (integer or float)
    Number(YamlNumber),
    /// A YAML boolean
    Boolean(bool),
    /// A YAML null value
    Null,
}

impl YamlValue {
    /// Returns the string content of a string scalar.
    ///
    /// Numbers and booleans are not coerced: `name: 42` has no string name.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            YamlValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Looks up `key` when this value is an object.
    pub fn get(&self, key: &str) -> Option<&YamlValue> {
        match self {
            YamlValue::Object(entries) => entries.get(key),
            _ => None,
        }
    }
}

impl From<&str> for YamlValue {
    fn from(s: &str) -> Self {
        YamlValue::String(s.to_string())
    }
}
