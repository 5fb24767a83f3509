//! Turning search results back into YAML text.
//!
//! The matches of one search are collapsed into a single mapping keyed by
//! path and serialized with `serde_yaml`, so the output can be read (or piped
//! into another tool) exactly like the input.

use super::node::{YamlNumber, YamlValue};
use crate::error::{GrepError, Result};
use crate::search::Match;
use indexmap::IndexMap;
use serde_yaml::Value as SerdeValue;

/// Collapses matches into an ordered `path -> value` mapping.
///
/// Paths keep the order in which they were found. When two matches share a
/// path (two list items with the same logical name) the entry keeps its first
/// position and takes the later value.
pub fn assemble(matches: &[Match]) -> IndexMap<String, YamlValue> {
    let mut result = IndexMap::with_capacity(matches.len());
    for found in matches {
        result.insert(found.path.clone(), found.value.clone());
    }
    result
}

/// Serializes matches as a YAML mapping of path to matched subtree.
///
/// ```
/// use kubectl_grep::document::emitter::encode_matches;
/// use kubectl_grep::search::Match;
///
/// let found = vec![Match::new(".image".to_string(), "nginx".into(), true)];
/// assert_eq!(encode_matches(&found).unwrap(), ".image: nginx\n");
/// ```
pub fn encode_matches(matches: &[Match]) -> Result<String> {
    let mapping: serde_yaml::Mapping = assemble(matches)
        .into_iter()
        .map(|(path, value)| (SerdeValue::String(path), to_serde_value(&value)))
        .collect();

    serde_yaml::to_string(&SerdeValue::Mapping(mapping)).map_err(GrepError::Encode)
}

/// Converts a `YamlValue` back into a `serde_yaml::Value`.
pub fn to_serde_value(value: &YamlValue) -> SerdeValue {
    match value {
        YamlValue::Object(entries) => {
            let map: serde_yaml::Mapping = entries
                .iter()
                .map(|(k, v)| (SerdeValue::String(k.clone()), to_serde_value(v)))
                .collect();
            SerdeValue::Mapping(map)
        }
        YamlValue::Array(elements) => {
            SerdeValue::Sequence(elements.iter().map(to_serde_value).collect())
        }
        YamlValue::String(s) => SerdeValue::String(s.clone()),
        YamlValue::Number(n) => match n {
            YamlNumber::Integer(i) => SerdeValue::Number(serde_yaml::Number::from(*i)),
            YamlNumber::Unsigned(u) => SerdeValue::Number(serde_yaml::Number::from(*u)),
            YamlNumber::Float(f) => SerdeValue::Number(serde_yaml::Number::from(*f)),
        },
        YamlValue::Boolean(b) => SerdeValue::Bool(*b),
        YamlValue::Null => SerdeValue::Null,
    }
}
