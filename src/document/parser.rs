//! YAML decoding into `YamlValue` trees.
//!
//! `serde_yaml` does the actual parsing; this module converts its generic
//! `Value` into our own tree so key order is kept and every key is a string.
//!
//! # Example
//!
//! ```
//! use kubectl_grep::document::parser::parse_yaml;
//!
//! let doc = parse_yaml("spec:\n  image: nginx\n").unwrap();
//! assert!(doc.get("spec").is_some());
//! ```

use super::node::{YamlNumber, YamlValue};
use crate::error::{GrepError, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::Value as SerdeValue;

/// Parses a YAML string into a `YamlValue`.
///
/// A single document becomes its root value. Several `---` separated
/// documents become an array of documents, so each one is addressed by its
/// `metadata.name` like the items of a `kind: List`. Empty documents are
/// skipped, so `image: nginx\n---\n` is still a single document. Empty
/// input is `Null`.
///
/// # Errors
///
/// Returns `GrepError::Decode` (carrying the raw input) when the text is not
/// valid YAML, and `GrepError::UnsupportedKey` when a mapping uses a
/// sequence or mapping as a key.
///
/// ```
/// use kubectl_grep::document::parser::parse_yaml;
///
/// assert!(parse_yaml("key: [unclosed").is_err());
/// ```
pub fn parse_yaml(yaml_str: &str) -> Result<YamlValue> {
    let mut documents = Vec::new();
    for document in serde_yaml::Deserializer::from_str(yaml_str) {
        let value = SerdeValue::deserialize(document).map_err(|source| GrepError::Decode {
            input: yaml_str.to_string(),
            source,
        })?;
        // A trailing `---` or a comment-only document decodes to null.
        if !value.is_null() {
            documents.push(value);
        }
    }

    tracing::debug!(documents = documents.len(), "decoded yaml input");

    match documents.len() {
        0 => Ok(YamlValue::Null),
        1 => convert_serde_value(&documents[0]),
        _ => documents
            .iter()
            .map(convert_serde_value)
            .collect::<Result<Vec<_>>>()
            .map(YamlValue::Array),
    }
}

/// Converts a `serde_yaml::Value` into a `YamlValue`.
///
/// Tags are dropped and the tagged value kept.
pub fn convert_serde_value(value: &SerdeValue) -> Result<YamlValue> {
    let converted = match value {
        SerdeValue::Mapping(map) => {
            let mut entries = IndexMap::with_capacity(map.len());
            for (k, v) in map {
                entries.insert(key_to_string(k)?, convert_serde_value(v)?);
            }
            YamlValue::Object(entries)
        }
        SerdeValue::Sequence(seq) => YamlValue::Array(
            seq.iter()
                .map(convert_serde_value)
                .collect::<Result<Vec<_>>>()?,
        ),
        SerdeValue::String(s) => YamlValue::String(s.clone()),
        SerdeValue::Number(n) => YamlValue::Number(convert_number(n)),
        SerdeValue::Bool(b) => YamlValue::Boolean(*b),
        SerdeValue::Null => YamlValue::Null,
        SerdeValue::Tagged(tagged) => convert_serde_value(&tagged.value)?,
    };
    Ok(converted)
}

fn convert_number(n: &serde_yaml::Number) -> YamlNumber {
    if let Some(i) = n.as_i64() {
        YamlNumber::Integer(i)
    } else if let Some(u) = n.as_u64() {
        YamlNumber::Unsigned(u)
    } else {
        YamlNumber::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// Spells a mapping key the way it reads in the document.
///
/// `80: http` is keyed `"80"`, `true: x` is keyed `"true"`, `~: x` is
/// keyed `"null"`.
fn key_to_string(key: &SerdeValue) -> Result<String> {
    match key {
        SerdeValue::String(s) => Ok(s.clone()),
        SerdeValue::Number(n) => Ok(n.to_string()),
        SerdeValue::Bool(b) => Ok(b.to_string()),
        SerdeValue::Null => Ok("null".to_string()),
        SerdeValue::Tagged(tagged) => key_to_string(&tagged.value),
        SerdeValue::Sequence(_) => Err(GrepError::UnsupportedKey { kind: "sequence" }),
        SerdeValue::Mapping(_) => Err(GrepError::UnsupportedKey { kind: "mapping" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_string() {
        let value = parse_yaml("hello").unwrap();
        assert_eq!(value, YamlValue::String("hello".to_string()));
    }

    #[test]
    fn test_parse_preserves_key_order() {
        let value = parse_yaml("zeta: 1\nalpha: 2\nmid: 3\n").unwrap();
        match value {
            YamlValue::Object(entries) => {
                let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
                assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_parse_scalar_types() {
        let value = parse_yaml("port: 80\nratio: 0.5\nenabled: true\nnothing: ~\n").unwrap();
        assert_eq!(
            value.get("port"),
            Some(&YamlValue::Number(YamlNumber::Integer(80)))
        );
        assert_eq!(
            value.get("ratio"),
            Some(&YamlValue::Number(YamlNumber::Float(0.5)))
        );
        assert_eq!(value.get("enabled"), Some(&YamlValue::Boolean(true)));
        assert_eq!(value.get("nothing"), Some(&YamlValue::Null));
    }

    #[test]
    fn test_parse_large_unsigned() {
        let value = parse_yaml("big: 18446744073709551615").unwrap();
        assert_eq!(
            value.get("big"),
            Some(&YamlValue::Number(YamlNumber::Unsigned(u64::MAX)))
        );
    }

    #[test]
    fn test_parse_non_string_keys() {
        let value = parse_yaml("80: http\ntrue: yes\n").unwrap();
        assert_eq!(value.get("80"), Some(&YamlValue::from("http")));
        assert!(value.get("true").is_some());
    }

    #[test]
    fn test_parse_complex_key_is_rejected() {
        let result = parse_yaml("? [a, b]\n: value\n");
        assert!(matches!(
            result,
            Err(GrepError::UnsupportedKey { kind: "sequence" })
        ));
    }

    #[test]
    fn test_parse_tagged_value_is_unwrapped() {
        let value = parse_yaml("secret: !vault abc\n").unwrap();
        assert_eq!(value.get("secret"), Some(&YamlValue::from("abc")));
    }

    #[test]
    fn test_parse_empty_input_is_null() {
        assert_eq!(parse_yaml("").unwrap(), YamlValue::Null);
    }

    #[test]
    fn test_parse_multiple_documents() {
        let yaml = "metadata:\n  name: one\n---\nmetadata:\n  name: two\n";
        match parse_yaml(yaml).unwrap() {
            YamlValue::Array(docs) => assert_eq!(docs.len(), 2),
            other => panic!("Expected array of documents, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_skips_empty_documents() {
        let value = parse_yaml("image: nginx\n---\n# only a comment\n").unwrap();
        assert_eq!(value.get("image"), Some(&YamlValue::from("nginx")));

        assert_eq!(parse_yaml("---\n---\n").unwrap(), YamlValue::Null);
    }

    #[test]
    fn test_parse_invalid_yaml_echoes_input() {
        let input = "spec: [unclosed";
        match parse_yaml(input) {
            Err(GrepError::Decode { input: echoed, .. }) => assert_eq!(echoed, input),
            other => panic!("Expected decode error, got {:?}", other),
        }
    }
}
