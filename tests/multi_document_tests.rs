//! Tests for multi-document YAML input.

use kubectl_grep::document::node::YamlValue;
use kubectl_grep::document::parser::parse_yaml;
use kubectl_grep::search::{search, SearchConfig};

#[test]
fn test_parse_single_document() {
    let node = parse_yaml("---\nkey: value\n").unwrap();

    // A single document is not wrapped
    assert!(matches!(node, YamlValue::Object(_)));
}

#[test]
fn test_parse_multi_document() {
    let yaml = r#"---
name: first
value: 1
---
name: second
value: 2
---
name: third
value: 3
"#;

    match parse_yaml(yaml).unwrap() {
        YamlValue::Array(docs) => {
            assert_eq!(docs.len(), 3);
            assert_eq!(docs[0].get("name").and_then(YamlValue::as_str), Some("first"));
            assert_eq!(docs[2].get("name").and_then(YamlValue::as_str), Some("third"));
        }
        other => panic!("Expected documents as array, got {:?}", other),
    }
}

#[test]
fn test_search_across_documents() {
    let yaml = r#"---
name: first
value: 1
---
value: 2
"#;

    let node = parse_yaml(yaml).unwrap();
    let config = SearchConfig::new("value").unwrap().exact_match(true);
    let paths: Vec<String> = search(&node, &config).into_iter().map(|m| m.path).collect();

    assert_eq!(paths, vec![".first.value".to_string(), "[1].value".to_string()]);
}

#[test]
fn test_invalid_second_document_fails() {
    let yaml = "key: value\n---\nbroken: [\n";
    assert!(parse_yaml(yaml).is_err());
}

#[test]
fn test_trailing_separator_is_single_document() {
    let node = parse_yaml("image: nginx\n---\n").unwrap();
    assert!(matches!(node, YamlValue::Object(_)));

    let node = parse_yaml("image: nginx\n---\n# kubectl appends nothing here\n").unwrap();
    assert_eq!(node.get("image").and_then(YamlValue::as_str), Some("nginx"));
}

#[test]
fn test_empty_document_takes_no_index() {
    let yaml = "---\nimage: nginx\n---\n---\nimage: busybox\n";

    let node = parse_yaml(yaml).unwrap();
    let config = SearchConfig::new("image").unwrap();
    let paths: Vec<String> = search(&node, &config).into_iter().map(|m| m.path).collect();

    assert_eq!(paths, vec!["[0].image".to_string(), "[1].image".to_string()]);
}
