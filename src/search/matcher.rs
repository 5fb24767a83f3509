//! Recursive key matcher.

use super::{Match, SearchConfig, STATUS_KEY};
use crate::document::node::YamlValue;

/// Searches `root` for mapping keys matching `config`.
///
/// Matches are returned in document order. A matching key's subtree is
/// returned whole and not searched again, so no match is ever nested inside
/// another. A scalar root has no keys and yields nothing.
pub fn search(root: &YamlValue, config: &SearchConfig) -> Vec<Match> {
    let mut results = Vec::new();
    walk(root, "", config, &mut results);
    tracing::debug!(term = config.term(), matches = results.len(), "search finished");
    results
}

/// Returns whether a mapping key matches the search term.
///
/// Exact mode compares case-sensitively even when `ignore_case` is set.
///
/// ```
/// use kubectl_grep::search::{key_matches, SearchConfig};
///
/// let config = SearchConfig::new("port").unwrap();
/// assert!(key_matches("targetPort", &config.clone().ignore_case(true)));
/// assert!(!key_matches("targetPort", &config.exact_match(true)));
/// ```
pub fn key_matches(key: &str, config: &SearchConfig) -> bool {
    if config.exact_match {
        key == config.term()
    } else if config.ignore_case {
        key.to_lowercase().contains(&config.term().to_lowercase())
    } else {
        key.contains(config.term())
    }
}

fn walk(node: &YamlValue, path: &str, config: &SearchConfig, results: &mut Vec<Match>) {
    match node {
        YamlValue::Object(entries) => {
            for (key, child) in entries {
                if key == STATUS_KEY && !config.include_status_key {
                    continue;
                }

                let child_path = format!("{}.{}", path, key);
                if key_matches(key, config) {
                    tracing::trace!(path = %child_path, "key matched");
                    let exact = key == config.term();
                    results.push(Match::new(child_path, child.clone(), exact));
                } else {
                    walk(child, &child_path, config, results);
                }
            }
        }
        YamlValue::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                let item_path = match element_name(item) {
                    Some(name) => format!("{}.{}", path, name),
                    None => format!("{}[{}]", path, idx),
                };
                walk(item, &item_path, config, results);
            }
        }
        _ => {}
    }
}

/// Logical name of a sequence element: `metadata.name`, else `name`.
///
/// Only non-empty string scalars count, so `name: 42` or `name: ""` fall
/// back to the numeric index.
fn element_name(item: &YamlValue) -> Option<&str> {
    item.get("metadata")
        .and_then(|metadata| metadata.get("name"))
        .and_then(non_empty_str)
        .or_else(|| item.get("name").and_then(non_empty_str))
}

fn non_empty_str(value: &YamlValue) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}
