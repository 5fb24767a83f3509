//! Key search over decoded YAML documents.
//!
//! A search walks the whole document and reports every mapping key that
//! matches a term, together with the dotted path leading to it and the
//! subtree stored under it.
//!
//! # Path syntax
//!
//! - `.key` - a mapping entry
//! - `[0]` - a sequence element without a usable name
//! - `.web` - a sequence element whose `metadata.name` (or else `name`) is `web`
//!
//! # Examples
//!
//! ```
//! use kubectl_grep::document::parser::parse_yaml;
//! use kubectl_grep::search::{search, SearchConfig};
//!
//! let doc = parse_yaml("spec:\n  containers:\n  - image: nginx\n").unwrap();
//! let config = SearchConfig::new("image").unwrap().exact_match(true);
//!
//! let found = search(&doc, &config);
//! assert_eq!(found[0].path, ".spec.containers[0].image");
//! ```

pub mod matcher;

pub use matcher::{key_matches, search};

use crate::document::node::YamlValue;
use crate::error::{GrepError, Result};

/// Mapping key that is skipped unless `include_status_key` is set.
pub const STATUS_KEY: &str = "status";

/// Options for a single search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    term: String,
    /// Compare keys case-insensitively in substring mode.
    pub ignore_case: bool,
    /// Only keys equal to the term match. Always case-sensitive.
    pub exact_match: bool,
    /// Also search under keys named `status`.
    pub include_status_key: bool,
}

impl SearchConfig {
    /// Creates a case-sensitive substring search for `term`.
    ///
    /// # Errors
    ///
    /// Returns `GrepError::EmptySearchTerm` when `term` is empty.
    pub fn new(term: impl Into<String>) -> Result<Self> {
        let term = term.into();
        if term.is_empty() {
            return Err(GrepError::EmptySearchTerm);
        }
        Ok(Self {
            term,
            ignore_case: false,
            exact_match: false,
            include_status_key: false,
        })
    }

    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn exact_match(mut self, exact_match: bool) -> Self {
        self.exact_match = exact_match;
        self
    }

    pub fn include_status_key(mut self, include_status_key: bool) -> Self {
        self.include_status_key = include_status_key;
        self
    }

    /// The search term. Never empty.
    pub fn term(&self) -> &str {
        &self.term
    }
}

/// One matching key.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Dotted path of the matching key, e.g. `.spec.containers[0].image`.
    pub path: String,
    /// The subtree stored under the key.
    pub value: YamlValue,
    /// Whether the key equals the term exactly. Not used for ordering.
    pub exact: bool,
}

impl Match {
    pub fn new(path: String, value: YamlValue, exact: bool) -> Self {
        Self { path, value, exact }
    }
}
