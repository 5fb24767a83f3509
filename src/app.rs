//! The search pipeline: decode, match, encode, optionally pass on.

use crate::config::Config;
use crate::document::emitter::encode_matches;
use crate::document::parser::parse_yaml;
use crate::error::{GrepError, Result};
use crate::pipe::PassOutput;
use crate::search::{search, SearchConfig};

/// Everything one invocation needs besides the input text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub search: String,
    pub ignore_case: bool,
    pub exact_match: bool,
    pub show_status: bool,
    pub pass_output: Option<String>,
}

impl AppOptions {
    /// Options for a plain case-sensitive substring search.
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Self::default()
        }
    }

    /// Builds the matcher configuration.
    ///
    /// # Errors
    ///
    /// Returns `GrepError::EmptySearchTerm` when no search term was given.
    pub fn search_config(&self) -> Result<SearchConfig> {
        Ok(SearchConfig::new(self.search.as_str())?
            .ignore_case(self.ignore_case)
            .exact_match(self.exact_match)
            .include_status_key(self.show_status))
    }
}

/// Settings given on the command line or through `KUBECTL_GREP_*`.
///
/// `None` means the user said nothing and the config file decides. An
/// explicit value, including `false`, always wins over the file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlagOverrides {
    pub ignore_case: Option<bool>,
    pub exact_match: Option<bool>,
    pub show_status: Option<bool>,
    pub pass_output: Option<String>,
}

impl FlagOverrides {
    /// Merges these flags over `config` into the options for one search.
    ///
    /// ```
    /// use kubectl_grep::app::FlagOverrides;
    /// use kubectl_grep::config::Config;
    ///
    /// let config = Config { exact: true, ..Config::default() };
    /// let flags = FlagOverrides { exact_match: Some(false), ..FlagOverrides::default() };
    /// assert!(!flags.resolve("image", &config).exact_match);
    /// ```
    pub fn resolve(self, search: impl Into<String>, config: &Config) -> AppOptions {
        AppOptions {
            search: search.into(),
            ignore_case: self.ignore_case.unwrap_or(config.ignore_case),
            exact_match: self.exact_match.unwrap_or(config.exact),
            show_status: self.show_status.unwrap_or(config.show_status),
            pass_output: self.pass_output.or_else(|| config.pass_output.clone()),
        }
    }
}

/// Searches a YAML document and returns the matches encoded as YAML.
///
/// ```
/// use kubectl_grep::app::{app, AppOptions};
///
/// let output = app("spec:\n  image: nginx\n", &AppOptions::new("image")).unwrap();
/// assert_eq!(output, ".spec.image: nginx\n");
/// ```
///
/// # Errors
///
/// - `EmptySearchTerm` before anything is decoded
/// - `Decode` when the input is not YAML
/// - `NoMatches` when the document is valid but nothing matched
/// - `Encode` when the result cannot be serialized
pub fn app(input: &str, options: &AppOptions) -> Result<String> {
    let config = options.search_config()?;
    let document = parse_yaml(input)?;

    let found = search(&document, &config);
    if found.is_empty() {
        return Err(GrepError::NoMatches);
    }

    encode_matches(&found)
}

/// Runs [`app`] and then hands the output to the pass-output command, if any.
pub fn run(input: &str, options: &AppOptions, config: &Config) -> Result<String> {
    let output = app(input, options)?;

    match &options.pass_output {
        Some(command) if !command.is_empty() => {
            let pipe = PassOutput::new(command.as_str()).with_timeout(config.pipe_timeout());
            tracing::debug!(command = pipe.command(), "passing output");
            Ok(pipe.pipe(&output)?)
        }
        _ => Ok(output),
    }
}
